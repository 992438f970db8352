//! Per-viewer profile presentation kind.

use serde::{Deserialize, Serialize};

/// Which presentation a viewer gets for a target profile.
///
/// `OwnProfile` when the viewer is looking at themselves, otherwise
/// `OtherProfile` carrying whether the viewer already follows the target.
/// Upstream rendering branches on this to pick between the "my profile"
/// and "someone else's profile" pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileView {
    OwnProfile,
    OtherProfile { is_following: bool },
}

impl ProfileView {
    pub fn is_own(&self) -> bool {
        matches!(self, ProfileView::OwnProfile)
    }
}
