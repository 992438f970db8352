use crate::ProfileDto;

use sn_core::{FollowStats, ProfileView};

use serde::Serialize;

/// Single profile response, shaped for the requesting viewer
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
    pub view: ProfileView,
    pub stats: FollowStats,
}
