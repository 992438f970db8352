//! Profile entity - the public face of a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's public profile. The account itself (credentials, registration)
/// is owned by the auth layer; this entity only carries what other users see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// Unique handle, non-empty, mutable through profile updates
    pub username: String,
    /// Free-form text, empty string when the user never set one
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with an empty bio
    pub fn new(username: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            bio: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_bio(&self) -> bool {
        !self.bio.is_empty()
    }
}
