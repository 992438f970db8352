use sn_core::Profile;

use serde::Serialize;

/// Profile DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub username: String,
    pub bio: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.to_string(),
            username: p.username,
            bio: p.bio,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
