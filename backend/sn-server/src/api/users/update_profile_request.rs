use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,

    /// Omitted bio is stored as the empty string
    #[serde(default)]
    pub bio: Option<String>,
}
