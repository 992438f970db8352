use serde::Serialize;

/// Settled relationship state after a follow or unfollow
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub user_id: String,
    pub is_following: bool,
}
