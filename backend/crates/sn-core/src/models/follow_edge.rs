//! Follow edge - a directed relationship between two accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered pair meaning "follower observes followee's content".
/// At most one edge exists per ordered pair, and (A→B) never implies (B→A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(follower_id: Uuid, followee_id: Uuid) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }

    /// A self-edge is never valid; callers reject it before any store call.
    pub fn is_self_edge(&self) -> bool {
        self.follower_id == self.followee_id
    }
}
