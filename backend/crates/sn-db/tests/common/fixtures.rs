#![allow(dead_code)]

use sn_core::{FollowEdge, Profile};
use sn_db::ProfileRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test Profile with a unique username
pub fn create_test_profile(username: &str) -> Profile {
    Profile::new(username.to_string())
}

/// Inserts a profile row and returns its identity
pub async fn insert_test_profile(pool: &SqlitePool, username: &str) -> Uuid {
    let profile = create_test_profile(username);
    let repo = ProfileRepository::new(pool.clone());
    repo.create(&profile).await.expect("Failed to insert test profile");
    profile.id
}

/// Creates a test FollowEdge between two identities
pub fn create_test_follow(follower_id: Uuid, followee_id: Uuid) -> FollowEdge {
    FollowEdge::new(follower_id, followee_id)
}
