//! Follow repository for directed follow edges.
//!
//! One row per ordered (follower, followee) pair. The composite primary
//! key serializes concurrent writes on the same pair, so two racing
//! creates never produce two edges and a create racing a delete settles
//! into exactly one of the two valid states.

use crate::Result as DbErrorResult;

use sn_core::FollowEdge;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct FollowRepository {
    pool: SqlitePool,
}

impl FollowRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether the directed edge (follower → followee) exists.
    /// Returns false for any unestablished pair, never an error.
    pub async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> DbErrorResult<bool> {
        let follower = follower_id.to_string();
        let followee = followee_id.to_string();

        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM follows
                WHERE follower_id = ? AND followee_id = ?
            "#,
        )
        .bind(follower)
        .bind(followee)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Insert the edge if absent. A duplicate create is a silent success
    /// and leaves the original row (and its created_at) untouched.
    pub async fn create(&self, edge: &FollowEdge) -> DbErrorResult<()> {
        let follower = edge.follower_id.to_string();
        let followee = edge.followee_id.to_string();
        let created_at = edge.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT OR IGNORE INTO follows (follower_id, followee_id, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(follower)
        .bind(followee)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the edge if present; removing an absent edge is a no-op.
    pub async fn delete(&self, follower_id: Uuid, followee_id: Uuid) -> DbErrorResult<()> {
        let follower = follower_id.to_string();
        let followee = followee_id.to_string();

        sqlx::query(
            r#"
                DELETE FROM follows
                WHERE follower_id = ? AND followee_id = ?
            "#,
        )
        .bind(follower)
        .bind(followee)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_followers(&self, followee_id: Uuid) -> DbErrorResult<i64> {
        let followee = followee_id.to_string();

        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM follows
                WHERE followee_id = ?
            "#,
        )
        .bind(followee)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn count_following(&self, follower_id: Uuid) -> DbErrorResult<i64> {
        let follower = follower_id.to_string();

        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM follows
                WHERE follower_id = ?
            "#,
        )
        .bind(follower)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
