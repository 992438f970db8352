//! Profile repository for account profile rows.
//!
//! Accounts are created at registration and deleted by the auth layer;
//! this repository reads profiles and applies field updates.

use crate::{DbError, Result as DbErrorResult};

use sn_core::Profile;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> DbErrorResult<()> {
        let id = profile.id.to_string();
        let created_at = profile.created_at.timestamp();
        let updated_at = profile.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, username, bio, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&profile.username)
        .bind(&profile.bio)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, bio, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_profile_row).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, bio, created_at, updated_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_profile_row).transpose()
    }

    /// Persist both mutable fields in one statement. Returns the number of
    /// rows touched so callers can distinguish a missing account.
    pub async fn update_profile(
        &self,
        id: Uuid,
        username: &str,
        bio: &str,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        let id_str = id.to_string();
        let updated_at = updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET username = ?, bio = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(username)
        .bind(bio)
        .bind(updated_at)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn map_profile_row(row: SqliteRow) -> DbErrorResult<Profile> {
    let id: String = row.try_get("id")?;
    let username: String = row.try_get("username")?;
    let bio: String = row.try_get("bio")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Profile {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        username,
        bio,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
