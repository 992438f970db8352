//! Profile resolution and follow-graph orchestration.
//!
//! Business rules live here; durable state lives in the repositories.
//! The acting viewer's identity arrives as an explicit parameter on every
//! call — the auth layer has already established it.

use crate::{Result as ServiceResult, ServiceError};

use sn_core::{FollowEdge, FollowStats, Profile, ProfileView};
use sn_db::{FollowRepository, ProfileRepository};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a registered account's public profile.
    pub async fn get_profile(&self, identity: Uuid) -> ServiceResult<Profile> {
        let repo = ProfileRepository::new(self.pool.clone());

        repo.find_by_id(identity)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                message: format!("Account {} not found", identity),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Resolve a search query (a username) to exactly one identity.
    pub async fn find_identity_by_query(&self, query: &str) -> ServiceResult<Uuid> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::InvalidArgument {
                message: "Search query cannot be empty".into(),
                field: Some("query".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let repo = ProfileRepository::new(self.pool.clone());
        let profile = repo
            .find_by_username(query)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                message: format!("No account matches '{}'", query),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(profile.id)
    }

    /// Update username and bio together. An omitted bio is stored as the
    /// empty string; partial updates are not exposed.
    pub async fn update_profile(
        &self,
        identity: Uuid,
        username: &str,
        bio: Option<&str>,
    ) -> ServiceResult<()> {
        debug!("UpdateProfile starting for {}", identity);

        let username = username.trim();
        if username.is_empty() {
            return Err(ServiceError::InvalidArgument {
                message: "Username cannot be empty".into(),
                field: Some("username".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bio = bio.unwrap_or("");

        let repo = ProfileRepository::new(self.pool.clone());
        let rows = repo
            .update_profile(identity, username, bio, Utc::now())
            .await?;

        if rows == 0 {
            return Err(ServiceError::NotFound {
                message: format!("Account {} not found", identity),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Updated profile for {}", identity);
        Ok(())
    }

    /// Establish the directed edge acting → target.
    ///
    /// # Validation
    ///
    /// 1. Self-follow check, before any store call
    /// 2. Target must resolve to an existing account
    /// 3. Edge create is idempotent — re-following is a silent success
    pub async fn follow(&self, acting: Uuid, target: Uuid) -> ServiceResult<()> {
        debug!("Follow starting: {} -> {}", acting, target);

        if acting == target {
            return Err(ServiceError::InvalidArgument {
                message: "Cannot follow yourself".into(),
                field: Some("target".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let profiles = ProfileRepository::new(self.pool.clone());
        profiles
            .find_by_id(target)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                message: format!("Account {} not found", target),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let follows = FollowRepository::new(self.pool.clone());
        follows.create(&FollowEdge::new(acting, target)).await?;

        info!("{} now follows {}", acting, target);
        Ok(())
    }

    /// Remove the directed edge acting → target. Unfollowing someone the
    /// viewer never followed is a silent success.
    pub async fn unfollow(&self, acting: Uuid, target: Uuid) -> ServiceResult<()> {
        debug!("Unfollow starting: {} -> {}", acting, target);

        let follows = FollowRepository::new(self.pool.clone());
        follows.delete(acting, target).await?;

        info!("{} no longer follows {}", acting, target);
        Ok(())
    }

    /// Whether acting currently follows target. A viewer never follows
    /// themselves, so the self pair reports false rather than an error.
    pub async fn is_following(&self, acting: Uuid, target: Uuid) -> ServiceResult<bool> {
        if acting == target {
            return Ok(false);
        }

        let follows = FollowRepository::new(self.pool.clone());
        Ok(follows.exists(acting, target).await?)
    }

    /// Decide which presentation the viewer gets for a target profile.
    pub async fn resolve_view(&self, viewer: Uuid, target: Uuid) -> ServiceResult<ProfileView> {
        if viewer == target {
            return Ok(ProfileView::OwnProfile);
        }

        let is_following = self.is_following(viewer, target).await?;
        Ok(ProfileView::OtherProfile { is_following })
    }

    /// Derived follower/following counts for a profile.
    pub async fn follow_stats(&self, identity: Uuid) -> ServiceResult<FollowStats> {
        let follows = FollowRepository::new(self.pool.clone());

        Ok(FollowStats {
            followers: follows.count_followers(identity).await?,
            following: follows.count_following(identity).await?,
        })
    }
}
