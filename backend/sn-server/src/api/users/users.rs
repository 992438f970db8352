//! User REST API handlers
//!
//! Profile lookup, username search, profile updates and follow/unfollow,
//! all on behalf of the acting viewer from the `X-User-Id` header.

use crate::api::users::search_users_query::SearchUsersQuery;
use crate::app_state::AppState;
use crate::{
    ApiResult, FollowResponse, ProfileDto, ProfileResponse, SearchResponse, UpdateProfileRequest,
    UserId,
};

use sn_profiles::ProfileService;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users/search?q={username}
///
/// Resolve a search query to exactly one identity
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let service = ProfileService::new(state.pool.clone());
    let user_id = service
        .find_identity_by_query(query.q.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(SearchResponse {
        user_id: user_id.to_string(),
    }))
}

/// GET /api/v1/users/:id
///
/// Get a profile together with the viewer's presentation kind and stats
pub async fn get_user(
    State(state): State<AppState>,
    UserId(viewer): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let target = Uuid::parse_str(&id)?;

    let service = ProfileService::new(state.pool.clone());
    let profile = service.get_profile(target).await?;
    let view = service.resolve_view(viewer, target).await?;
    let stats = service.follow_stats(target).await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::from(profile),
        view,
        stats,
    }))
}

/// POST /api/v1/users/:id/follow
///
/// Establish viewer → target; following an already-followed user succeeds
pub async fn follow_user(
    State(state): State<AppState>,
    UserId(viewer): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<FollowResponse>> {
    let target = Uuid::parse_str(&id)?;

    let service = ProfileService::new(state.pool.clone());
    service.follow(viewer, target).await?;

    Ok(Json(FollowResponse {
        user_id: target.to_string(),
        is_following: true,
    }))
}

/// POST /api/v1/users/:id/unfollow
///
/// Remove viewer → target; unfollowing a non-followed user succeeds
pub async fn unfollow_user(
    State(state): State<AppState>,
    UserId(viewer): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<FollowResponse>> {
    let target = Uuid::parse_str(&id)?;

    let service = ProfileService::new(state.pool.clone());
    service.unfollow(viewer, target).await?;

    Ok(Json(FollowResponse {
        user_id: target.to_string(),
        is_following: false,
    }))
}

/// PUT /api/v1/profile
///
/// Update the viewer's own username and bio
pub async fn update_profile(
    State(state): State<AppState>,
    UserId(viewer): UserId,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.pool.clone());
    service
        .update_profile(viewer, &req.username, req.bio.as_deref())
        .await?;

    let profile = service.get_profile(viewer).await?;
    let view = service.resolve_view(viewer, viewer).await?;
    let stats = service.follow_stats(viewer).await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::from(profile),
        view,
        stats,
    }))
}
