pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    users::{
        follow_response::FollowResponse,
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        search_response::SearchResponse,
        search_users_query::SearchUsersQuery,
        update_profile_request::UpdateProfileRequest,
        users::{follow_user, get_user, search_users, unfollow_user, update_profile},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
