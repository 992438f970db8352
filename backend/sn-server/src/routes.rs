use crate::app_state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/api/v1/users/search", get(api::users::users::search_users))
        .route("/api/v1/users/{id}", get(api::users::users::get_user))
        .route(
            "/api/v1/users/{id}/follow",
            post(api::users::users::follow_user),
        )
        .route(
            "/api/v1/users/{id}/unfollow",
            post(api::users::users::unfollow_user),
        )
        .route("/api/v1/profile", put(api::users::users::update_profile))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
