use crate::app_state::AppState;
use crate::{ApiError, UserId};

use axum::extract::FromRequestParts;
use http::Request;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");
    AppState { pool }
}

#[tokio::test]
async fn test_valid_header_extracts_user_id() {
    let state = test_state().await;
    let user_id = Uuid::new_v4();

    let (mut parts, _) = Request::builder()
        .header("X-User-Id", user_id.to_string())
        .body(())
        .unwrap()
        .into_parts();

    let result = UserId::from_request_parts(&mut parts, &state).await;

    let UserId(extracted) = result.expect("extraction should succeed");
    assert_eq!(extracted, user_id);
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let state = test_state().await;

    let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

    let result = UserId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_malformed_header_is_rejected() {
    let state = test_state().await;

    let (mut parts, _) = Request::builder()
        .header("X-User-Id", "not-a-uuid")
        .body(())
        .unwrap()
        .into_parts();

    let result = UserId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
