use crate::ApiError;

use sn_profiles::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Account not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Account not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Username cannot be empty".into(),
        field: Some("username".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Storage operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_error = ApiError::from(uuid_error);

    assert!(matches!(api_error, ApiError::Validation { .. }));
}

#[test]
fn test_service_not_found_converts_to_not_found() {
    let service_error = ServiceError::NotFound {
        message: "Account x not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error = ApiError::from(service_error);

    assert!(matches!(api_error, ApiError::NotFound { .. }));
}

#[test]
fn test_service_invalid_argument_converts_to_validation() {
    let service_error = ServiceError::InvalidArgument {
        message: "Cannot follow yourself".into(),
        field: Some("target".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_error = ApiError::from(service_error);

    assert!(matches!(
        api_error,
        ApiError::Validation {
            field: Some(_),
            ..
        }
    ));
}
