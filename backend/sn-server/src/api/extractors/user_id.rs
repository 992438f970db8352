//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::app_state::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the acting viewer's identity from the request.
///
/// The auth layer in front of this service has already authenticated the
/// caller and forwards their identity in the `X-User-Id` header; this
/// extractor only parses it. No credential checks happen here.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value =
                parts
                    .headers
                    .get("X-User-Id")
                    .ok_or_else(|| ApiError::BadRequest {
                        message: "Missing X-User-Id header".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let user_id_str = header_value.to_str().map_err(|_| ApiError::BadRequest {
                message: "Invalid X-User-Id header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let uuid = Uuid::parse_str(user_id_str).map_err(|_| {
                log::warn!("Invalid UUID in X-User-Id header: {}", user_id_str);
                ApiError::BadRequest {
                    message: "Invalid UUID in X-User-Id header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            log::debug!("Using user ID from X-User-Id header: {}", uuid);
            Ok(UserId(uuid))
        }
    }
}
