//! Typed failures for profile and follow-graph operations.
//!
//! Every operation reports one of three kinds; callers match on the
//! variant (or its stable `code()`) instead of inspecting error types at
//! runtime. Validation failures are raised before any store call, so no
//! partial state change accompanies an `InvalidArgument`.

use sn_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// A required input was empty or the operation is self-referential
    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// The target account or search query resolved to nothing
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The persistence layer failed; propagated unchanged, never retried here
    #[error("Store error: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },
}

impl ServiceError {
    /// Stable machine-readable code for the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Store { .. } => "STORE_ERROR",
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
