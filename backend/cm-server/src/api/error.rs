//! REST API error types
//!
//! Every failure leaves the handler as one of these and is rendered as
//! `{"error": {"code", "message", "field"?}}` with a matching status.

use cm_core::CoreError;
use cm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending input, when the error is about one specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown route (404). Absent users are not errors.
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Well-formed request with unusable content (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Request that could not be read at all (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Store unreachable (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<DbError>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        #[source]
        source: Option<DbError>,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Level this error is logged at when turned into a response
    pub fn log_level(&self) -> log::Level {
        match self {
            ApiError::NotFound { .. } => log::Level::Debug,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => log::Level::Warn,
            ApiError::Unavailable { .. } | ApiError::Internal { .. } => log::Level::Error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match std::error::Error::source(&self) {
            Some(cause) => log::log!(self.log_level(), "{} caused by: {}", self, cause),
            None => log::log!(self.log_level(), "{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::Unavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                message,
                None,
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert domain errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidUserId { value, .. } => ApiError::Validation {
                message: format!("Invalid user id '{}'", value),
                field: Some("id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Details travel as the source and are logged, never sent
        if e.is_unavailable() {
            ApiError::Unavailable {
                message: "Database unavailable".to_string(),
                source: Some(e),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: "Database operation failed".to_string(),
                source: Some(e),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Convert request body rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation {
                message: e.body_text(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::BadRequest {
                message: other.body_text(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert path rejections (undecodable `{id}` segment) to API errors
impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
