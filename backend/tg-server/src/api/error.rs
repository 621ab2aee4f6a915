//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`.
//! Messages are client-safe: token rejections carry the validator's reason,
//! storage failures are collapsed to "Database error".

use tg_auth::AuthError;
use tg_core::LookupError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const FIELD_REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const DATABASE_ERROR_MESSAGE: &str = "Database error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "TOKEN_EXPIRED", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(code: &'static str, message: S) -> Self {
        ApiError::Unauthorized {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::unauthorized("INVALID_CREDENTIALS", INVALID_CREDENTIALS_MESSAGE)
    }

    #[track_caller]
    pub fn required_field(field: &str) -> Self {
        ApiError::Validation {
            message: FIELD_REQUIRED_MESSAGE.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Unauthorized { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Token rejections become 401 with the validator's reason; server-side
/// token failures (configuration, encoding) become 500.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_token_rejection() {
            return ApiError::Unauthorized {
                code: e.error_code(),
                message: e.reason(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        log::error!("Token service error: {}", e);
        ApiError::Internal {
            message: e.reason(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// A lookup miss is an authentication failure; anything else hides the backend detail.
impl From<LookupError> for ApiError {
    #[track_caller]
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NotFound { .. } => ApiError::Unauthorized {
                code: "USER_NOT_FOUND",
                message: USER_NOT_FOUND_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            LookupError::Storage { message, .. } => {
                log::error!("User store error: {}", message);
                ApiError::Internal {
                    message: DATABASE_ERROR_MESSAGE.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Unparseable JSON, wrong content type, or a body of the wrong shape
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
