//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses with
//! appropriate HTTP status codes. Every handler catches failures at its
//! boundary through the `From` conversions here; raw codec or database
//! text never reaches a client.

use prok_auth::AuthError;
use prok_core::CoreError;
use prok_db::DbError;
use prok_media::MediaError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body: stable `{error, details?}` shape
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness violation (400)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Missing/invalid/expired token or bad credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Referenced owner record absent post-auth (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Image decode/resize/write failure (400)
    #[error("Processing failed: {message} {location}")]
    Processing {
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

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, error) = match self {
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Conflict { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Auth { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::Processing { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(ApiErrorResponse {
                error,
                details: None,
            }),
        )
            .into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            // A hashing failure is an internal fault, not a caller problem
            AuthError::PasswordHash { .. } => {
                log::error!("Password hashing error: {}", e);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::TokenExpired { .. } => ApiError::Auth {
                message: "Token has expired".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => {
                log::debug!("Token rejected: {}", e);
                ApiError::Auth {
                    message: "Invalid or missing token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            // Constraint races surface as the same conflict as the
            // pre-insert check
            DbError::UniqueViolation { .. } => ApiError::Conflict {
                message: "Username or email already exists.".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert image pipeline errors to API errors
impl From<MediaError> for ApiError {
    #[track_caller]
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::Validation { message, .. } => ApiError::Validation {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            _ => {
                // A corrupt upload never surfaces a codec error to the caller
                log::error!("Image processing error: {}", e);
                ApiError::Processing {
                    message: "Image processing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
