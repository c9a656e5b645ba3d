//! Error types for the preloader
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Preload Error Enum ==
/// Unified error type for fetches, the API client and the local HTTP surface.
#[derive(Error, Debug)]
pub enum PreloadError {
    /// Invalid request data (empty URL, zero timeout, bad body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Nothing preloaded for this URL, or the entry went stale
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request did not settle within its budget
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Server answered with a non-success status
    #[error("Preload failed: {0}")]
    Status(u16),

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be read or decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for PreloadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PreloadError::Timeout(0)
        } else if let Some(status) = e.status() {
            PreloadError::Status(status.as_u16())
        } else if e.is_decode() || e.is_body() {
            PreloadError::Decode(e.to_string())
        } else {
            PreloadError::Network(e.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PreloadError {
    fn into_response(self) -> Response {
        let status = match &self {
            PreloadError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PreloadError::NotFound(_) => StatusCode::NOT_FOUND,
            PreloadError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            PreloadError::Status(_) | PreloadError::Network(_) | PreloadError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            PreloadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the preloader.
pub type Result<T> = std::result::Result<T, PreloadError>;
