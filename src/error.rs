//! Error types for the clipboard server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

// == Clipboard Error Enum ==
/// Unified error type for the clipboard server.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Payload exceeds the configured size ceiling
    #[error("Content exceeds maximum size of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Identifier absent or expired
    #[error("Clipboard not found: {0}")]
    NotFound(String),

    /// Store connection or command failure
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Request could not be read
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration rejected at startup
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<redis::RedisError> for ClipboardError {
    fn from(err: redis::RedisError) -> Self {
        ClipboardError::StoreUnavailable(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ClipboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClipboardError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ClipboardError::NotFound(_) => StatusCode::NOT_FOUND,
            ClipboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ClipboardError::StoreUnavailable(_) | ClipboardError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = self.to_string();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", detail);
        } else {
            warn!(status = status.as_u16(), "{}", detail);
        }

        // Server-side detail (store address, auth errors) stays in the log
        let message = match self {
            ClipboardError::StoreUnavailable(_) => "Store unavailable".to_string(),
            ClipboardError::Config(_) => "Internal server error".to_string(),
            _ => detail,
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the clipboard server.
pub type Result<T> = std::result::Result<T, ClipboardError>;
