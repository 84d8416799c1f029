//! Error types for recipe-api
//!
//! One taxonomy shared by the service and HTTP layers. Every variant maps to
//! a fixed status code and a short category in the response body; unexpected
//! errors are logged in full but reported with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input shape or range (400)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No recipe with the requested id (404)
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// External fetch exhausted its retries (503)
    #[error("External API error: {0}")]
    ExternalApi(String),

    /// Anything else (500)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, category, message) = match self {
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, "Invalid argument", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Recipe not found", msg),
            ApiError::ExternalApi(msg) => (StatusCode::SERVICE_UNAVAILABLE, "External API error", msg),
            ApiError::Other(ref err) => {
                // Full chain goes to the log; the response body stays generic
                tracing::error!("Unexpected error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": category,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for service and handler code
pub type ApiResult<T> = Result<T, ApiError>;
