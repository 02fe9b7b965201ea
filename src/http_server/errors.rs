//! # API Errors
//!
//! Error types for the product endpoints and their mapping to HTTP
//! status codes. Every error renders as `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Product API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a 64-bit integer
    #[error("invalid id")]
    InvalidId(String),

    /// Body is not a JSON product
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// A required field is absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// No product with the requested id
    #[error("product not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; the message is what the client sees
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Translate a store error. `public_message` replaces the internal
    /// detail, which is only logged.
    pub fn from_store(err: StoreError, public_message: &str) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Internal(detail) => {
                tracing::error!(error = %detail, "store operation failed");
                ApiError::Internal(public_message.to_string())
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingField("name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("server error".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_translation() {
        assert_eq!(
            ApiError::from_store(StoreError::NotFound(3), "server error"),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from_store(
                StoreError::Internal("lock poisoned".to_string()),
                "unable to list products"
            ),
            ApiError::Internal("unable to list products".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "product not found");
        assert_eq!(ApiError::InvalidId("x".to_string()).to_string(), "invalid id");
        assert_eq!(
            ApiError::MissingField("price").to_string(),
            "missing required field: price"
        );
    }
}
