/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts
/// to the appropriate HTTP status code and JSON body.
///
/// Store failures map differently by pipeline: reads answer 400 (no client
/// payload was being validated), writes answer 422. Handlers pick the
/// mapping explicitly via [`ApiError::store_read`] / [`ApiError::store_write`].

use crate::validate::FieldViolation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - malformed payload, or store failure on a read
    BadRequest(String),

    /// Not found (404) - a read expected exactly one row and found none
    NotFound(String),

    /// Unprocessable entity (422) - field-level validation violations
    ValidationError(Vec<FieldViolation>),

    /// Unprocessable entity (422) - the store rejected a write; when the
    /// failure happened inside a transaction, rollback already ran
    StoreRejected(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "validation_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Per-field violation descriptors (422 validation responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ApiError {
    /// Maps a store failure on a read pipeline (GET handlers) to 400
    pub fn store_read(err: sqlx::Error) -> Self {
        ApiError::BadRequest(format!("Store error: {}", err))
    }

    /// Maps a store failure on a write pipeline (POST handlers) to 422
    pub fn store_write(err: sqlx::Error) -> Self {
        ApiError::StoreRejected(format!("Store rejected the write: {}", err))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::ValidationError(violations) => {
                write!(f, "Validation failed: {} violations", violations.len())
            }
            ApiError::StoreRejected(msg) => write!(f, "Store rejected: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::ValidationError(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Request validation failed".to_string(),
                Some(violations),
            ),
            ApiError::StoreRejected(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "store_rejected", msg, None)
            }
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::NotFound("Card owner not found".to_string());
        assert_eq!(err.to_string(), "Not found: Card owner not found");
    }

    #[test]
    fn test_validation_error_display() {
        let violations = vec![
            FieldViolation {
                field: "name".to_string(),
                rule: "required".to_string(),
                message: "name is required".to_string(),
            },
            FieldViolation {
                field: "boardId".to_string(),
                rule: "identifier".to_string(),
                message: "boardId must be a valid identifier".to_string(),
            },
        ];

        let err = ApiError::ValidationError(violations);
        assert_eq!(err.to_string(), "Validation failed: 2 violations");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            error: "bad_request".to_string(),
            message: "Store error".to_string(),
            details: None,
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_error_response_carries_violations() {
        let body = ErrorResponse {
            error: "validation_error".to_string(),
            message: "Request validation failed".to_string(),
            details: Some(vec![FieldViolation {
                field: "title".to_string(),
                rule: "length".to_string(),
                message: "title must be a string between 5 and 50 characters".to_string(),
            }]),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"field\":\"title\""));
        assert!(json.contains("\"rule\":\"length\""));
    }
}
