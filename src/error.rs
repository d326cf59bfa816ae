//! Unified error types for the service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Request-level errors surfaced to HTTP clients.
///
/// Only two kinds exist: input rejection on user creation and lookup
/// failure for a user ID. Both render as the uniform JSON error body
/// `{"error": <kind>, "message": <human string>}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input for user creation failed the name/email rules. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Referenced user ID does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),
}

/// Wire shape of an error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error kind: "ValidationError" or "NotFound".
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Reject a user-creation payload.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Signal a missing user ID.
    pub fn user_not_found() -> Self {
        Self::NotFound("User not found".to_string())
    }

    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// The `error` kind string in the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::NotFound(_) => "NotFound",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Convenient Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::validation("Provide valid 'name' and 'email'.");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "ValidationError");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::user_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "NotFound");
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn error_body_serializes_with_fixed_keys() {
        let body = ErrorBody {
            error: "NotFound",
            message: "User not found".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "NotFound");
        assert_eq!(json["message"], "User not found");
    }
}
