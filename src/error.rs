//! Application error types and their HTTP representation.
//!
//! Every failure that reaches a handler is an [`AppError`]. It renders as a
//! uniform JSON envelope:
//!
//! ```json
//! { "error": { "code": "invalid_or_unreachable", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{QueryRejection, StringRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::reachability::ReachabilityError;
use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The URL is invalid or did not answer with `200 OK`.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The request body or query string is missing or unusable.
    #[error("{message}")]
    BadRequest { message: String, details: Value },

    /// The mapping file could not be read, parsed or written.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "invalid_or_unreachable"),
            AppError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "malformed_request"),
            AppError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::BadRequest { message, details }
            | AppError::Storage { message, details } => (message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ReachabilityError> for AppError {
    fn from(e: ReachabilityError) -> Self {
        AppError::validation(
            "url is either invalid or not reachable",
            json!({ "url": e.url(), "reason": e.to_string() }),
        )
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!("Mapping store failure: {}", e);
        AppError::storage("Mapping storage is unavailable", json!({ "reason": e.to_string() }))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Query string could not be parsed",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<StringRejection> for AppError {
    fn from(rejection: StringRejection) -> Self {
        AppError::bad_request(
            "Request body must be UTF-8 text",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
