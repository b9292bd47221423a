//! Application error type and HTTP response mapping.
//!
//! The external contract is deliberately terse: callers get a generic status
//! line (`Bad request` / `Not found`) while the underlying cause stays in the
//! logs. A broken submission is always the caller's problem to correct and
//! resubmit; nothing here is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::infrastructure::store::StoreError;

/// Errors surfaced by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed JSON, a non-URL string, or any other invalid input.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The requested resource or method does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The key-value store rejected or failed an operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(_) | AppError::Store(_) => {
                (StatusCode::BAD_REQUEST, "Bad request")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
        };

        tracing::warn!(error = %self, status = %status, "request failed");

        (status, body).into_response()
    }
}
