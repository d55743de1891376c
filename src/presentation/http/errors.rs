//! HTTP error handling and response conversion.
//!
//! Handler errors are mapped to an HTTP status code and a JSON body of the
//! shape `{ "error": message }`. Note that an *invalid* CPF is not an error:
//! the validator's verdict is part of the normal response. The error space
//! here covers caller-level conditions (no candidate supplied at all) and
//! internal failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors returned from handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request is malformed at the protocol level (400), e.g. no CPF
    /// candidate was supplied in either the query string or the body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unclassified internal error (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(anyhow_error = %err, "Unclassified error with chain");
        err.chain().for_each(|cause| {
            tracing::error!(cause = %cause, "Error source");
        });
        AppError::Internal("Operation failed".into())
    }
}
