//! HTTP error responses.
//!
//! Every error surfaced to a client is a structured JSON body
//! `{code, message}` with the matching status code. Store and crypto
//! failures are logged and collapsed to an opaque 500 — they are
//! never retried and never leak internals.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rosterd_core::error::RosterdError;
use serde_json::json;
use tracing::error;

/// A client-facing API error.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, code, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "code": self.code,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}

impl From<RosterdError> for ApiError {
    fn from(err: RosterdError) -> Self {
        match err {
            RosterdError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            RosterdError::AlreadyExists { .. } => {
                Self::new(StatusCode::CONFLICT, "CONFLICT", err.to_string())
            }
            RosterdError::AuthenticationFailed { reason } => {
                Self::unauthorized("UNAUTHORIZED", reason)
            }
            RosterdError::AuthorizationDenied { reason } => Self::forbidden("FORBIDDEN", reason),
            RosterdError::Validation { message } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            RosterdError::Database(_) | RosterdError::Crypto(_) | RosterdError::Internal(_) => {
                error!(error = %err, "internal error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "internal server error",
                )
            }
        }
    }
}
