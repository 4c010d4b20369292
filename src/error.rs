//! Application error type and its HTTP representation.
//!
//! Every failure is converted exactly once, at the handler boundary, into a
//! JSON body of the form `{"error": "<message>"}`.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::StoreError;

/// JSON error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid URL or missing Host. Maps to `400`.
    #[error("{0}")]
    Validation(String),

    /// No record exists for the suffix. Maps to `404`.
    #[error("URL not found")]
    NotFound,

    /// The record exists but its expiry has passed. Maps to `404`.
    #[error("URL has expired")]
    Expired,

    /// Unparseable bodies, store faults and anything else unexpected. Maps to `500`.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The single validation failure clients see for a bad `url` field.
    pub fn invalid_url() -> Self {
        Self::Validation("Invalid URL".to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::Expired => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (
            status,
            [(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            )],
            Json(body),
        )
            .into_response()
    }
}
