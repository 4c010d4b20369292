//! Handler for link creation.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use crate::api::dto::create::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_context::RequestContext;

/// CORS headers sent on create responses and preflights.
const CORS_HEADERS: [(HeaderName, HeaderValue); 3] = [
    (
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    ),
    (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST"),
    ),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    ),
];

/// Creates (or overwrites) a short link.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "suffix": "abc12" }
/// ```
///
/// `suffix` is optional. The body is parsed as JSON regardless of the
/// `Content-Type` header.
///
/// # Response
///
/// ```json
/// { "short_url": "https://links.example.com/abc12", "expiry": 1700000600 }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "Invalid URL"}` if `url` has no scheme or host
/// - 500 if the body is not JSON or lacks `url`
/// - 500 if the store write fails
pub async fn create_handler(
    State(state): State<AppState>,
    context: RequestContext,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateLinkRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(format!("Invalid request body: {}", e)))?;

    let created = state
        .creator
        .create(payload.url, payload.suffix, &context)
        .await?;

    Ok((
        StatusCode::OK,
        CORS_HEADERS,
        Json(CreateLinkResponse {
            short_url: created.short_url,
            expiry: created.expiry,
        }),
    ))
}

/// Answers CORS preflight requests for `POST /`.
///
/// # Endpoint
///
/// `OPTIONS /`
pub async fn preflight_handler() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, CORS_HEADERS)
}
