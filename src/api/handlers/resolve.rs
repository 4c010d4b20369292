//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a suffix to its long URL and extends the link's life.
///
/// # Endpoint
///
/// `GET /{shortUrl}`
///
/// # Response
///
/// `301 Moved Permanently` with `Location` set to the stored URL and
/// `Cache-Control: no-cache`, so browsers come back to this service on the
/// next visit instead of replaying a redirect that may have expired.
///
/// # Errors
///
/// - 404 `{"error": "URL not found"}` if the suffix is unknown
/// - 404 `{"error": "URL has expired"}` if the mapping's expiry has passed
/// - 500 on store failures
pub async fn resolve_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    info!(suffix = %short_url, "Requested short URL");

    let mapping = state.resolver.resolve(&short_url).await?;

    let location = HeaderValue::from_str(&mapping.long_url).map_err(|e| {
        AppError::internal(format!("Stored URL is not a valid Location header: {}", e))
    })?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [
            (header::LOCATION, location),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
        ],
    )
        .into_response())
}
