//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`           - Create a short link
//! - `OPTIONS /`        - CORS preflight
//! - `GET  /{shortUrl}` - Redirect (refreshes expiry)
//! - `GET  /_/health`   - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/_/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Wraps [`router`] so that `/abc12/` resolves like `/abc12`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
