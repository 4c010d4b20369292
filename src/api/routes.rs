//! Link route configuration.

use crate::api::handlers::{create_handler, preflight_handler, resolve_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create and resolve routes.
///
/// # Endpoints
///
/// - `POST    /`            - Create a short link
/// - `OPTIONS /`            - CORS preflight for create
/// - `GET     /{shortUrl}`  - Redirect to the long URL
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_handler).options(preflight_handler))
        .route("/{short_url}", get(resolve_handler))
}
