//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, ServiceStatus, StoreProbe};
use crate::state::AppState;

/// Reports whether the mapping store answers.
///
/// # Endpoint
///
/// `GET /_/health`
///
/// The two-segment path keeps it out of the `/{shortUrl}` namespace.
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "backend": "redis", "message": "redis reachable" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = StoreProbe::new(state.store.backend(), state.store.health_check().await);

    let (code, status) = if probe.is_ok() {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        tracing::warn!(backend = probe.backend, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store: probe },
        }),
    )
}
