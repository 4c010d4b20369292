//! HTTP server initialization and runtime setup.
//!
//! Connects the mapping store, builds the shared state and runs the Axum server.

use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::connect_store;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::request_context::ContextSettings;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The mapping store selected by `STORE_BACKEND`
/// - Creator and resolver services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    tracing::info!("Mapping store ready ({})", store.backend());

    let state = AppState::new(
        store,
        Arc::new(SystemClock),
        ContextSettings::from(&config),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
