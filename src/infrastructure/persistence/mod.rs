//! Mapping store implementations.
//!
//! # Stores
//!
//! - [`InMemoryStore`] - Process-local, lost on restart
//! - [`RedisStore`] - Hash per suffix, evicted by Redis once expired
//! - [`PgMappingStore`] - Row per suffix in the configured table

pub mod memory_store;
pub mod pg_store;
pub mod redis_store;

pub use memory_store::InMemoryStore;
pub use pg_store::PgMappingStore;
pub use redis_store::RedisStore;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StoreBackend, mask_connection_string};
use crate::domain::repositories::MappingStore;

/// Connects the store selected by `config.store_backend`.
///
/// For PostgreSQL the mapping table is created if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or its connection string
/// is missing.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; mappings are lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set for the redis backend")?;

            let store = RedisStore::connect(url, &config.mapping_table)
                .await
                .with_context(|| format!("Failed to connect to {}", mask_connection_string(url)))?;

            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .with_context(|| format!("Failed to connect to {}", mask_connection_string(url)))?;
            tracing::info!("Connected to database");

            let store = PgMappingStore::new(Arc::new(pool), &config.mapping_table)?;
            store.ensure_table().await?;

            Ok(Arc::new(store))
        }
    }
}
