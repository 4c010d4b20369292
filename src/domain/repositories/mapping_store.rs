//! Key-value store contract for mapping records.

use crate::domain::entities::Mapping;
use async_trait::async_trait;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),

    #[error("Malformed record for suffix '{suffix}': {reason}")]
    Malformed { suffix: String, reason: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value table of [`Mapping`] records keyed by suffix.
///
/// Every operation is a single atomic call against the backend. Nothing is
/// retried: an error is returned to the caller as-is.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryStore`] - process-local map
/// - [`crate::infrastructure::persistence::RedisStore`] - one hash per suffix
/// - [`crate::infrastructure::persistence::PgMappingStore`] - one row per suffix
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Point lookup by exact suffix.
    ///
    /// Returns the record even if its expiry has passed; expiry is enforced
    /// by the caller.
    async fn get(&self, suffix: &str) -> StoreResult<Option<Mapping>>;

    /// Writes the whole record, replacing any record with the same suffix.
    async fn put(&self, mapping: Mapping) -> StoreResult<()>;

    /// Updates the `expiry` field only, leaving `long_url` untouched.
    async fn update_expiry(&self, suffix: &str, expiry: i64) -> StoreResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health reports.
    fn backend(&self) -> &'static str;
}
