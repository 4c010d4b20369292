//! Short link resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::entities::{Mapping, expiry_from};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Service for looking up mappings and extending their lifetime.
pub struct LinkResolver {
    store: Arc<dyn MappingStore>,
    clock: Arc<dyn Clock>,
}

impl LinkResolver {
    pub fn new(store: Arc<dyn MappingStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Resolves `suffix` to its mapping and refreshes the expiry.
    ///
    /// # Flow
    ///
    /// 1. Exact-match lookup
    /// 2. Reject missing or expired records
    /// 3. Set `expiry = now + 600` through a single-field update
    ///
    /// The returned mapping carries the refreshed expiry.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record exists
    /// - [`AppError::Expired`] if the record's expiry is before now
    /// - [`AppError::Internal`] on store failures
    pub async fn resolve(&self, suffix: &str) -> Result<Mapping, AppError> {
        let mapping = self.store.get(suffix).await?.ok_or(AppError::NotFound)?;

        let now = self.clock.now();
        if mapping.is_expired_at(now) {
            debug!(suffix, expiry = mapping.expiry, now, "Mapping expired");
            return Err(AppError::Expired);
        }

        let expiry = expiry_from(now);
        self.store.update_expiry(suffix, expiry).await?;

        Ok(Mapping { expiry, ..mapping })
    }
}
