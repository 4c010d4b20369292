//! Short link creation service.

use std::sync::Arc;

use tracing::info;

use crate::domain::clock::Clock;
use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::request_context::RequestContext;
use crate::utils::suffix_generator::generate_suffix;
use crate::utils::url_validator::is_valid_url;

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub suffix: String,
    pub short_url: String,
    pub expiry: i64,
}

/// Service for validating and storing new mappings.
pub struct LinkCreator {
    store: Arc<dyn MappingStore>,
    clock: Arc<dyn Clock>,
}

impl LinkCreator {
    pub fn new(store: Arc<dyn MappingStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Creates (or overwrites) the mapping for `suffix`.
    ///
    /// # Suffix
    ///
    /// - A non-empty `suffix` is used verbatim
    /// - `None` or an empty string gets a random 5-character suffix
    ///
    /// An existing record with the same suffix is replaced without notice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] ("Invalid URL") if `long_url` lacks a
    /// scheme or host or contains control characters; nothing is written in
    /// that case.
    /// Returns [`AppError::Internal`] if the store write fails.
    pub async fn create(
        &self,
        long_url: String,
        suffix: Option<String>,
        context: &RequestContext,
    ) -> Result<CreatedLink, AppError> {
        if !is_valid_url(&long_url) {
            return Err(AppError::invalid_url());
        }

        let suffix = suffix
            .filter(|s| !s.is_empty())
            .unwrap_or_else(generate_suffix);

        let mapping = Mapping::new(suffix, long_url, self.clock.now());
        let expiry = mapping.expiry;
        let suffix = mapping.suffix.clone();

        self.store.put(mapping).await?;

        info!(suffix = %suffix, expiry, "Short link stored");

        Ok(CreatedLink {
            short_url: context.short_url(&suffix),
            suffix,
            expiry,
        })
    }
}
