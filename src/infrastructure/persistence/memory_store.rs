//! In-memory mapping store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::Mapping;
use crate::domain::repositories::{MappingStore, StoreResult};

/// Process-local store backed by a [`DashMap`].
///
/// Expired records stay in the map until overwritten; the resolver treats
/// them as absent. Used for local development and as the test double in
/// handler tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<String, Mapping>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, expired ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn get(&self, suffix: &str) -> StoreResult<Option<Mapping>> {
        Ok(self.records.get(suffix).map(|r| r.value().clone()))
    }

    async fn put(&self, mapping: Mapping) -> StoreResult<()> {
        self.records.insert(mapping.suffix.clone(), mapping);
        Ok(())
    }

    async fn update_expiry(&self, suffix: &str, expiry: i64) -> StoreResult<()> {
        // A missing record stays missing; there is no long_url to pair the expiry with.
        if let Some(mut record) = self.records.get_mut(suffix) {
            record.expiry = expiry;
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
