//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkCreator, LinkResolver};
use crate::domain::clock::Clock;
use crate::domain::repositories::MappingStore;
use crate::utils::request_context::ContextSettings;

/// Handles built once at startup and cloned into each request.
///
/// Holds no per-request mutable state; the store is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub creator: Arc<LinkCreator>,
    pub resolver: Arc<LinkResolver>,
    pub store: Arc<dyn MappingStore>,
    pub context: Arc<ContextSettings>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn MappingStore>,
        clock: Arc<dyn Clock>,
        context: ContextSettings,
    ) -> Self {
        Self {
            creator: Arc::new(LinkCreator::new(store.clone(), clock.clone())),
            resolver: Arc::new(LinkResolver::new(store.clone(), clock)),
            store,
            context: Arc::new(context),
        }
    }
}
