//! Store trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - [`MappingStore`] defines the get / put / update contract
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod mapping_store;

pub use mapping_store::{MappingStore, StoreError, StoreResult};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
