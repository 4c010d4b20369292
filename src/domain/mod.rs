//! Domain layer containing the mapping record, the store contract and time.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::Mapping`] record and its expiry rules
//! - [`repositories`] - The [`repositories::MappingStore`] trait implemented by
//!   the infrastructure layer
//! - [`clock`] - Time source used for expiry calculations
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store backends are injected behind the [`repositories::MappingStore`] trait
//! - Handlers never read the system time directly; they go through [`clock::Clock`]

pub mod clock;
pub mod entities;
pub mod repositories;
