//! Infrastructure layer for external integrations.
//!
//! This layer implements [`crate::domain::repositories::MappingStore`] for
//! each supported backend.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory, Redis and PostgreSQL stores and the factory
//!   that picks one from [`crate::config::Config`]

pub mod persistence;
