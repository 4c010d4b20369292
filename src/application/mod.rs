//! Application layer services implementing the two request flows.
//!
//! Services consume the [`crate::domain::repositories::MappingStore`] trait and
//! a [`crate::domain::clock::Clock`], and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_creator::LinkCreator`] - Validates and stores new mappings
//! - [`services::link_resolver::LinkResolver`] - Looks up and refreshes mappings

pub mod services;
