//! Core domain entities.
//!
//! The service has a single entity: the [`Mapping`] between a suffix and its
//! destination URL, together with the moment it stops resolving.

pub mod mapping;

pub use mapping::{LINK_TTL_SECONDS, Mapping, expiry_from};
