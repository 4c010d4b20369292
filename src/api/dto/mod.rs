//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field checks
//! live in the services, not here.

pub mod create;
pub mod health;
