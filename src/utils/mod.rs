//! Utility functions for suffix generation, URL validation and request context.
//!
//! - [`suffix_generator`] - Random short suffix generation
//! - [`url_validator`] - Long URL validation
//! - [`request_context`] - Per-request base URL derivation

pub mod request_context;
pub mod suffix_generator;
pub mod url_validator;
