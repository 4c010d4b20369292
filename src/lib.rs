//! # Expiring Shortener
//!
//! A URL shortening service whose links live for ten minutes after their last
//! use, built with Axum on top of a pluggable key-value mapping store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping record, the store trait and the clock
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory, Redis and PostgreSQL stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Behaviour
//!
//! - `POST /` stores `{suffix, long_url, expiry}` with `expiry = now + 600`
//!   and answers with the short URL
//! - `GET /{suffix}` answers `301` to the stored URL and pushes the expiry
//!   another 600 seconds forward
//! - Records past their expiry resolve as `404 URL has expired`
//!
//! ## Quick Start
//!
//! ```bash
//! export MAPPING_TABLE="short_links"
//! export STORE_BACKEND="redis"
//! export REDIS_URL="redis://localhost:6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CreatedLink, LinkCreator, LinkResolver};
    pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
    pub use crate::domain::entities::{LINK_TTL_SECONDS, Mapping};
    pub use crate::domain::repositories::{MappingStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryStore;
    pub use crate::state::AppState;
    pub use crate::utils::request_context::{ContextSettings, RequestContext};
}
