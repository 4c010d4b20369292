//! Business logic services for the application layer.

pub mod link_creator;
pub mod link_resolver;

pub use link_creator::{CreatedLink, LinkCreator};
pub use link_resolver::LinkResolver;
