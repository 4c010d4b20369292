//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Destination URL, checked by the creator before anything is stored.
    pub url: String,

    /// Optional custom suffix. Absent or empty means "generate one".
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Successful create response.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_url: String,
    /// Unix seconds after which the link stops resolving unless used.
    pub expiry: i64,
}
