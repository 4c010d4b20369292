//! Mapping entity representing a short suffix and its destination.

/// Lifetime of a mapping after creation or after its last successful resolve.
pub const LINK_TTL_SECONDS: i64 = 600;

/// Returns the expiry for a record written or refreshed at `now`.
pub fn expiry_from(now: i64) -> i64 {
    now + LINK_TTL_SECONDS
}

/// A stored association between a suffix and its long URL.
///
/// `expiry` is an absolute Unix timestamp in seconds. It is the canonical
/// representation on the wire and in every store backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub suffix: String,
    pub long_url: String,
    pub expiry: i64,
}

impl Mapping {
    /// Creates a mapping written at `now`, expiring [`LINK_TTL_SECONDS`] later.
    pub fn new(suffix: String, long_url: String, now: i64) -> Self {
        Self {
            suffix,
            long_url,
            expiry: expiry_from(now),
        }
    }

    /// Returns true once `now` is strictly past the expiry.
    ///
    /// A record whose expiry equals `now` still resolves.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiry < now
    }
}
