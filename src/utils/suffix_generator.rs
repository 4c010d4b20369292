//! Random suffix generation.
//!
//! Suffixes are 5 characters drawn uniformly from `A-Z a-z 0-9`, roughly
//! 30 bits of entropy. Collisions are not checked; a colliding create simply
//! overwrites the older record, which is tolerable only because records
//! expire after ten minutes of disuse.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated suffix.
pub const SUFFIX_LENGTH: usize = 5;

/// Generates a random alphanumeric suffix of [`SUFFIX_LENGTH`] characters.
///
/// Uses the thread-local RNG; not intended to be unguessable.
pub fn generate_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LENGTH)
        .map(char::from)
        .collect()
}
