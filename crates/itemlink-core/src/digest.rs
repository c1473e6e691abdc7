//! SHA-512 digests of item text, e.g. for deduplication hashes.
//!
//! Off the resolution path; computed on demand.

use sha2::{Digest, Sha512};

/// Compute SHA-512 of a string and return the digest as lowercase hex.
pub fn sha512_hex(text: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
