//! Hashing helpers for session tokens.

use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes a raw session token for lookup in the sessions table.
///
/// Raw tokens are never stored; surrounding whitespace from the cookie
/// header is ignored. Returns `None` for empty tokens.
pub fn session_token_hash(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(sha256_hex(token))
}
