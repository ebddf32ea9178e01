//! PKCE verifier and challenge primitives.
//!
//! Implements the S256 challenge method from RFC 7636: the verifier is a
//! high-entropy random string, the challenge its base64url-encoded SHA-256
//! digest.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

/// Length of a generated code verifier, in characters.
pub const VERIFIER_LENGTH: usize = 64;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric string of exactly `length` characters.
///
/// Each character is one cryptographically random byte reduced modulo the
/// 62-symbol alphabet. 256 is not a multiple of 62, so low characters are
/// marginally over-represented; acceptable for a verifier, not for key
/// material.
pub fn random_string(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes).expect("Failed to generate random bytes");
    bytes
        .iter()
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect()
}

/// Compute the S256 code challenge for a verifier.
///
/// SHA-256 of the UTF-8 verifier, base64url-encoded without padding. Pure and
/// deterministic: the same verifier always yields the same challenge.
pub fn code_challenge(verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}
