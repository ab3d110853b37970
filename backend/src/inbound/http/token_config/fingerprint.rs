//! Short fingerprint of the token signing secret.
//!
//! Logged at startup so operators can tell which secret a deployment uses
//! without exposing it.

use sha2::{Digest, Sha256};

use crate::outbound::security::TokenSecret;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of the secret's SHA-256 digest, as lowercase hex.
///
/// # Examples
///
/// ```rust
/// use annapurna::outbound::security::TokenSecret;
/// use annapurna::inbound::http::token_config::fingerprint::secret_fingerprint;
///
/// let fp = secret_fingerprint(&TokenSecret::new(b"correct horse".to_vec()));
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn secret_fingerprint(secret: &TokenSecret) -> String {
    let digest = Sha256::digest(secret.expose());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
