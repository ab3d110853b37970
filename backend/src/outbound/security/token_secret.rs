//! Key material for signing bearer tokens.

use std::fmt;

use zeroize::Zeroizing;

/// HMAC signing secret. The bytes are wiped when the value is dropped.
#[derive(Clone)]
pub struct TokenSecret(Zeroizing<Vec<u8>>);

impl TokenSecret {
    /// Wrap raw secret bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use annapurna::outbound::security::TokenSecret;
    ///
    /// let secret = TokenSecret::new(b"correct horse".to_vec());
    /// assert_eq!(secret.expose(), b"correct horse");
    /// ```
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Borrow the secret bytes for key construction.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(..)")
    }
}
