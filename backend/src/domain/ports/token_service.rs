//! Port for issuing and verifying bearer tokens.

use chrono::{DateTime, Utc};

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Bearer token failures.
    pub enum TokenError {
        /// Signing a new token failed.
        Issue { message: String } => "failed to issue token: {message}",
        /// The token is malformed, tampered with, or expired.
        Invalid { message: String } => "invalid token: {message}",
    }
}

/// A freshly signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Shared authentication capability used by every protected endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign a token carrying `user_id`.
    fn issue(&self, user_id: &UserId) -> Result<IssuedToken, TokenError>;

    /// Verify a token and extract the user id it carries.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
