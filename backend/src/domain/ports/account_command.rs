//! Driving port for account registration and login.

use async_trait::async_trait;

use crate::domain::{Email, Error, SignupRequest, User};

use super::IssuedToken;

/// A signed-in user together with their bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub token: IssuedToken,
}

/// Plain-text login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: Email,
    pub password: String,
}

/// Use-case port for account lifecycle operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new account and sign it in.
    async fn signup(&self, request: SignupRequest) -> Result<AuthSession, Error>;

    /// Exchange credentials for a token.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthSession, Error>;
}
