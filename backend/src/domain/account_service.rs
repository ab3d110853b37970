//! Account use-cases: signup and credential login.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountCommand, AuthSession, LoginCredentials, PasswordHashError, PasswordHasher, TokenError,
    TokenService, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, HealthProfile, SignupRequest, User, UserId};

const USER_EXISTS: &str = "User already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::DuplicateEmail { .. } => Error::conflict(USER_EXISTS),
        other => Error::internal(other.to_string()),
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn map_token_error(error: TokenError) -> Error {
    Error::internal(error.to_string())
}

/// Service implementing [`AccountCommand`].
#[derive(Clone)]
pub struct AccountService<U> {
    users: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
}

impl<U> AccountService<U> {
    /// Create a service from its collaborators.
    pub fn new(
        users: Arc<U>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }

    fn open_session(&self, user: User) -> Result<AuthSession, Error> {
        let token = self.tokens.issue(&user.id).map_err(map_token_error)?;
        Ok(AuthSession { user, token })
    }
}

#[async_trait]
impl<U> AccountCommand for AccountService<U>
where
    U: UserRepository,
{
    async fn signup(&self, request: SignupRequest) -> Result<AuthSession, Error> {
        if self
            .users
            .find_by_email(request.email())
            .await
            .map_err(map_repository_error)?
            .is_some()
        {
            return Err(Error::conflict(USER_EXISTS));
        }

        let password_hash = self
            .hasher
            .hash(request.password())
            .map_err(map_hash_error)?;
        let user = User {
            id: UserId::random(),
            name: request.name().to_owned(),
            email: request.email().clone(),
            password_hash,
            age: request.age(),
            gender: request.gender().to_owned(),
            profile: HealthProfile::default(),
            created_at: self.clock.utc(),
        };
        self.users
            .create(&user)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id, "account created");
        self.open_session(user)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<AuthSession, Error> {
        let LoginCredentials { email, password } = credentials;
        let Some(user) = self
            .users
            .find_by_email(&email)
            .await
            .map_err(map_repository_error)?
        else {
            debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(&password, &user.password_hash)
            .map_err(map_hash_error)?;
        if !matches {
            debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        self.open_session(user)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
