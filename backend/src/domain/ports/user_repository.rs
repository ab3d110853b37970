//! Driven port for user account persistence.

use async_trait::async_trait;

use crate::domain::{Email, ProfileUpdate, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A query or mutation failed.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses the email address.
        DuplicateEmail { email: String } => "an account for {email} already exists",
    }
}

/// Storage for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `DuplicateEmail` when the email is taken.
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by normalised email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;

    /// Write only the supplied profile fields in a single step, returning the
    /// updated user or `None` when no such user exists.
    ///
    /// Untouched fields keep whatever the store currently holds, so
    /// concurrent updates to different fields both survive.
    async fn apply_profile_update(
        &self,
        id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserRepositoryError>;
}
