//! Driving port for reading the caller's profile.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for profile reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Fetch the user; `NotFound` when the id is unknown.
    async fn fetch_profile(&self, user_id: &UserId) -> Result<User, Error>;
}
