//! Driving port for updating the caller's health profile.

use async_trait::async_trait;

use crate::domain::{Error, ProfileUpdate, User, UserId};

/// Use-case port for profile updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileCommand: Send + Sync {
    /// Apply `update` and return the stored user; `NotFound` when the id is
    /// unknown.
    async fn update_profile(&self, user_id: &UserId, update: ProfileUpdate)
    -> Result<User, Error>;
}
