//! Driven port for health log persistence.

use async_trait::async_trait;

use crate::domain::{HealthLog, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by health log repository adapters.
    pub enum HealthLogRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "health log repository connection failed: {message}",
        /// A query or mutation failed.
        Query { message: String } => "health log repository query failed: {message}",
    }
}

/// Append-only storage of per-user health logs.
///
/// The store keeps the full history; reads are bounded by `limit`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthLogRepository: Send + Sync {
    /// Append one entry.
    async fn insert(&self, log: &HealthLog) -> Result<(), HealthLogRepositoryError>;

    /// Up to `limit` entries for `user_id`, ordered by
    /// [`HealthLog::newest_first`].
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<HealthLog>, HealthLogRepositoryError>;
}
