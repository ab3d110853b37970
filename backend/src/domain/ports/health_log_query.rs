//! Driving port for reading health logs and the derived summary.

use async_trait::async_trait;

use crate::domain::{Error, HealthLog, HealthSummary, UserId};

/// Use-case port for health history reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthLogQuery: Send + Sync {
    /// The most recent entries, newest first, capped at
    /// [`crate::domain::HEALTH_LOG_READ_LIMIT`].
    async fn recent(&self, user_id: &UserId) -> Result<Vec<HealthLog>, Error>;

    /// Score, latest metrics and trend for the dashboard.
    async fn summary(&self, user_id: &UserId) -> Result<HealthSummary, Error>;
}
