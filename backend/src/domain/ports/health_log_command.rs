//! Driving port for recording health logs.

use async_trait::async_trait;

use crate::domain::{Error, HealthLog, NewHealthLog};

/// Use-case port for appending a day's metrics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthLogCommand: Send + Sync {
    /// Record a new entry for the user named in `new_log`.
    async fn record(&self, new_log: NewHealthLog) -> Result<HealthLog, Error>;
}
