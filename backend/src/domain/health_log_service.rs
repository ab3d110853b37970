//! Health log use-cases: recording entries, reading history and summarising.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    HealthLogCommand, HealthLogQuery, HealthLogRepository, HealthLogRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Error, HEALTH_LOG_READ_LIMIT, HealthLog, HealthSummary, NewHealthLog, UserId,
};

/// Service implementing [`HealthLogCommand`] and [`HealthLogQuery`].
#[derive(Clone)]
pub struct HealthLogService<L, U> {
    logs: Arc<L>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<L, U> HealthLogService<L, U> {
    /// Create a service over the given repositories.
    pub fn new(logs: Arc<L>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { logs, users, clock }
    }
}

fn map_log_error(error: HealthLogRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn map_user_error(error: UserRepositoryError) -> Error {
    Error::internal(error.to_string())
}

#[async_trait]
impl<L, U> HealthLogCommand for HealthLogService<L, U>
where
    L: HealthLogRepository,
    U: UserRepository,
{
    async fn record(&self, new_log: NewHealthLog) -> Result<HealthLog, Error> {
        let log = HealthLog::record(new_log, self.clock.utc());
        self.logs.insert(&log).await.map_err(map_log_error)?;
        debug!(user_id = %log.user_id, log_id = %log.id, date = %log.date, "health log recorded");
        Ok(log)
    }
}

#[async_trait]
impl<L, U> HealthLogQuery for HealthLogService<L, U>
where
    L: HealthLogRepository,
    U: UserRepository,
{
    async fn recent(&self, user_id: &UserId) -> Result<Vec<HealthLog>, Error> {
        self.logs
            .list_recent(user_id, HEALTH_LOG_READ_LIMIT)
            .await
            .map_err(map_log_error)
    }

    async fn summary(&self, user_id: &UserId) -> Result<HealthSummary, Error> {
        let logs = self.recent(user_id).await?;
        let profile_weight = if logs.is_empty() {
            self.users
                .find_by_id(user_id)
                .await
                .map_err(map_user_error)?
                .and_then(|user| user.profile.weight)
        } else {
            None
        };
        Ok(HealthSummary::from_recent_logs(&logs, profile_weight))
    }
}

#[cfg(test)]
#[path = "health_log_service_tests.rs"]
mod tests;
