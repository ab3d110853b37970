//! Process-local append-only health log store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{HealthLogRepository, HealthLogRepositoryError};
use crate::domain::{HealthLog, UserId};

/// [`HealthLogRepository`] keeping every entry in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHealthLogRepository {
    logs: Arc<Mutex<Vec<HealthLog>>>,
}

impl InMemoryHealthLogRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HealthLogRepository for InMemoryHealthLogRepository {
    async fn insert(&self, log: &HealthLog) -> Result<(), HealthLogRepositoryError> {
        self.logs
            .lock()
            .map_err(|_| HealthLogRepositoryError::connection(POISONED))?
            .push(log.clone());
        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<HealthLog>, HealthLogRepositoryError> {
        let mut owned: Vec<HealthLog> = self
            .logs
            .lock()
            .map_err(|_| HealthLogRepositoryError::connection(POISONED))?
            .iter()
            .filter(|log| &log.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(HealthLog::newest_first);
        owned.truncate(limit);
        Ok(owned)
    }
}
