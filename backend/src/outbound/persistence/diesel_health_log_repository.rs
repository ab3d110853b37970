//! PostgreSQL-backed `HealthLogRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HealthLogRepository, HealthLogRepositoryError};
use crate::domain::{HealthLog, HealthMetrics, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HealthLogRow, NewHealthLogRow};
use super::pool::{DbPool, PoolError};
use super::schema::health_logs;

/// Diesel implementation of [`HealthLogRepository`].
#[derive(Clone)]
pub struct DieselHealthLogRepository {
    pool: DbPool,
}

impl DieselHealthLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HealthLogRepositoryError {
    map_basic_pool_error(error, HealthLogRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HealthLogRepositoryError {
    map_basic_diesel_error(
        error,
        HealthLogRepositoryError::query,
        HealthLogRepositoryError::connection,
    )
}

// Rows are written through `HealthMetrics::try_new`, so stored values are
// already validated.
fn row_to_log(row: HealthLogRow) -> HealthLog {
    HealthLog {
        id: row.id,
        user_id: UserId::from_uuid(row.user_id),
        date: row.date,
        metrics: HealthMetrics {
            weight: row.weight,
            water_intake: row.water_intake,
            calories: row.calories,
            sleep: row.sleep,
        },
        created_at: row.created_at,
    }
}

#[async_trait]
impl HealthLogRepository for DieselHealthLogRepository {
    async fn insert(&self, log: &HealthLog) -> Result<(), HealthLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewHealthLogRow {
            id: log.id,
            user_id: *log.user_id.as_uuid(),
            date: log.date,
            weight: log.metrics.weight,
            water_intake: log.metrics.water_intake,
            calories: log.metrics.calories,
            sleep: log.metrics.sleep,
            created_at: log.created_at,
        };

        diesel::insert_into(health_logs::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<HealthLog>, HealthLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<HealthLogRow> = health_logs::table
            .filter(health_logs::user_id.eq(user_id.as_uuid()))
            .order((health_logs::date.desc(), health_logs::created_at.desc()))
            .limit(limit)
            .select(HealthLogRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_log).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    fn rows_keep_every_metric() {
        let row = HealthLogRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 2, 14).expect("date"),
            weight: 71.2,
            water_intake: 2.4,
            calories: 2150.0,
            sleep: 6.5,
            created_at: Utc::now(),
        };
        let log = row_to_log(row.clone());

        assert_eq!(log.id, row.id);
        assert_eq!(log.user_id.as_uuid(), &row.user_id);
        assert_eq!(log.metrics.water_intake, 2.4);
        assert_eq!(log.metrics.calories, 2150.0);
    }
}
