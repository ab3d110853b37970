//! Daily health log entries.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::UserId;

/// Maximum number of entries returned by a history read.
pub const HEALTH_LOG_READ_LIMIT: usize = 30;

/// Rejection reasons for recorded metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsValidationError {
    NotFinite { field: &'static str },
    Negative { field: &'static str },
}

impl fmt::Display for MetricsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::Negative { field } => write!(f, "{field} must not be negative"),
        }
    }
}

impl std::error::Error for MetricsValidationError {}

/// One day's metrics: body weight (kg), water intake (litres), calories
/// (kcal) and sleep (hours).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthMetrics {
    pub weight: f64,
    pub water_intake: f64,
    pub calories: f64,
    pub sleep: f64,
}

impl HealthMetrics {
    /// Weight assumed when neither a log nor a profile weight exists.
    pub const DEFAULT_WEIGHT: f64 = 70.0;

    /// Validate user-supplied metrics.
    pub fn try_new(
        weight: f64,
        water_intake: f64,
        calories: f64,
        sleep: f64,
    ) -> Result<Self, MetricsValidationError> {
        for (field, value) in [
            ("weight", weight),
            ("waterIntake", water_intake),
            ("calories", calories),
            ("sleep", sleep),
        ] {
            if !value.is_finite() {
                return Err(MetricsValidationError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(MetricsValidationError::Negative { field });
            }
        }
        Ok(Self {
            weight,
            water_intake,
            calories,
            sleep,
        })
    }

    /// Placeholder metrics shown before the first log is recorded.
    #[must_use]
    pub fn defaults(profile_weight: Option<f64>) -> Self {
        Self {
            weight: profile_weight.unwrap_or(Self::DEFAULT_WEIGHT),
            water_intake: 2.0,
            calories: 2000.0,
            sleep: 7.0,
        }
    }
}

/// Input for recording a new log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthLog {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub metrics: HealthMetrics,
}

/// Persisted log entry. Entries are never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthLog {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub metrics: HealthMetrics,
    pub created_at: DateTime<Utc>,
}

impl HealthLog {
    /// Materialise a new entry with a fresh id.
    #[must_use]
    pub fn record(new_log: NewHealthLog, created_at: DateTime<Utc>) -> Self {
        let NewHealthLog {
            user_id,
            date,
            metrics,
        } = new_log;
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            metrics,
            created_at,
        }
    }

    /// History ordering: latest `date` first, later insertions first on ties.
    #[must_use]
    pub fn newest_first(a: &Self, b: &Self) -> Ordering {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}
