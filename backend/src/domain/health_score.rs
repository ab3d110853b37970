//! Wellness score and dashboard summary derived from recent logs.
//!
//! The score is `min(100, round(water/3*30 + sleep/8*30 + band))` where `band`
//! is 40 for calories strictly between 1500 and 2500 and 20 otherwise. Sub-terms
//! are not capped individually, so generous water or sleep figures can push the
//! raw total past 100 before the final clamp.

use super::{HealthLog, HealthMetrics};

const WATER_TARGET_LITRES: f64 = 3.0;
const SLEEP_TARGET_HOURS: f64 = 8.0;
const TERM_WEIGHT: f64 = 30.0;
const CALORIES_IN_BAND: f64 = 40.0;
const CALORIES_OUT_OF_BAND: f64 = 20.0;
const CALORIES_BAND_LOW: f64 = 1500.0;
const CALORIES_BAND_HIGH: f64 = 2500.0;

/// Number of entries shown in the dashboard trend.
pub const TREND_LENGTH: usize = 7;

/// Score metrics on a 0 to 100 scale.
///
/// # Examples
/// ```
/// use annapurna::domain::{health_score, HealthMetrics};
///
/// let ideal = HealthMetrics::try_new(70.0, 3.0, 2000.0, 8.0).unwrap();
/// assert_eq!(health_score(&ideal), 100);
///
/// let poor = HealthMetrics::try_new(70.0, 0.0, 3000.0, 0.0).unwrap();
/// assert_eq!(health_score(&poor), 20);
/// ```
#[must_use]
pub fn health_score(metrics: &HealthMetrics) -> u8 {
    let band = if metrics.calories > CALORIES_BAND_LOW && metrics.calories < CALORIES_BAND_HIGH {
        CALORIES_IN_BAND
    } else {
        CALORIES_OUT_OF_BAND
    };
    let raw = metrics.water_intake / WATER_TARGET_LITRES * TERM_WEIGHT
        + metrics.sleep / SLEEP_TARGET_HOURS * TERM_WEIGHT
        + band;
    // NaN saturates to 0 in the cast.
    raw.round().clamp(0.0, 100.0) as u8
}

/// One labelled point of the weight/calorie trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub weight: f64,
    pub calories: f64,
}

/// Dashboard view of a user's recent health.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSummary {
    pub score: u8,
    pub based_on_defaults: bool,
    pub latest: HealthMetrics,
    pub trend: Vec<TrendPoint>,
}

impl HealthSummary {
    /// Build the summary from logs ordered newest first.
    ///
    /// Without any log the score is computed from placeholder metrics that use
    /// the profile weight when one is stored.
    #[must_use]
    pub fn from_recent_logs(logs: &[HealthLog], profile_weight: Option<f64>) -> Self {
        let (latest, based_on_defaults) = match logs.first() {
            Some(log) => (log.metrics, false),
            None => (HealthMetrics::defaults(profile_weight), true),
        };
        let trend = logs
            .iter()
            .take(TREND_LENGTH)
            .rev()
            .enumerate()
            .map(|(index, log)| TrendPoint {
                label: format!("Day {}", index + 1),
                weight: log.metrics.weight,
                calories: log.metrics.calories,
            })
            .collect();

        Self {
            score: health_score(&latest),
            based_on_defaults,
            latest,
            trend,
        }
    }
}
