//! Health log handlers.
//!
//! ```text
//! POST /api/health/log {"date":"2026-04-12","weight":64,"waterIntake":2.5,"calories":1900,"sleep":7.5}
//! GET /api/health/log
//! GET /api/health/summary
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, HealthLog, HealthMetrics, HealthSummary, NewHealthLog, TrendPoint, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for `POST /api/health/log`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthLogBody {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(example = "2026-04-12")]
    pub date: String,
    /// Body weight in kilograms.
    pub weight: f64,
    /// Water intake in litres.
    pub water_intake: f64,
    /// Calories consumed.
    pub calories: f64,
    /// Hours slept.
    pub sleep: f64,
}

/// One stored day of metrics.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthLogResponse {
    pub id: String,
    pub user_id: String,
    #[schema(example = "2026-04-12")]
    pub date: String,
    pub weight: f64,
    pub water_intake: f64,
    pub calories: f64,
    pub sleep: f64,
    pub created_at: String,
}

impl From<HealthLog> for HealthLogResponse {
    fn from(log: HealthLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            date: log.date.format(DATE_FORMAT).to_string(),
            weight: log.metrics.weight,
            water_intake: log.metrics.water_intake,
            calories: log.metrics.calories,
            sleep: log.metrics.sleep,
            created_at: log.created_at.to_rfc3339(),
        }
    }
}

/// Response for `POST /api/health/log`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateHealthLogResponse {
    pub message: String,
    pub log: HealthLogResponse,
}

/// Response for `GET /api/health/log`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthLogsResponse {
    pub logs: Vec<HealthLogResponse>,
}

/// Metrics used for the score.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub weight: f64,
    pub water_intake: f64,
    pub calories: f64,
    pub sleep: f64,
}

impl From<HealthMetrics> for MetricsResponse {
    fn from(metrics: HealthMetrics) -> Self {
        Self {
            weight: metrics.weight,
            water_intake: metrics.water_intake,
            calories: metrics.calories,
            sleep: metrics.sleep,
        }
    }
}

/// One point of the weight and calorie chart.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrendPointResponse {
    #[schema(example = "Day 1")]
    pub day: String,
    pub weight: f64,
    pub calories: f64,
}

impl From<TrendPoint> for TrendPointResponse {
    fn from(point: TrendPoint) -> Self {
        Self {
            day: point.label,
            weight: point.weight,
            calories: point.calories,
        }
    }
}

/// Response for `GET /api/health/summary`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummaryResponse {
    /// Wellness score between 0 and 100.
    pub score: u8,
    /// True when no log exists and placeholder metrics were scored.
    pub based_on_defaults: bool,
    pub latest: MetricsResponse,
    pub trend: Vec<TrendPointResponse>,
}

impl From<HealthSummary> for HealthSummaryResponse {
    fn from(summary: HealthSummary) -> Self {
        Self {
            score: summary.score,
            based_on_defaults: summary.based_on_defaults,
            latest: summary.latest.into(),
            trend: summary.trend.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_log_date(raw: &str) -> Result<NaiveDate, Error> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|stamp| stamp.date_naive()))
        .map_err(|_| Error::internal(format!("invalid date '{raw}'")))
}

fn parse_new_log(user_id: UserId, body: HealthLogBody) -> Result<NewHealthLog, Error> {
    let date = parse_log_date(&body.date)?;
    let metrics = HealthMetrics::try_new(body.weight, body.water_intake, body.calories, body.sleep)
        .map_err(|err| Error::internal(err.to_string()))?;
    Ok(NewHealthLog {
        user_id,
        date,
        metrics,
    })
}

/// Record a day's metrics for the caller.
#[utoipa::path(
    post,
    path = "/api/health/log",
    request_body = HealthLogBody,
    responses(
        (status = 200, description = "Log recorded", body = CreateHealthLogResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["health-logs"],
    operation_id = "createHealthLog"
)]
#[post("/health/log")]
pub async fn create_log(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    payload: web::Json<HealthLogBody>,
) -> ApiResult<web::Json<CreateHealthLogResponse>> {
    let new_log = parse_new_log(*caller.id(), payload.into_inner())?;
    let log = state.health_logs.record(new_log).await?;
    Ok(web::Json(CreateHealthLogResponse {
        message: "Health log created successfully".to_owned(),
        log: log.into(),
    }))
}

/// The caller's 30 most recent logs, newest first.
#[utoipa::path(
    get,
    path = "/api/health/log",
    responses(
        (status = 200, description = "Recent logs", body = HealthLogsResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["health-logs"],
    operation_id = "listHealthLogs"
)]
#[get("/health/log")]
pub async fn list_logs(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let logs = state.health_logs_query.recent(caller.id()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(HealthLogsResponse {
            logs: logs.into_iter().map(Into::into).collect(),
        }))
}

/// Wellness score, latest metrics and the seven-entry trend.
#[utoipa::path(
    get,
    path = "/api/health/summary",
    responses(
        (status = 200, description = "Dashboard summary", body = HealthSummaryResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["health-logs"],
    operation_id = "getHealthSummary"
)]
#[get("/health/summary")]
pub async fn health_summary(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let summary = state.health_logs_query.summary(caller.id()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(HealthSummaryResponse::from(summary)))
}

#[cfg(test)]
#[path = "health_logs_tests.rs"]
mod tests;
