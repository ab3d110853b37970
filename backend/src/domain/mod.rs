//! Domain primitives, pure wellness logic and the services behind the ports.
//!
//! Purpose: keep the rules of the application (validation, scoring, chat
//! matching, remedy lookup) free of transport and storage concerns. Inbound
//! adapters call the driving ports in [`ports`]; outbound adapters implement
//! the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, HealthProfile, ProfileUpdate, SignupRequest: account records.
//! - HealthLog, HealthMetrics, HealthSummary: the daily time series and the
//!   derived score.
//! - ChatResponder, RemedyCatalog: static, stateless lookups.

pub mod chatbot;
pub mod error;
pub mod health_log;
pub mod health_score;
pub mod ports;
pub mod remedies;
pub mod trace_id;
pub mod user;

mod account_service;
mod health_log_service;
mod user_profile_service;

#[cfg(test)]
pub(crate) mod fixture_clock;

pub use self::account_service::AccountService;
pub use self::chatbot::{
    ChatResponder, ChatRule, FALLBACK_REPLY, GREETING, SUGGESTED_PROMPTS, WELLNESS_RULES,
};
pub use self::error::{EmptyErrorMessage, Error, ErrorCode};
pub use self::health_log::{
    HEALTH_LOG_READ_LIMIT, HealthLog, HealthMetrics, MetricsValidationError, NewHealthLog,
};
pub use self::health_log_service::HealthLogService;
pub use self::health_score::{HealthSummary, TREND_LENGTH, TrendPoint, health_score};
pub use self::remedies::{ConditionRemedies, Remedy, RemedyCatalog};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    ActivityLevel, Email, HealthProfile, PASSWORD_MIN_LEN, ProfileUpdate, SignupRequest, User,
    UserId, UserValidationError,
};
pub use self::user_profile_service::UserProfileService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use annapurna::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Unauthorized"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
