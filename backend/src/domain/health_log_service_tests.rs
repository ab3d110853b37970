//! Tests for the health log service.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::rstest;

use super::*;
use crate::domain::fixture_clock::FixtureClock;
use crate::domain::ports::{MockHealthLogRepository, MockUserRepository};
use crate::domain::{Email, ErrorCode, HealthMetrics, HealthProfile, User};

type Service = HealthLogService<MockHealthLogRepository, MockUserRepository>;

fn make_service(logs: MockHealthLogRepository, users: MockUserRepository) -> Service {
    HealthLogService::new(
        Arc::new(logs),
        Arc::new(users),
        Arc::new(FixtureClock::at(2026, 4, 12)),
    )
}

fn new_log(user_id: UserId) -> NewHealthLog {
    NewHealthLog {
        user_id,
        date: NaiveDate::from_ymd_opt(2026, 4, 12).expect("valid date"),
        metrics: HealthMetrics::try_new(64.0, 2.5, 1900.0, 7.5).expect("valid metrics"),
    }
}

fn user_with_weight(id: UserId, weight: Option<f64>) -> User {
    User {
        id,
        name: "Meera".to_owned(),
        email: Email::new("meera@example.com").expect("valid email"),
        password_hash: "hash".to_owned(),
        age: 41,
        gender: "female".to_owned(),
        profile: HealthProfile {
            weight,
            ..HealthProfile::default()
        },
        created_at: FixtureClock::at(2026, 1, 1).utc_now,
    }
}

#[tokio::test]
async fn record_stamps_creation_time_and_persists() {
    let user_id = UserId::random();
    let mut logs = MockHealthLogRepository::new();
    logs.expect_insert()
        .withf(move |log| log.user_id == user_id)
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(logs, MockUserRepository::new());
    let log = service.record(new_log(user_id)).await.expect("recorded");

    assert_eq!(log.created_at, FixtureClock::at(2026, 4, 12).utc_now);
    assert!((log.metrics.sleep - 7.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn record_surfaces_store_failures_as_internal_errors() {
    let mut logs = MockHealthLogRepository::new();
    logs.expect_insert()
        .return_once(|_| Err(HealthLogRepositoryError::connection("pool exhausted")));

    let service = make_service(logs, MockUserRepository::new());
    let err = service
        .record(new_log(UserId::random()))
        .await
        .expect_err("store failure");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(err.message().contains("pool exhausted"));
}

#[tokio::test]
async fn recent_reads_at_most_thirty_entries() {
    let mut logs = MockHealthLogRepository::new();
    logs.expect_list_recent()
        .withf(|_, limit| *limit == HEALTH_LOG_READ_LIMIT)
        .times(1)
        .return_once(|_, _| Ok(Vec::new()));

    let service = make_service(logs, MockUserRepository::new());
    let entries = service.recent(&UserId::random()).await.expect("listed");
    assert!(entries.is_empty());
}

#[rstest]
#[case(Some(58.0), 58.0)]
#[case(None, 70.0)]
#[tokio::test]
async fn summary_without_logs_falls_back_to_profile_weight(
    #[case] profile_weight: Option<f64>,
    #[case] expected_weight: f64,
) {
    let user_id = UserId::random();
    let mut logs = MockHealthLogRepository::new();
    logs.expect_list_recent().return_once(|_, _| Ok(Vec::new()));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(move |id| Ok(Some(user_with_weight(*id, profile_weight))));

    let service = make_service(logs, users);
    let summary = service.summary(&user_id).await.expect("summary");

    assert!(summary.based_on_defaults);
    assert_eq!(summary.score, 86);
    assert!((summary.latest.weight - expected_weight).abs() < f64::EPSILON);
}

#[tokio::test]
async fn summary_with_logs_skips_profile_lookup() {
    let user_id = UserId::random();
    let stored = HealthLog::record(new_log(user_id), FixtureClock::at(2026, 4, 12).utc_now);
    let mut logs = MockHealthLogRepository::new();
    logs.expect_list_recent()
        .return_once(move |_, _| Ok(vec![stored]));
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().never();

    let service = make_service(logs, users);
    let summary = service.summary(&user_id).await.expect("summary");

    assert!(!summary.based_on_defaults);
    assert_eq!(summary.trend.len(), 1);
    // 2.5/3*30 + 7.5/8*30 + 40 = 93.125
    assert_eq!(summary.score, 93);
}
