//! Row types for the persistence adapters. Never exposed to the domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{health_logs, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub gender: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub diseases: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub age: i32,
    pub gender: &'a str,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<&'a str>,
    pub diseases: &'a [String],
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields are left out of the `SET` clause.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<&'a str>,
    pub diseases: Option<&'a [String]>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = health_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HealthLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub water_intake: f64,
    pub calories: f64,
    pub sleep: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = health_logs)]
pub(crate) struct NewHealthLogRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub water_intake: f64,
    pub calories: f64,
    pub sleep: f64,
    pub created_at: DateTime<Utc>,
}
