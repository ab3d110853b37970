//! PostgreSQL-backed `UserRepository`.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{ActivityLevel, Email, HealthProfile, ProfileUpdate, User, UserId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, ProfileChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let email = Email::new(&row.email)
        .map_err(|err| UserRepositoryError::query(format!("stored email for {}: {err}", row.id)))?;
    let age = u32::try_from(row.age)
        .map_err(|_| UserRepositoryError::query(format!("stored age for {} is negative", row.id)))?;
    let activity_level = row
        .activity_level
        .as_deref()
        .and_then(|raw| match ActivityLevel::from_str(raw) {
            Ok(level) => Some(level),
            Err(err) => {
                warn!(user_id = %row.id, value = raw, %err, "ignoring unrecognised activity level");
                None
            }
        });

    Ok(User {
        id: UserId::from_uuid(row.id),
        name: row.name,
        email,
        password_hash: row.password_hash,
        age,
        gender: row.gender,
        profile: HealthProfile {
            height: row.height,
            weight: row.weight,
            activity_level,
            diseases: row.diseases,
        },
        created_at: row.created_at,
    })
}

fn profile_changeset(update: &ProfileUpdate) -> ProfileChangeset<'_> {
    ProfileChangeset {
        height: update.height,
        weight: update.weight,
        activity_level: update.activity_level.map(ActivityLevel::as_str),
        diseases: update.diseases.as_deref(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let age = i32::try_from(user.age)
            .map_err(|_| UserRepositoryError::query(format!("age {} out of range", user.age)))?;
        let row = NewUserRow {
            id: *user.id.as_uuid(),
            name: &user.name,
            email: user.email.as_ref(),
            password_hash: &user.password_hash,
            age,
            gender: &user.gender,
            height: user.profile.height,
            weight: user.profile.weight,
            activity_level: user.profile.activity_level.map(ActivityLevel::as_str),
            diseases: &user.profile.diseases,
            created_at: user.created_at,
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_unique_violation(&err) {
                    UserRepositoryError::duplicate_email(user.email.as_ref())
                } else {
                    map_diesel_error(err)
                }
            })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn apply_profile_update(
        &self,
        id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserRepositoryError> {
        // Diesel rejects an UPDATE with an empty SET clause.
        if update.is_empty() {
            return self.find_by_id(id).await;
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = profile_changeset(update);

        diesel::update(users::table.filter(users::id.eq(id.as_uuid())))
            .set(&changes)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }
}
