//! Profile use-cases: reading the caller's record and updating health
//! attributes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    UserProfileCommand, UserProfileQuery, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, ProfileUpdate, User, UserId};

const USER_NOT_FOUND: &str = "User not found";

fn map_repository_error(error: UserRepositoryError) -> Error {
    Error::internal(error.to_string())
}

/// Service implementing [`UserProfileQuery`] and [`UserProfileCommand`].
#[derive(Clone)]
pub struct UserProfileService<U> {
    users: Arc<U>,
}

impl<U> UserProfileService<U> {
    /// Create a service over the user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UserProfileQuery for UserProfileService<U>
where
    U: UserRepository,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<U> UserProfileCommand for UserProfileService<U>
where
    U: UserRepository,
{
    async fn update_profile(
        &self,
        user_id: &UserId,
        update: ProfileUpdate,
    ) -> Result<User, Error> {
        let user = self
            .users
            .apply_profile_update(user_id, &update)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        debug!(%user_id, "profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the profile service.

    use super::*;
    use crate::domain::fixture_clock::FixtureClock;
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{ActivityLevel, Email, ErrorCode, HealthProfile};

    fn stored_user(id: UserId) -> User {
        User {
            id,
            name: "Arjun".to_owned(),
            email: Email::new("arjun@example.com").expect("valid email"),
            password_hash: "hash".to_owned(),
            age: 29,
            gender: "male".to_owned(),
            profile: HealthProfile {
                height: Some(176.0),
                weight: Some(74.0),
                activity_level: Some(ActivityLevel::Light),
                diseases: vec!["asthma".to_owned()],
            },
            created_at: FixtureClock::at(2026, 2, 3).utc_now,
        }
    }

    #[tokio::test]
    async fn fetch_returns_not_found_for_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = UserProfileService::new(Arc::new(repo));
        let err = service
            .fetch_profile(&UserId::random())
            .await
            .expect_err("missing user");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn fetch_maps_store_failures_to_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Err(UserRepositoryError::query("relation missing")));

        let service = UserProfileService::new(Arc::new(repo));
        let err = service
            .fetch_profile(&UserId::random())
            .await
            .expect_err("store failure");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn update_forwards_only_supplied_fields_without_reading_first() {
        let user_id = UserId::random();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_apply_profile_update()
            .withf(|_, update| {
                update.height.is_none()
                    && update.weight == Some(71.5)
                    && update.activity_level == Some(ActivityLevel::Moderate)
                    && update.diseases == Some(Vec::new())
            })
            .times(1)
            .return_once(move |id, update| {
                let mut user = stored_user(*id);
                user.profile.apply(update.clone());
                Ok(Some(user))
            });

        let service = UserProfileService::new(Arc::new(repo));
        let update = ProfileUpdate {
            weight: Some(71.5),
            activity_level: Some(ActivityLevel::Moderate),
            diseases: Some(Vec::new()),
            ..ProfileUpdate::default()
        };
        let user = service
            .update_profile(&user_id, update)
            .await
            .expect("updated");

        assert_eq!(user.id, user_id);
        assert_eq!(user.profile.height, Some(176.0));
        assert_eq!(user.profile.weight, Some(71.5));
        assert!(user.profile.diseases.is_empty());
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_apply_profile_update()
            .return_once(|_, _| Ok(None));

        let service = UserProfileService::new(Arc::new(repo));
        let err = service
            .update_profile(&UserId::random(), ProfileUpdate::default())
            .await
            .expect_err("missing user");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND);
    }
}
