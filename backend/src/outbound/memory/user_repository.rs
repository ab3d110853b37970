//! Process-local user store keyed by id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Email, ProfileUpdate, User, UserId};

/// [`UserRepository`] holding users in a shared map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserRepositoryError> {
        self.users
            .lock()
            .map_err(|_| UserRepositoryError::connection(POISONED))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.lock()?;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserRepositoryError::duplicate_email(user.email.as_ref()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .lock()?
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn apply_profile_update(
        &self,
        id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.get_mut(id).map(|user| {
            user.profile.apply(update.clone());
            user.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::{ActivityLevel, HealthProfile};

    fn user(email: &str) -> User {
        User {
            id: UserId::random(),
            name: "Meera".to_owned(),
            email: Email::new(email).expect("valid email"),
            password_hash: "hash".to_owned(),
            age: 41,
            gender: "female".to_owned(),
            profile: HealthProfile::default(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn finds_users_by_id_and_email() {
        let repo = InMemoryUserRepository::new();
        let meera = user("meera@example.com");
        repo.create(&meera).await.expect("create");

        assert_eq!(repo.find_by_id(&meera.id).await.expect("by id"), Some(meera.clone()));
        let by_email = repo
            .find_by_email(&Email::new("MEERA@example.com").expect("email"))
            .await
            .expect("by email");
        assert_eq!(by_email.map(|found| found.id), Some(meera.id));
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_a_second_account_for_the_same_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("meera@example.com")).await.expect("first");

        let err = repo
            .create(&user("meera@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, UserRepositoryError::duplicate_email("meera@example.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn profile_update_changes_only_supplied_fields() {
        let repo = InMemoryUserRepository::new();
        let mut meera = user("meera@example.com");
        meera.profile.weight = Some(61.0);
        repo.create(&meera).await.expect("create");
        let update = ProfileUpdate {
            height: Some(158.0),
            activity_level: Some(ActivityLevel::Active),
            diseases: Some(vec!["arthritis".to_owned()]),
            ..ProfileUpdate::default()
        };

        let saved = repo
            .apply_profile_update(&meera.id, &update)
            .await
            .expect("update")
            .expect("known user");
        assert_eq!(saved.profile.height, Some(158.0));
        assert_eq!(saved.profile.weight, Some(61.0));
        assert_eq!(saved.profile.activity_level, Some(ActivityLevel::Active));
        assert_eq!(saved.profile.diseases, ["arthritis"]);
        assert_eq!(saved.name, meera.name);
    }

    #[rstest]
    #[tokio::test]
    async fn disjoint_updates_after_stale_reads_both_survive() {
        let repo = InMemoryUserRepository::new();
        let meera = user("meera@example.com");
        repo.create(&meera).await.expect("create");

        // Both writers observe the same starting profile.
        let first_view = repo.find_by_id(&meera.id).await.expect("read");
        let second_view = repo.find_by_id(&meera.id).await.expect("read");
        assert_eq!(first_view, second_view);

        let height = ProfileUpdate {
            height: Some(170.0),
            ..ProfileUpdate::default()
        };
        let diseases = ProfileUpdate {
            diseases: Some(vec!["asthma".to_owned()]),
            ..ProfileUpdate::default()
        };
        repo.apply_profile_update(&meera.id, &height)
            .await
            .expect("height update");
        repo.apply_profile_update(&meera.id, &diseases)
            .await
            .expect("diseases update");

        let stored = repo
            .find_by_id(&meera.id)
            .await
            .expect("read")
            .expect("known user");
        assert_eq!(stored.profile.height, Some(170.0));
        assert_eq!(stored.profile.diseases, ["asthma"]);
    }

    #[rstest]
    #[tokio::test]
    async fn profile_update_for_unknown_user_is_none() {
        let repo = InMemoryUserRepository::new();
        let saved = repo
            .apply_profile_update(&UserId::random(), &ProfileUpdate::default())
            .await
            .expect("update");
        assert!(saved.is_none());
    }
}
