//! User directory: idempotent mapping of external identities to users.

use chrono::Utc;
use confab_types::error::RepositoryError;
use confab_types::user::{User, UserId, UserIdentity};
use tracing::info;

use crate::user::repository::UserRepository;

/// Resolves external identities to internal user records, creating the
/// record on first contact.
///
/// Generic over `UserRepository` to maintain clean architecture
/// (confab-core never depends on confab-infra).
pub struct UserDirectory<U: UserRepository> {
    user_repo: U,
}

impl<U: UserRepository> UserDirectory<U> {
    /// Create a new directory over the given repository.
    pub fn new(user_repo: U) -> Self {
        Self { user_repo }
    }

    /// Access the user repository.
    pub fn user_repo(&self) -> &U {
        &self.user_repo
    }

    /// Resolve an identity to its user record, creating it if absent.
    ///
    /// Idempotent: later syncs for a known `external_id` return the
    /// existing record untouched. Optional identity fields missing at
    /// creation time are stored as empty strings, never nulls.
    ///
    /// Two racing first-syncs are settled by the store's uniqueness
    /// constraint on `external_id`: the loser sees a conflict and recovers
    /// by re-fetching the winner's row. The conflict never escapes this
    /// method.
    pub async fn sync_user(&self, identity: &UserIdentity) -> Result<User, RepositoryError> {
        if let Some(existing) = self
            .user_repo
            .get_by_external_id(&identity.external_id)
            .await?
        {
            return Ok(existing);
        }

        let user = User {
            id: UserId::new(),
            external_id: identity.external_id.clone(),
            email: identity.email.clone().unwrap_or_default(),
            display_name: identity.display_name.clone().unwrap_or_default(),
            avatar_url: identity.avatar_url.clone().unwrap_or_default(),
            created_at: Utc::now(),
        };

        match self.user_repo.insert(&user).await {
            Ok(created) => {
                info!(user_id = %created.id, "User created on first sync");
                Ok(created)
            }
            Err(RepositoryError::Conflict(_)) => {
                // Lost a first-sync race; the winner's row is authoritative.
                self.user_repo
                    .get_by_external_id(&identity.external_id)
                    .await?
                    .ok_or(RepositoryError::NotFound)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock repository ---

    #[derive(Default)]
    struct MockInner {
        users: Mutex<Vec<User>>,
        get_calls: AtomicUsize,
        insert_calls: AtomicUsize,
        conflict_on_insert: Mutex<Option<User>>,
    }

    #[derive(Default, Clone)]
    struct MockUserRepository {
        inner: Arc<MockInner>,
    }

    impl MockUserRepository {
        /// Make the next insert fail with Conflict and plant `winner` so the
        /// recovery re-fetch finds it.
        fn conflict_with(&self, winner: User) {
            *self.inner.conflict_on_insert.lock().unwrap() = Some(winner);
        }
    }

    impl UserRepository for MockUserRepository {
        fn get_by_external_id(
            &self,
            external_id: &str,
        ) -> impl Future<Output = Result<Option<User>, RepositoryError>> + Send {
            self.inner.get_calls.fetch_add(1, Ordering::SeqCst);
            let found = self
                .inner
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.external_id == external_id)
                .cloned();
            async move { Ok(found) }
        }

        fn insert(
            &self,
            user: &User,
        ) -> impl Future<Output = Result<User, RepositoryError>> + Send {
            self.inner.insert_calls.fetch_add(1, Ordering::SeqCst);
            let planted = self.inner.conflict_on_insert.lock().unwrap().take();
            let result = match planted {
                Some(winner) => {
                    self.inner.users.lock().unwrap().push(winner);
                    Err(RepositoryError::Conflict(format!(
                        "external_id '{}' already exists",
                        user.external_id
                    )))
                }
                None => {
                    self.inner.users.lock().unwrap().push(user.clone());
                    Ok(user.clone())
                }
            };
            async move { result }
        }

        fn count_users(&self) -> impl Future<Output = Result<u64, RepositoryError>> + Send {
            let count = self.inner.users.lock().unwrap().len() as u64;
            async move { Ok(count) }
        }
    }

    fn identity() -> UserIdentity {
        UserIdentity {
            external_id: "auth0|abc123".to_string(),
            email: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let repo = MockUserRepository::default();
        let directory = UserDirectory::new(repo.clone());

        let first = directory.sync_user(&identity()).await.unwrap();
        let second = directory.sync_user(&identity()).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(repo.inner.insert_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sync_defaults_missing_fields_to_empty_string() {
        let directory = UserDirectory::new(MockUserRepository::default());
        let user = directory
            .sync_user(&UserIdentity::bare("auth0|abc123"))
            .await
            .unwrap();
        assert_eq!(user.email, "");
        assert_eq!(user.display_name, "");
        assert_eq!(user.avatar_url, "");
    }

    #[tokio::test]
    async fn test_sync_recovers_from_insert_conflict() {
        let repo = MockUserRepository::default();
        let directory = UserDirectory::new(repo.clone());

        let winner = User {
            id: UserId::new(),
            external_id: "auth0|abc123".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            avatar_url: String::new(),
            created_at: Utc::now(),
        };
        repo.conflict_with(winner.clone());

        let resolved = directory.sync_user(&identity()).await.unwrap();
        assert_eq!(resolved.id, winner.id);
    }
}
