//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `confab-core` using sqlx with split
//! read/write pools. Follows the same patterns as `SqliteChatRepository`:
//! raw queries, private Row structs, split reader/writer pool usage.

use confab_core::user::repository::UserRepository;
use confab_types::error::RepositoryError;
use confab_types::user::{User, UserId};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

/// Internal row type for mapping SQLite rows to domain User.
struct UserRow {
    id: String,
    external_id: String,
    email: String,
    display_name: String,
    avatar_url: String,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            external_id: row.try_get("external_id")?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            avatar_url: row.try_get("avatar_url")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(User {
            id: UserId::from_uuid(id),
            external_id: self.external_id,
            email: self.email,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// UserRepository implementation
// ---------------------------------------------------------------------------

impl UserRepository for SqliteUserRepository {
    async fn get_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE external_id = ?")
            .bind(external_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, user: &User) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (id, external_id, email, display_name, avatar_url, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.external_id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.avatar_url)
        .bind(format_datetime(&user.created_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(user.clone()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "external_id '{}' already exists",
                    user.external_id
                )))
            }
            Err(e) => Err(RepositoryError::Query(e.to_string())),
        }
    }

    async fn count_users(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM users")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;
    use confab_core::user::directory::UserDirectory;
    use confab_types::user::UserIdentity;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn make_user(external_id: &str) -> User {
        User {
            id: UserId::new(),
            external_id: external_id.to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            avatar_url: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_user() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let user = make_user("auth0|abc123");
        let created = repo.insert(&user).await.unwrap();
        assert_eq!(created.id, user.id);

        let found = repo
            .get_by_external_id("auth0|abc123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(found.avatar_url, "");
    }

    #[tokio::test]
    async fn test_get_unknown_external_id_returns_none() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        let found = repo.get_by_external_id("auth0|nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_external_id_is_conflict() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        repo.insert(&make_user("auth0|abc123")).await.unwrap();
        let err = repo.insert(&make_user("auth0|abc123")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_count_users() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool);

        assert_eq!(repo.count_users().await.unwrap(), 0);
        repo.insert(&make_user("auth0|one")).await.unwrap();
        repo.insert(&make_user("auth0|two")).await.unwrap();
        assert_eq!(repo.count_users().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_directory_sync_against_real_store() {
        let pool = test_pool().await;
        let directory = UserDirectory::new(SqliteUserRepository::new(pool));

        let identity = UserIdentity {
            external_id: "auth0|abc123".to_string(),
            email: Some("ada@example.com".to_string()),
            display_name: None,
            avatar_url: None,
        };

        let first = directory.sync_user(&identity).await.unwrap();
        let second = directory.sync_user(&identity).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.display_name, "");
    }

    #[tokio::test]
    async fn test_directory_recovers_when_row_appears_mid_sync() {
        let pool = test_pool().await;
        let repo = SqliteUserRepository::new(pool.clone());

        // Simulate losing a first-sync race: the row already exists, so a
        // blind insert conflicts and the directory must re-fetch.
        let winner = make_user("auth0|abc123");
        repo.insert(&winner).await.unwrap();

        let loser = make_user("auth0|abc123");
        let err = repo.insert(&loser).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        let directory = UserDirectory::new(SqliteUserRepository::new(pool));
        let resolved = directory
            .sync_user(&UserIdentity::bare("auth0|abc123"))
            .await
            .unwrap();
        assert_eq!(resolved.id, winner.id);
    }
}
