//! UserRepository trait definition.
//!
//! Persistence port for the user directory. Follows the same RPITIT
//! pattern as ChatRepository.

use confab_types::error::RepositoryError;
use confab_types::user::User;

/// Repository trait for user persistence.
///
/// Implementations live in confab-infra (e.g., `SqliteUserRepository`).
/// The store enforces uniqueness of `external_id`; a duplicate insert
/// surfaces as `RepositoryError::Conflict`.
pub trait UserRepository: Send + Sync {
    /// Look up a user by the identity provider's subject identifier.
    fn get_by_external_id(
        &self,
        external_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Insert a new user record.
    fn insert(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Count total users in the directory.
    fn count_users(&self)
    -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
