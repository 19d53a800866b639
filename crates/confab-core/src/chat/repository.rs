//! ChatRepository trait definition.
//!
//! Provides the session store and the append-only message log behind one
//! trait. Follows the same RPITIT pattern as UserRepository.

use confab_types::chat::{ChatMessage, ChatSession, SessionId};
use confab_types::error::RepositoryError;
use confab_types::user::UserId;

/// Repository trait for chat session and message persistence.
///
/// Implementations live in confab-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Create a new chat session.
    fn create_session(
        &self,
        session: &ChatSession,
    ) -> impl std::future::Future<Output = Result<ChatSession, RepositoryError>> + Send;

    /// Get a chat session by its unique ID.
    fn get_session(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// List sessions owned by a user, ordered by created_at DESC.
    fn list_sessions(
        &self,
        owner_user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;

    /// Delete a chat session and, through the store's cascade, its messages.
    ///
    /// Deleting a session that does not exist is a no-op success.
    fn delete_session(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Append a new message to a session's log.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get all messages of a session, ordered by created_at ASC with the
    /// message id breaking timestamp ties.
    fn get_messages(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Get the total number of messages in a session.
    fn get_message_count(
        &self,
        session_id: &SessionId,
    ) -> impl std::future::Future<Output = Result<u32, RepositoryError>> + Send;

    /// Count total sessions across all users.
    fn count_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count total messages across all sessions.
    fn count_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
