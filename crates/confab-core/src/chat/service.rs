//! Chat service enforcing session defaults and message validation.
//!
//! ChatService sits between callers and the `ChatRepository`: it assigns
//! ids and timestamps, applies the default session title, and rejects
//! empty message content before anything reaches the store.

use chrono::Utc;
use confab_types::chat::{
    ChatMessage, ChatSession, DEFAULT_SESSION_TITLE, MessageId, MessageRole, SessionId,
};
use confab_types::error::{ChatError, RepositoryError};
use confab_types::user::UserId;
use tracing::info;

use crate::chat::repository::ChatRepository;

/// Orchestrates session lifecycle and message persistence.
///
/// Generic over `ChatRepository` to maintain clean architecture
/// (confab-core never depends on confab-infra).
pub struct ChatService<C: ChatRepository> {
    chat_repo: C,
}

impl<C: ChatRepository> ChatService<C> {
    /// Create a new chat service with the given repository.
    pub fn new(chat_repo: C) -> Self {
        Self { chat_repo }
    }

    /// Access the chat repository.
    pub fn chat_repo(&self) -> &C {
        &self.chat_repo
    }

    // --- Session lifecycle ---

    /// Create a new chat session for a user.
    ///
    /// A missing title falls back to `DEFAULT_SESSION_TITLE`. The id and
    /// creation timestamp are assigned here, server-side.
    pub async fn create_session(
        &self,
        owner_user_id: UserId,
        title: Option<String>,
    ) -> Result<ChatSession, RepositoryError> {
        let session = ChatSession {
            id: SessionId::new(),
            owner_user_id,
            title: title.unwrap_or_else(|| DEFAULT_SESSION_TITLE.to_string()),
            created_at: Utc::now(),
        };

        let created = self.chat_repo.create_session(&session).await?;
        info!(session_id = %created.id, "Session created");
        Ok(created)
    }

    /// Get a session by ID.
    pub async fn get_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<ChatSession>, RepositoryError> {
        self.chat_repo.get_session(session_id).await
    }

    /// List a user's sessions, most recent first.
    ///
    /// The result is a finite snapshot; callers re-invoke to refresh.
    pub async fn list_sessions(
        &self,
        owner_user_id: &UserId,
    ) -> Result<Vec<ChatSession>, RepositoryError> {
        self.chat_repo.list_sessions(owner_user_id).await
    }

    /// Delete a session and its messages. Idempotent: deleting a session
    /// that never existed (or was already deleted) succeeds.
    pub async fn delete_session(&self, session_id: &SessionId) -> Result<(), RepositoryError> {
        self.chat_repo.delete_session(session_id).await?;
        info!(session_id = %session_id, "Session deleted");
        Ok(())
    }

    // --- Message log ---

    /// Append one message to a session's log.
    ///
    /// Empty or whitespace-only content is rejected before any store call;
    /// the content itself is persisted untrimmed. The store's foreign key
    /// rejects a session id that does not exist.
    pub async fn append_message(
        &self,
        session_id: SessionId,
        role: MessageRole,
        content: String,
    ) -> Result<ChatMessage, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::Validation(
                "message content must not be empty".to_string(),
            ));
        }

        let message = ChatMessage {
            id: MessageId::new(),
            session_id,
            role,
            content,
            created_at: Utc::now(),
        };

        self.chat_repo.save_message(&message).await?;
        Ok(message)
    }

    /// Get the transcript of a session, ordered by creation time.
    pub async fn get_messages(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        self.chat_repo.get_messages(session_id).await
    }
}
