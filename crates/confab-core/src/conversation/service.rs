//! Conversation service: the send-message sequence and transcript reads.

use std::sync::Arc;

use confab_types::chat::{ChatMessage, MessageRole, SendOutcome, SessionId};
use confab_types::error::ChatError;
use confab_types::user::UserIdentity;
use tracing::{info, warn};

use crate::chat::repository::ChatRepository;
use crate::chat::service::ChatService;
use crate::completion::provider::CompletionProvider;
use crate::user::directory::UserDirectory;
use crate::user::repository::UserRepository;

/// Orchestrates one chat turn end to end.
///
/// Each `send_message` call runs strictly sequentially; the only
/// suspension points are the awaited store and provider calls. There is no
/// cross-call state here -- concurrent calls against the same session are
/// not serialized, and the resulting transcript interleaving is accepted.
///
/// Failure ordering is the contract: once a step fails, later steps are
/// skipped and the side effects of completed steps stay committed. There
/// are no compensating deletes and no retries.
pub struct ConversationService<U, C, P>
where
    U: UserRepository,
    C: ChatRepository,
    P: CompletionProvider,
{
    directory: Arc<UserDirectory<U>>,
    chat: Arc<ChatService<C>>,
    provider: Arc<P>,
}

impl<U, C, P> ConversationService<U, C, P>
where
    U: UserRepository,
    C: ChatRepository,
    P: CompletionProvider,
{
    /// Create a new conversation service over the directory, chat service,
    /// and completion provider.
    pub fn new(
        directory: Arc<UserDirectory<U>>,
        chat: Arc<ChatService<C>>,
        provider: Arc<P>,
    ) -> Self {
        Self {
            directory,
            chat,
            provider,
        }
    }

    /// Access the user directory.
    pub fn directory(&self) -> &UserDirectory<U> {
        &self.directory
    }

    /// Access the chat service.
    pub fn chat(&self) -> &ChatService<C> {
        &self.chat
    }

    /// Process one user turn and return the assistant's reply together with
    /// the session it belongs to.
    ///
    /// The sequence per call:
    /// 1. Reject a blank caller identity before touching any store.
    /// 2. Reject an empty message before touching any store. The message is
    ///    persisted and sent to the provider untrimmed.
    /// 3. Resolve the caller to a user record (created on first contact).
    /// 4. Adopt the supplied session id as-is, or create a fresh session.
    ///    A supplied id is not re-verified here; a stale one surfaces as a
    ///    foreign-key failure when the user turn is inserted.
    /// 5. Persist the user turn. On failure the provider is never invoked:
    ///    no reply is generated for a turn that was not saved.
    /// 6. Invoke the provider with the message text only -- prior turns are
    ///    not sent. On failure the user turn stays persisted.
    /// 7. Persist the assistant turn, best-effort: on failure the reply is
    ///    still returned and the miss is logged.
    pub async fn send_message(
        &self,
        identity: &UserIdentity,
        message: &str,
        session_id: Option<SessionId>,
    ) -> Result<SendOutcome, ChatError> {
        if identity.external_id.trim().is_empty() {
            return Err(ChatError::Unauthorized(
                "caller identity is missing".to_string(),
            ));
        }

        if message.trim().is_empty() {
            return Err(ChatError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        let user = self.directory.sync_user(identity).await?;

        let session_id = match session_id {
            Some(id) => id,
            None => self.chat.create_session(user.id, None).await?.id,
        };

        self.chat
            .append_message(session_id, MessageRole::User, message.to_string())
            .await?;

        let reply = self.provider.generate(message).await?;

        if let Err(e) = self
            .chat
            .append_message(session_id, MessageRole::Assistant, reply.clone())
            .await
        {
            warn!(session_id = %session_id, error = %e, "Assistant turn not persisted; returning reply anyway");
        }

        info!(
            session_id = %session_id,
            provider = self.provider.name(),
            "Turn completed"
        );

        Ok(SendOutcome { reply, session_id })
    }

    /// Read a session's transcript: ascending creation order, id-tiebroken.
    ///
    /// A thin read-through with no caching; every call re-reads the store.
    pub async fn transcript(&self, session_id: &SessionId) -> Result<Vec<ChatMessage>, ChatError> {
        Ok(self.chat.get_messages(session_id).await?)
    }
}
