//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over repository/provider traits, but AppState pins
//! them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;
use tracing::debug;

use confab_core::chat::service::ChatService;
use confab_core::conversation::service::ConversationService;
use confab_core::user::directory::UserDirectory;
use confab_infra::config::{API_KEY_ENV_VAR, default_data_dir, load_global_config};
use confab_infra::llm::create_provider;
use confab_infra::llm::gemini::GeminiProvider;
use confab_infra::sqlite::chat::SqliteChatRepository;
use confab_infra::sqlite::pool::DatabasePool;
use confab_infra::sqlite::user::SqliteUserRepository;
use confab_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteUserDirectory = UserDirectory<SqliteUserRepository>;

pub type ConcreteChatService = ChatService<SqliteChatRepository>;

pub type ConcreteConversationService =
    ConversationService<SqliteUserRepository, SqliteChatRepository, GeminiProvider>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversation_service: Arc<ConcreteConversationService>,
    pub user_directory: Arc<ConcreteUserDirectory>,
    pub chat_service: Arc<ConcreteChatService>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    ///
    /// A missing provider API key is tolerated here so read-only commands
    /// keep working; generation then fails at call time with an
    /// authentication error from the provider.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = default_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

        let config = load_global_config(&data_dir).await;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("confab.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;
        debug!(path = %data_dir.display(), "Database ready");

        // Wire the user directory and chat service; the conversation service
        // shares the same instances.
        let user_directory = Arc::new(UserDirectory::new(SqliteUserRepository::new(
            db_pool.clone(),
        )));
        let chat_service = Arc::new(ChatService::new(SqliteChatRepository::new(db_pool.clone())));

        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map(SecretString::from)
            .unwrap_or_else(|_| SecretString::from(String::new()));
        let provider = Arc::new(create_provider(&config, api_key));

        let conversation_service = Arc::new(ConversationService::new(
            user_directory.clone(),
            chat_service.clone(),
            provider,
        ));

        Ok(Self {
            conversation_service,
            user_directory,
            chat_service,
            config,
            data_dir,
        })
    }
}
