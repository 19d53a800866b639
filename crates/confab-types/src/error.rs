use thiserror::Error;

use crate::completion::CompletionError;

/// Errors from repository operations (used by trait definitions in confab-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// The per-call failure taxonomy of the conversation flow.
///
/// Every failure is fatal for its call; nothing is retried. `Unauthorized`
/// and `Validation` fire before any store is touched. `Dependency` and
/// `Provider` keep whatever earlier steps already committed -- there are no
/// compensating deletes, so a dangling user turn after a provider failure
/// is expected.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("dependency error: {0}")]
    Dependency(#[from] RepositoryError),

    #[error("provider error: {0}")]
    Provider(#[from] CompletionError),
}
