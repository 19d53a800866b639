//! CompletionProvider trait definition.
//!
//! The provider is an opaque external collaborator: one prompt in, one
//! completed text out, or a failure. No streaming is consumed and no
//! conversation history is sent -- callers pass a single turn.

use confab_types::completion::CompletionError;

/// Trait for text-completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in confab-infra (e.g., `GeminiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a completion for a single prompt. Completes exactly once
    /// or fails; partial output is never observed.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
