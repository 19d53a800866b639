//! Completion provider implementations.
//!
//! Contains concrete implementations of the [`CompletionProvider`] trait
//! defined in `confab-core`, along with a factory ([`create_provider`])
//! that constructs the provider from a [`GlobalConfig`].
//!
//! [`CompletionProvider`]: confab_core::completion::provider::CompletionProvider

pub mod gemini;

use secrecy::SecretString;

use confab_types::config::GlobalConfig;

use self::gemini::GeminiProvider;

/// Create a [`GeminiProvider`] from the global configuration.
///
/// Uses the configured model and, when set, the configured base URL
/// override (useful for pointing at a proxy or a test server).
pub fn create_provider(config: &GlobalConfig, api_key: SecretString) -> GeminiProvider {
    let provider = GeminiProvider::new(api_key, config.provider_model.clone());
    match &config.provider_base_url {
        Some(base_url) => provider.with_base_url(base_url.clone()),
        None => provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::completion::provider::CompletionProvider;

    #[test]
    fn test_create_provider_uses_configured_model() {
        let config = GlobalConfig {
            provider_model: "gemini-2.5-pro".to_string(),
            provider_base_url: None,
        };
        let provider = create_provider(&config, SecretString::from("test-key"));
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_create_provider_default_config() {
        let provider = create_provider(&GlobalConfig::default(), SecretString::from("test-key"));
        assert_eq!(provider.model(), "gemini-2.0-flash");
    }
}
