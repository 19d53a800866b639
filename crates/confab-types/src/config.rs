//! Global configuration shape for Confab.
//!
//! Loaded from `{data_dir}/config.toml` by the infrastructure layer. Every
//! field has a default so a missing or partial file still yields a working
//! configuration. The provider API key deliberately does not live here; it
//! comes from the environment and never touches disk.

use serde::{Deserialize, Serialize};

/// Model used when `config.toml` does not name one.
pub const DEFAULT_PROVIDER_MODEL: &str = "gemini-2.0-flash";

/// Global configuration from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Completion model identifier sent to the provider.
    #[serde(default = "default_provider_model")]
    pub provider_model: String,
    /// Override for the provider base URL (testing, proxies).
    #[serde(default)]
    pub provider_base_url: Option<String>,
}

fn default_provider_model() -> String {
    DEFAULT_PROVIDER_MODEL.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            provider_model: default_provider_model(),
            provider_base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.provider_model, "gemini-2.0-flash");
        assert!(config.provider_base_url.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GlobalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider_model, DEFAULT_PROVIDER_MODEL);
    }
}
