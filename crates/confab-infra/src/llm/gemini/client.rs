//! GeminiProvider -- concrete [`CompletionProvider`] implementation for
//! Google Gemini.
//!
//! Sends single-turn requests to the generateContent endpoint
//! (`/v1beta/models/{model}:generateContent`) and returns the reply text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use confab_core::completion::provider::CompletionProvider;
use confab_types::completion::CompletionError;

use super::types::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};

/// Google Gemini completion provider.
///
/// Implements [`CompletionProvider`] for the generateContent API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// building the request query string. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google AI API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120)) // 2 min timeout per generation
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The configured model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full generateContent URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Pull the reply text out of a parsed response.
    ///
    /// Joins the text of every part in the first candidate. Returns `None`
    /// when there is no candidate or the joined text is blank.
    fn extract_text(response: &GeminiResponse) -> Option<String> {
        let candidate = response.candidates.first()?;
        let text = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() { None } else { Some(text) }
    }
}

// GeminiProvider intentionally does NOT derive Debug so the API key cannot
// leak through formatting, even though SecretString already redacts itself.

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
                role: None,
            }],
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailed,
                429 => CompletionError::RateLimited {
                    retry_after_ms: None,
                },
                _ => CompletionError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Deserialization(format!("failed to parse response: {e}")))?;

        Self::extract_text(&gemini_resp).ok_or_else(|| {
            CompletionError::Deserialization("response contained no reply text".to_string())
        })
    }
}
