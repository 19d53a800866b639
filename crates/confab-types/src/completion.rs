//! Completion provider error surface.
//!
//! The provider itself is an opaque external collaborator; the only shape
//! shared across the workspace is how its failures are reported.

/// Errors from completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::Provider {
            message: "upstream 503".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: upstream 503");
    }

    #[test]
    fn test_rate_limited_display() {
        let err = CompletionError::RateLimited {
            retry_after_ms: Some(2000),
        };
        assert!(err.to_string().contains("2000"));
    }
}
