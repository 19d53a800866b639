//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use confab_types::error::{ChatError, RepositoryError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A conversation-level error from the core services.
    Chat(ChatError),
    /// A raw repository error from a direct store access.
    Repository(RepositoryError),
    /// The request carried no usable caller identity.
    Unauthorized(String),
    /// The request payload failed validation.
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        Self::Chat(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        Self::Repository(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Chat(ChatError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            AppError::Chat(ChatError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::Chat(ChatError::Dependency(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DEPENDENCY_ERROR",
                e.to_string(),
            ),
            AppError::Chat(ChatError::Provider(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROVIDER_ERROR",
                e.to_string(),
            ),
            AppError::Repository(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DEPENDENCY_ERROR",
                e.to_string(),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
        };

        let body = json!({
            "data": null,
            "meta": {
                "request_id": uuid::Uuid::now_v7().to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0,
            },
            "errors": [{
                "code": code,
                "message": message,
            }],
        });

        (status, [(axum::http::header::CONTENT_TYPE, "application/json")], body.to_string())
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_types::completion::CompletionError;

    #[tokio::test]
    async fn test_unauthorized_maps_to_401() {
        let err = AppError::Chat(ChatError::Unauthorized("no identity".to_string()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let err = AppError::Chat(ChatError::Validation("message is empty".to_string()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dependency_maps_to_500() {
        let err = AppError::Chat(ChatError::Dependency(RepositoryError::Query(
            "disk on fire".to_string(),
        )));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_provider_maps_to_500() {
        let err = AppError::Chat(ChatError::Provider(CompletionError::Provider {
            message: "HTTP 503: overloaded".to_string(),
        }));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_uses_envelope() {
        let err = AppError::Validation("bad session id".to_string());
        let resp = err.into_response();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json["data"].is_null());
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
        assert_eq!(json["errors"][0]["message"], "bad session id");
        assert!(json["meta"]["request_id"].is_string());
    }
}
