//! Caller identity extracted from proxy-forwarded headers.
//!
//! The API sits behind an authenticating reverse proxy that verifies the
//! caller and forwards their identity in request headers:
//!
//! - `X-Auth-Subject` (required): stable external identifier
//! - `X-Auth-Email` (optional)
//! - `X-Auth-Name` (optional)
//! - `X-Auth-Picture` (optional)
//!
//! A request without a usable `X-Auth-Subject` is rejected with 401 before
//! any handler runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use confab_types::user::UserIdentity;

use crate::http::error::AppError;

/// Extractor carrying the verified caller identity.
pub struct CallerIdentity(pub UserIdentity);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = parts
            .headers
            .get("x-auth-subject")
            .ok_or_else(|| {
                AppError::Unauthorized(
                    "Missing X-Auth-Subject header. Requests must arrive through the authenticating proxy.".to_string(),
                )
            })?
            .to_str()
            .map_err(|_| {
                AppError::Unauthorized("Invalid X-Auth-Subject header encoding".to_string())
            })?
            .trim();

        if subject.is_empty() {
            return Err(AppError::Unauthorized(
                "Empty X-Auth-Subject header".to_string(),
            ));
        }

        let identity = UserIdentity {
            external_id: subject.to_string(),
            email: optional_header(parts, "x-auth-email"),
            display_name: optional_header(parts, "x-auth-name"),
            avatar_url: optional_header(parts, "x-auth-picture"),
        };

        Ok(CallerIdentity(identity))
    }
}

/// Read an optional identity header. Undecodable or blank values are
/// treated as absent.
fn optional_header(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_full_identity_extracted() {
        let mut parts = parts_with_headers(&[
            ("x-auth-subject", "auth0|abc123"),
            ("x-auth-email", "ada@example.com"),
            ("x-auth-name", "Ada Lovelace"),
            ("x-auth-picture", "https://example.com/ada.png"),
        ]);

        let CallerIdentity(identity) = CallerIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(identity.external_id, "auth0|abc123");
        assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
        assert_eq!(identity.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            identity.avatar_url.as_deref(),
            Some("https://example.com/ada.png")
        );
    }

    #[tokio::test]
    async fn test_subject_only_leaves_optionals_empty() {
        let mut parts = parts_with_headers(&[("x-auth-subject", "auth0|abc123")]);

        let CallerIdentity(identity) = CallerIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(identity.external_id, "auth0|abc123");
        assert!(identity.email.is_none());
        assert!(identity.display_name.is_none());
        assert!(identity.avatar_url.is_none());
    }

    #[tokio::test]
    async fn test_missing_subject_rejected() {
        let mut parts = parts_with_headers(&[("x-auth-email", "ada@example.com")]);

        let result = CallerIdentity::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_blank_subject_rejected() {
        let mut parts = parts_with_headers(&[("x-auth-subject", "   ")]);

        let result = CallerIdentity::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
