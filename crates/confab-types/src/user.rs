use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a user, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new UserId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a UserId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A user known to the directory.
///
/// Created on first sync for a given `external_id` and never deleted.
/// Optional identity fields that were absent at sync time hold an empty
/// string, not a null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Stable subject identifier issued by the external identity provider.
    /// Unique across users and immutable once assigned.
    pub external_id: String,
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

/// Caller identity as presented by the authentication layer.
///
/// Only `external_id` is required; everything else is best-effort profile
/// data that may be missing depending on what the identity provider shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub external_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserIdentity {
    /// Identity carrying only the external subject, no profile fields.
    pub fn bare(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            email: None,
            display_name: None,
            avatar_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        let id = UserId::new();
        let s = id.to_string();
        let parsed: UserId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_ordering_is_time_sortable() {
        let a = UserId::new();
        let b = UserId::new();
        assert!(a.0 <= b.0);
    }

    #[test]
    fn test_bare_identity() {
        let identity = UserIdentity::bare("auth0|abc123");
        assert_eq!(identity.external_id, "auth0|abc123");
        assert!(identity.email.is_none());
        assert!(identity.display_name.is_none());
        assert!(identity.avatar_url.is_none());
    }

    #[test]
    fn test_user_serialize() {
        let user = User {
            id: UserId::new(),
            external_id: "auth0|abc123".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            avatar_url: String::new(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"external_id\":\"auth0|abc123\""));
        assert!(json.contains("\"avatar_url\":\"\""));
    }
}
