//! Session Types
//!
//! Identity records and the auth payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Authenticated identity as returned by the backend.
///
/// Only `name` is interpreted; everything else is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// Display name, empty when the backend sent none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// The client's current belief about who is logged in
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    /// Bearer credential backing the session, if one is stored
    pub token: Option<String>,
}

/// `GET /auth/me` response
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// `POST /auth/login` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"name": "Anna", "role": "admin", "id": 7}"#).unwrap();
        assert_eq!(user.display_name(), "Anna");
        assert_eq!(user.extra.get("role").and_then(|v| v.as_str()), Some("admin"));
        assert_eq!(user.extra.len(), 2);
    }

    #[test]
    fn test_user_without_name() {
        let user: User = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user, User::default());
    }
}
