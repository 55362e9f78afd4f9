//! # User model
//!
//! [`UserInfo`] is the projection of an account the API returns from `GET /me`
//! (`{"user": {"id", "email", "name"?}}`). The client holds it in the session
//! store after login and drops it on logout; it is never persisted.

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Single character shown in the avatar: first letter of the name, else of
    /// the email, else `U`.
    pub fn initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .or_else(|| self.email.chars().next())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: &str) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(user(Some("Ada"), "ada@example.com").display_name(), "Ada");
        assert_eq!(user(None, "ada@example.com").display_name(), "ada@example.com");
        assert_eq!(user(Some("  "), "ada@example.com").display_name(), "ada@example.com");
    }

    #[test]
    fn test_initial() {
        assert_eq!(user(Some("Ada"), "x@example.com").initial(), 'A');
        assert_eq!(user(None, "grace@example.com").initial(), 'g');
        assert_eq!(user(None, "").initial(), 'U');
    }

    #[test]
    fn test_name_is_optional_on_the_wire() {
        let parsed: UserInfo =
            serde_json::from_str(r#"{"id":"42","email":"a@b.co"}"#).unwrap();
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.id, "42");
    }
}
