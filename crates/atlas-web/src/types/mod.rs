/// Type definitions for the Atlas web interface
///
/// Shared types for API communication, session state, and UI logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role for navigation and badge display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Label shown in the sidebar identity badge
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "User",
        }
    }
}

/// User representation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub name: String,
    pub role: Role,
    pub is_verified: bool,
}

impl User {
    /// Avatar glyph: first character of the name, case preserved.
    /// Empty names fall back to a placeholder glyph.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Authentication session information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(name: &str, role: Role) -> User {
        User {
            name: name.to_string(),
            role,
            is_verified: false,
        }
    }

    #[test]
    fn test_initial_is_first_character_case_preserved() {
        assert_eq!(user("alice", Role::User).initial(), 'a');
        assert_eq!(user("Alice", Role::User).initial(), 'A');
        assert_eq!(user("Émile", Role::Admin).initial(), 'É');
    }

    #[test]
    fn test_initial_falls_back_for_empty_name() {
        assert_eq!(user("", Role::User).initial(), '?');
    }

    #[test]
    fn test_role_display_names() {
        assert_eq!(Role::Admin.display_name(), "Administrator");
        assert_eq!(Role::User.display_name(), "User");
    }

    #[test]
    fn test_session_expiry() {
        let session = AuthSession {
            user: user("alice", Role::User),
            token: "tok".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!session.is_expired());

        let stale = AuthSession {
            expires_at: Utc::now() - Duration::seconds(1),
            ..session
        };
        assert!(stale.is_expired());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
