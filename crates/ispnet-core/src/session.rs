//! Session state: who is signed in, with which role and token.
//!
//! The session is a single value, replaced atomically on login and
//! logout. A token never exists without its user id, username, and role.

use serde::{Deserialize, Serialize};

/// Portal role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    /// Wire/storage spelling of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CUSTOMER" => Ok(Self::Customer),
            "ADMIN" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other} (expected CUSTOMER or ADMIN)")),
        }
    }
}

/// An authenticated portal session.
///
/// Token present ⇔ user considered authenticated; the whole record is
/// stored and cleared as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: Role,
    pub token: String,
}

/// Tagged session lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No session: fresh start, after logout, or after a forced logout.
    #[default]
    Anonymous,
    /// Logged in with a backend-issued token.
    Authenticated(Session),
}

impl SessionState {
    /// Whether a session is established.
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Borrow the session, if any.
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(s) => Some(s),
        }
    }

    /// Borrow the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }
}

impl From<Option<Session>> for SessionState {
    fn from(value: Option<Session>) -> Self {
        value.map_or(Self::Anonymous, Self::Authenticated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: "u-1".into(),
            username: "alice".into(),
            role: Role::Customer,
            token: "tok".into(),
        }
    }

    #[test]
    fn role_roundtrips_wire_spelling() {
        let json = serde_json::to_string(&Role::Customer).unwrap();
        assert_eq!(json, "\"CUSTOMER\"");
        let back: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(back, Role::Admin);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn default_state_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.token().is_none());
    }

    #[test]
    fn authenticated_state_exposes_token() {
        let state = SessionState::Authenticated(session());
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("tok"));
        assert_eq!(state.session().unwrap().username, "alice");
    }

    #[test]
    fn state_from_option() {
        assert_eq!(SessionState::from(None), SessionState::Anonymous);
        assert!(SessionState::from(Some(session())).is_authenticated());
    }
}
