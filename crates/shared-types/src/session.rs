use serde::{Deserialize, Serialize};

/// In-memory record of the signed-in user.
///
/// Created empty at application start, replaced wholesale on login, and
/// discarded on reload — nothing here is ever persisted. Views get a read
/// handle plus the mutation methods below; they never touch the fields
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub username: String,
    pub role: String,
}

impl Session {
    /// Replace both fields. No validation is performed — any string is
    /// accepted for `role`, and values the router does not recognize simply
    /// produce no redirect.
    pub fn set_user(&mut self, username: impl Into<String>, role: impl Into<String>) {
        self.username = username.into();
        self.role = role.into();
    }

    /// Replace only the role, leaving the username untouched.
    pub fn update_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    /// Reset both fields to the unauthenticated state.
    pub fn clear(&mut self) {
        self.username.clear();
        self.role.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        !self.username.is_empty()
    }

    /// Classify the stored role string.
    pub fn user_role(&self) -> UserRole {
        UserRole::classify(&self.role)
    }
}

/// Classification of the session's role string.
///
/// Only `Admin` and `User` drive navigation. An empty role means nobody is
/// signed in; any other non-empty value is carried in the session verbatim
/// but leaves the router where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Empty role string — not signed in.
    #[default]
    Guest,
    Admin,
    User,
    /// Any non-empty value other than `"admin"` or `"user"`.
    Unknown,
}

impl UserRole {
    /// Classify a raw role string. Matching is exact — the endpoint issues
    /// lowercase tags and nothing folds case on the way in.
    pub fn classify(role: &str) -> Self {
        match role {
            "" => UserRole::Guest,
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            _ => UserRole::Unknown,
        }
    }
}

/// Shape of the JSON body the login endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub username: String,
    pub role: String,
}

/// Credentials captured by the login form.
///
/// The demo endpoint issues a session without reading a credential payload,
/// so these fields stay on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.username, "");
        assert_eq!(session.role, "");
        assert!(!session.is_authenticated());
        assert_eq!(session.user_role(), UserRole::Guest);
    }

    #[test]
    fn set_user_replaces_both_fields() {
        let mut session = Session::default();
        session.set_user("alice", "admin");
        assert_eq!(
            session,
            Session {
                username: "alice".to_string(),
                role: "admin".to_string(),
            }
        );
        assert!(session.is_authenticated());
    }

    #[test]
    fn set_user_accepts_unrecognized_roles() {
        let mut session = Session::default();
        session.set_user("x", "manager");
        assert_eq!(session.role, "manager");
        assert_eq!(session.user_role(), UserRole::Unknown);
    }

    #[test]
    fn set_user_is_idempotent() {
        let mut session = Session::default();
        session.set_user("alice", "admin");
        let first = session.clone();
        session.set_user("alice", "admin");
        assert_eq!(session, first);
    }

    #[test]
    fn update_role_leaves_username_untouched() {
        let mut session = Session::default();
        session.set_user("bob", "user");
        for role in ["admin", "user", "manager", ""] {
            session.update_role(role);
            assert_eq!(session.role, role);
            assert_eq!(session.username, "bob");
        }
    }

    #[test]
    fn clear_resets_to_unauthenticated() {
        let mut session = Session::default();
        session.set_user("alice", "admin");
        session.clear();
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn classify_recognizes_exactly_two_roles() {
        assert_eq!(UserRole::classify(""), UserRole::Guest);
        assert_eq!(UserRole::classify("admin"), UserRole::Admin);
        assert_eq!(UserRole::classify("user"), UserRole::User);
        assert_eq!(UserRole::classify("manager"), UserRole::Unknown);
        // Exact match only — no case folding, no trimming.
        assert_eq!(UserRole::classify("Admin"), UserRole::Unknown);
        assert_eq!(UserRole::classify("admin "), UserRole::Unknown);
    }

    #[test]
    fn login_response_parses_endpoint_body() {
        let body = r#"{"username":"alice","role":"admin"}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.username, "alice");
        assert_eq!(parsed.role, "admin");
    }

    #[test]
    fn session_roundtrip_through_json() {
        let mut session = Session::default();
        session.set_user("bob", "user");
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, parsed);
    }
}
