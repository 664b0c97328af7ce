//! Auth session model and storage seam.
//!
//! The session is a bearer token plus the logged-in user record. It is
//! created on login, read by every authenticated request, and cleared on
//! logout. Token and user always persist and clear together.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::user::User;

/// A logged-in session: the bearer token and the user it belongs to.
///
/// This is also the exact shape of the login response, so it deserializes
/// straight off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Persistent storage for the auth session.
///
/// `load` never fails: a missing, unreadable, or corrupt session is
/// indistinguishable from "not logged in" and simply yields `None`.
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, or `None` when not logged in.
    fn load(&self) -> Option<AuthSession>;

    /// Persists the session (token and user together).
    fn save(&self, session: &AuthSession) -> Result<()>;

    /// Clears the stored session.
    fn clear(&self) -> Result<()>;

    /// Convenience accessor for just the token.
    fn token(&self) -> Option<String> {
        self.load().map(|session| session.token)
    }
}

/// In-memory session store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a session.
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.session.read().ok()?.clone()
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        *self.session.write().expect("session lock poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.write().expect("session lock poisoned") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            user: User {
                id: 1,
                username: "admin".to_string(),
                name: "Administrator".to_string(),
                role: Role::Admin,
                created_at: String::new(),
                updated_at: String::new(),
            },
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());
        assert!(store.token().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.user.username, "admin");
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_session_deserializes_login_response() {
        let json = r#"{
            "token": "abc",
            "user": {"id": 2, "username": "ops", "name": "Ops", "role": "user"}
        }"#;
        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.role, Role::User);
    }
}
