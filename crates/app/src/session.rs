use dioxus::prelude::*;
use shared_types::{Session, UserRole};

/// Global session state.
///
/// Holds the one [`Session`] record for the running app. Signal subscribers
/// (the views and the role redirect) re-evaluate on every mutation. The
/// record itself lives in `shared_types` so the mutation semantics stay
/// testable without a UI runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub current: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(Session::default()),
        }
    }

    /// Replace both session fields.
    pub fn set_user(&mut self, username: impl Into<String>, role: impl Into<String>) {
        self.current.with_mut(|s| s.set_user(username, role));
    }

    /// Replace only the role.
    pub fn update_role(&mut self, role: impl Into<String>) {
        self.current.with_mut(|s| s.update_role(role));
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Hook returning the current role classification.
pub fn use_role() -> UserRole {
    let session = use_session();
    let role = session.current.read().user_role();
    role
}
