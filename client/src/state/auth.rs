//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gate on every navigation and by the login page to skip
//! the form when a session already exists. Only `SessionContext` mutates it,
//! so storage and state never diverge.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;
use crate::state::role::Role;

/// Authentication state: the signed-in session, its role, and whether the
/// startup rehydration has run yet.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, role: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// A successful login for `role`.
    pub fn login_success(&mut self, role: Role, session: Session) {
        self.user = Some(session);
        self.role = Some(role);
        self.loading = false;
    }

    /// Startup rehydration finished; `found` is the stored session, if any.
    pub fn rehydrated(&mut self, found: Option<(Role, Session)>) {
        match found {
            Some((role, session)) => self.login_success(role, session),
            None => {
                self.user = None;
                self.role = None;
                self.loading = false;
            }
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.role = None;
        self.loading = false;
    }
}
