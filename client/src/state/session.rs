//! Session context: the single writer of auth state and session storage.
//!
//! DESIGN
//! ======
//! Session storage is the durable record; `AuthState` is a reactive cache of
//! it, rehydrated once at startup and afterwards updated in the same call as
//! every storage write. Provided to the tree via Leptos context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::state::role::Role;
use crate::util::session_store::{SessionStore, StorageError};

#[derive(Clone, Debug)]
pub struct SessionContext {
    pub auth: RwSignal<AuthState>,
    store: SessionStore,
}

impl SessionContext {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { auth: RwSignal::new(AuthState::default()), store }
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Load the stored session into auth state. Admin wins if both keys are
    /// present. Only the first call reads storage; later calls return the
    /// current role.
    pub fn rehydrate(&self) -> Option<Role> {
        if !self.auth.with_untracked(|s| s.loading) {
            return self.auth.with_untracked(|s| s.role);
        }

        let found = Role::ALL
            .into_iter()
            .find_map(|role| self.store.load(role.storage_key()).map(|session| (role, session)));
        let role = found.as_ref().map(|(role, _)| *role);
        match role {
            Some(role) => leptos::logging::log!("restored {role} session"),
            None => leptos::logging::log!("no stored session"),
        }
        self.auth.update(|s| s.rehydrated(found));
        role
    }

    /// Persist `session` for `role`, drop the other role's entry, then update
    /// auth state. Auth state is untouched if the write fails.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the session could not be persisted.
    pub fn commit_login(&self, role: Role, session: Session) -> Result<(), StorageError> {
        self.store.save(role.storage_key(), &session)?;
        self.store.clear(role.other().storage_key());
        self.auth.update(|s| s.login_success(role, session));
        Ok(())
    }

    /// Forget every stored session and reset auth state.
    pub fn logout(&self) {
        for role in Role::ALL {
            self.store.clear(role.storage_key());
        }
        self.auth.update(AuthState::logout);
    }
}
