//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate page and the login page both derive their redirects from the same
//! `AuthState`, so the decisions live here as pure functions with thin
//! effect wrappers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::role::Role;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Route segments that render the login page: the canonical one first, then
/// the legacy per-role aliases.
pub const LOGIN_SEGMENTS: [&str; 3] = ["login", "adminLogin", "warehouseLogin"];

/// What the gated route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateTarget {
    /// Stored session not read yet.
    Pending,
    /// No session: send the user to the login page.
    Login,
    Admin,
    Warehouse,
}

/// Choose the render target for a gated route.
#[must_use]
pub fn gate_target(state: &AuthState) -> GateTarget {
    if state.loading {
        return GateTarget::Pending;
    }
    match (state.is_logged_in(), state.role) {
        (true, Some(Role::Admin)) => GateTarget::Admin,
        (true, Some(Role::Warehouse)) => GateTarget::Warehouse,
        _ => GateTarget::Login,
    }
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    gate_target(state) == GateTarget::Login
}

#[must_use]
pub fn should_skip_login(state: &AuthState) -> bool {
    !state.loading && state.is_logged_in()
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, replace());
        }
    });
}

/// Leave the login page for `/` once a session exists.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_skip_login) {
            navigate(HOME_PATH, replace());
        }
    });
}

/// Navigate to `/` after a successful sign-in.
pub fn go_home<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(HOME_PATH, replace());
}
