//! Header bar shared by both role layouts.

use leptos::prelude::*;

use crate::net::types::Session;
use crate::state::role::Role;
use crate::state::session::SessionContext;

/// Shows the signed-in role and account with a sign-out button.
#[component]
pub fn SessionHeader() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.auth;

    let role_label = move || auth.with(|s| s.role.map(Role::label).unwrap_or_default());
    let account = move || auth.with(|s| s.user.as_ref().and_then(Session::display_name).unwrap_or_default());
    let on_logout = move |_| session.logout();

    view! {
        <header class="session-header">
            <span class="session-header__role">{role_label}</span>
            <span class="session-header__account">{account}</span>
            <button class="btn session-header__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
