//! Login page: role selector plus email/password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected role decides which login endpoint is called and which
//! storage key receives the session. On success the session context is
//! updated and the router sends the user to `/`, where the gate picks the
//! layout.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::LoginError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Session;
use crate::net::types::Credentials;
use crate::state::role::{Role, resolve};
use crate::state::session::SessionContext;
use crate::util::auth::install_authed_redirect;
use crate::util::submit_guard::SubmitGuard;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::submit_guard::SubmitTicket;

/// Local form state, updated on every keystroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Outcome of the latest submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Succeeded,
}

impl SubmitState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Apply a settled login result to the session context.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn settle_attempt(
    session: &SessionContext,
    role: Role,
    result: Result<Session, LoginError>,
) -> SubmitState {
    let outcome = result.and_then(|s| session.commit_login(role, s).map_err(LoginError::from));
    match outcome {
        Ok(()) => SubmitState::Succeeded,
        Err(err) => {
            if err.is_unexpected() {
                leptos::logging::error!("login error: {err}");
            }
            SubmitState::Failed(err.user_message())
        }
    }
}

/// Settle a submission unless the page was torn down or a newer submission
/// started. Returns `None` for a discarded completion.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn complete_attempt(
    guard: &SubmitGuard,
    ticket: SubmitTicket,
    session: &SessionContext,
    role: Role,
    result: Result<Session, LoginError>,
) -> Option<SubmitState> {
    if !guard.is_current(ticket) {
        leptos::logging::log!("discarding stale login completion");
        return None;
    }
    Some(settle_attempt(session, role, result))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    install_authed_redirect(session.auth, navigate.clone());

    let form = RwSignal::new(LoginForm::default());
    let submit_state = RwSignal::new(SubmitState::Idle);
    let guard = SubmitGuard::new();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.cancel());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submit_state.with_untracked(SubmitState::is_submitting) {
            return;
        }
        let snapshot = form.get_untracked();
        let route = resolve(&config.api_base, snapshot.role);
        let ticket = guard.begin();
        submit_state.set(SubmitState::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let guard = guard.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&route.endpoint, &snapshot.credentials()).await;
                let Some(next) = complete_attempt(&guard, ticket, &session, snapshot.role, result) else {
                    return;
                };
                let succeeded = next == SubmitState::Succeeded;
                submit_state.set(next);
                if succeeded {
                    crate::util::auth::go_home(&navigate);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (route, ticket, &session, &navigate);
        }
    };

    let on_role_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Role>() {
        Ok(role) => form.update(|f| f.role = role),
        Err(e) => leptos::logging::error!("role selector: {e}"),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Sign in to continue!"</p>
                <form class="login-form" on:submit=on_submit>
                    <select
                        class="login-input login-input--role"
                        prop:value=move || form.with(|f| f.role.as_str().to_owned())
                        on:change=on_role_change
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="Email Address"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <Show when=move || submit_state.with(|s| s.error_message().is_some())>
                        <p class="login-message login-message--error">
                            {move || submit_state.with(|s| s.error_message().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || submit_state.with(SubmitState::is_submitting)
                    >
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
