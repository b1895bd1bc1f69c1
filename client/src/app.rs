//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{gate::GatePage, login::LoginPage};
use crate::state::session::SessionContext;
use crate::util::auth::LOGIN_SEGMENTS;
use crate::util::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and the session context, then routes
/// `/login` (and the legacy `/adminLogin` and `/warehouseLogin`) to the login page and everything
/// else to the gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(SessionStore::for_environment());
    provide_context(ClientConfig::from_build_env());
    provide_context(session.clone());

    // Session storage only exists in the browser, so rehydrate after mount.
    Effect::new(move || {
        session.rehydrate();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/depot.css"/>
        <Title text="Depot Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(LOGIN_SEGMENTS[0]) view=LoginPage/>
                <Route path=StaticSegment(LOGIN_SEGMENTS[1]) view=LoginPage/>
                <Route path=StaticSegment(LOGIN_SEGMENTS[2]) view=LoginPage/>
                <Route path=StaticSegment("") view=GatePage/>
                <Route path=WildcardSegment("any") view=GatePage/>
            </Routes>
        </Router>
    }
}
