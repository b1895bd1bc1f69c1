//! Catch-all gated route: picks the layout for the signed-in role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::admin::AdminLayout;
use crate::pages::warehouse::WarehouseLayout;
use crate::state::session::SessionContext;
use crate::util::auth::{GateTarget, gate_target, install_unauth_redirect};

/// Renders the admin or warehouse layout, or redirects to `/login` once the
/// stored session has been read and none was found.
#[component]
pub fn GatePage() -> impl IntoView {
    let auth = expect_context::<SessionContext>().auth;
    install_unauth_redirect(auth, use_navigate());

    let target = Memo::new(move |_| auth.with(gate_target));

    move || match target.get() {
        GateTarget::Admin => view! { <AdminLayout/> }.into_any(),
        GateTarget::Warehouse => view! { <WarehouseLayout/> }.into_any(),
        GateTarget::Pending | GateTarget::Login => {
            view! { <div class="gate-pending">"Loading..."</div> }.into_any()
        }
    }
}
