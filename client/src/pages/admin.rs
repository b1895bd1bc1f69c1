//! Admin layout shell.

use leptos::prelude::*;

use crate::components::session_header::SessionHeader;

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="layout layout--admin">
            <SessionHeader/>
            <main class="layout__body">
                <h2>"Admin Dashboard"</h2>
                <p>"Products, warehouses and manager accounts."</p>
            </main>
        </div>
    }
}
