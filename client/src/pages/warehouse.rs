//! Warehouse-manager layout shell.

use leptos::prelude::*;

use crate::components::session_header::SessionHeader;

#[component]
pub fn WarehouseLayout() -> impl IntoView {
    view! {
        <div class="layout layout--warehouse">
            <SessionHeader/>
            <main class="layout__body">
                <h2>"Warehouse"</h2>
                <p>"Stock levels and incoming orders for your warehouse."</p>
            </main>
        </div>
    }
}
