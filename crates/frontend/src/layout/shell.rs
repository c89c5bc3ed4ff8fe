use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::header::Header;
use super::sidebar::Sidebar;

/// Authenticated application frame: sidebar, header, routed page content.
#[component]
pub fn AdminShell() -> impl IntoView {
    view! {
        <div class="admin-shell">
            <Sidebar />
            <div class="admin-shell__main">
                <Header />
                <main class="admin-shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
