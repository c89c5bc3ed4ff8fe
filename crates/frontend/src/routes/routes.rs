use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::ui::DashboardPage;
use crate::domain::coupons::ui::list::CouponsPage;
use crate::domain::locations::ui::lookup::LocationsPage;
use crate::domain::orders::ui::list::OrdersPage;
use crate::domain::products::ui::list::ProductsPage;
use crate::domain::recommendations::ui::list::RecommendationsPage;
use crate::domain::shops::ui::list::ShopsPage;
use crate::layout::shell::AdminShell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page-missing">"Page not found"</div> }>
                <ParentRoute path=path!("") view=AdminShell>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("orders") view=OrdersPage />
                    <Route path=path!("shops") view=ShopsPage />
                    <Route path=path!("products") view=ProductsPage />
                    <Route path=path!("coupons") view=CouponsPage />
                    <Route path=path!("recommendations") view=RecommendationsPage />
                    <Route path=path!("locations") view=LocationsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().email.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainRouter />
        </Show>
    }
}
