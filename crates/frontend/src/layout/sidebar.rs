use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

struct NavItem {
    title: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", href: "/", icon: "dashboard" },
    NavItem { title: "Orders", href: "/orders", icon: "shopping-cart" },
    NavItem { title: "Shops", href: "/shops", icon: "store" },
    NavItem { title: "Products", href: "/products", icon: "package" },
    NavItem { title: "Coupons", href: "/coupons", icon: "ticket" },
    NavItem { title: "Recommendations", href: "/recommendations", icon: "star" },
    NavItem { title: "Locations", href: "/locations", icon: "map-pin" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <div class="sidebar__brand-icon">{icon("store")}</div>
                <div class="sidebar__brand-text">
                    <div class="sidebar__brand-title">"Commerce Admin"</div>
                    <div class="sidebar__brand-subtitle">"Operations dashboard"</div>
                </div>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <A href=item.href attr:class="sidebar__link">
                                <span class="sidebar__link-icon">{icon(item.icon)}</span>
                                <span class="sidebar__link-title">{item.title}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
