use std::collections::HashSet;

use contracts::domain::shops::Shop;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::shops::api;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::icons::icon;

const CATEGORIES: &[&str] = &[
    "all",
    "electronics",
    "groceries",
    "clothing",
    "food",
    "books",
    "home",
    "sports",
];

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Shop management page: category filter plus open/closed toggling per shop.
#[component]
pub fn ShopsPage() -> impl IntoView {
    let (shops, set_shops) = signal::<Vec<Shop>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (category, set_category) = signal("all".to_string());
    let updating: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    let load_shops = move |selected: String| {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_shops(&selected).await {
                Ok(data) => set_shops.set(data),
                Err(e) => {
                    log::error!("Failed to fetch shops: {}", e);
                    set_error.set(Some("Failed to load shops. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Reload whenever the category changes.
    Effect::new(move |_| {
        load_shops(category.get());
    });

    let toggle_status = move |uid: String, currently_open: bool| {
        updating.update(|set| {
            set.insert(uid.clone());
        });
        spawn_local(async move {
            match api::update_shop_status(&uid, !currently_open).await {
                Ok(_) => {
                    set_shops.update(|shops| {
                        if let Some(shop) = shops.iter_mut().find(|s| s.uid == uid) {
                            shop.is_open = !currently_open;
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to update shop status for {}: {}", uid, e);
                }
            }
            updating.update(|set| {
                set.remove(&uid);
            });
        });
    };

    let columns = vec![
        Column::new("shop_name", "Shop Name", |s: &Shop| s.shop_name.clone())
            .render(|value, s| {
                view! {
                    <div class="cell-entity">
                        <div class="cell-entity__icon">{icon("store")}</div>
                        <div>
                            <div class="cell-entity__name">{value}</div>
                            <div class="cell-entity__sub">{s.name.clone()}</div>
                        </div>
                    </div>
                }
                .into_any()
            }),
        Column::new("category", "Category", |s: &Shop| s.category.clone())
            .render(|value, _| {
                view! { <StatusBadge status="processing">{capitalize(&value)}</StatusBadge> }
                    .into_any()
            }),
        Column::new("phone_number", "Contact", |s: &Shop| s.phone_number.clone())
            .render(|value, _| {
                view! {
                    <span class="cell-contact">
                        {icon("phone")}
                        {value}
                    </span>
                }
                .into_any()
            }),
        Column::new("city", "Location", |s: &Shop| s.city.clone())
            .render(|_, s| {
                view! {
                    <span class="cell-contact">
                        {icon("map-pin")}
                        {format!("{}, {}", s.city, s.state)}
                    </span>
                }
                .into_any()
            }),
        Column::new("rating", "Rating", |s: &Shop| format!("{:.1}", s.rating))
            .render(|value, s| {
                view! {
                    <span class="cell-rating">
                        {icon("star")}
                        {format!("{} · {} likes", value, s.likes_count)}
                    </span>
                }
                .into_any()
            }),
        Column::new("verify", "Verified", |s: &Shop| s.verify.to_string())
            .render(|_, s| {
                let (status, label) = if s.verify { ("active", "Verified") } else { ("pending", "Unverified") };
                view! { <StatusBadge status=status>{label}</StatusBadge> }.into_any()
            }),
        Column::new("is_open", "Status", |s: &Shop| s.is_open.to_string())
            .render(move |_, s| {
                let uid = s.uid.clone();
                let is_open = s.is_open;
                let busy = updating.get().contains(&uid);
                let label = if busy {
                    "Saving..."
                } else if is_open {
                    "Open"
                } else {
                    "Closed"
                };
                let class = if is_open {
                    "btn-toggle btn-toggle--on"
                } else {
                    "btn-toggle"
                };
                view! {
                    <button
                        class=class
                        disabled=busy
                        on:click=move |_| toggle_status(uid.clone(), is_open)
                    >
                        {label}
                    </button>
                }
                .into_any()
            }),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Shop Management"</h1>
                <div class="page__actions">
                    <select
                        class="select"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|&cat| {
                                view! {
                                    <option value=cat selected=move || category.get() == cat>
                                        {capitalize(cat)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        class="btn-primary"
                        on:click=move |_| load_shops(category.get_untracked())
                        disabled=move || loading.get()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                error.get().map(|err| {
                    view! { <div class="alert alert--error"><span>{err}</span></div> }
                })
            }}

            <div class="card">
                <h3 class="card__title">
                    {icon("store")}
                    "All Shops"
                </h3>
                <DataTable
                    data=shops
                    columns=columns
                    search_key="shop_name"
                    search_placeholder="Search by shop name..."
                    loading=loading
                />
            </div>
        </div>
    }
}
