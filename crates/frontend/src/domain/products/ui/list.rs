use std::collections::HashSet;

use contracts::domain::products::Listing;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::products::api;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

const CATEGORIES: &[&str] = &[
    "electronics",
    "groceries",
    "clothing",
    "food",
    "books",
    "home",
    "sports",
];

const PAGE_SIZE: usize = 10;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Product listings page. Paging happens server-side through the catalogue
/// endpoint's page/size params, so the table itself stays unpaginated and
/// Next is disabled once a short page comes back.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Listing>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (category, set_category) = signal("electronics".to_string());
    let (page, set_page) = signal(0usize);
    let updating: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let load_products = move |selected: String, page_index: usize| {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_products(&selected, page_index, PAGE_SIZE).await {
                Ok(data) => set_products.set(data),
                Err(e) => {
                    log::error!("Failed to fetch products: {}", e);
                    set_error.set(Some("Failed to load products. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_products(category.get(), page.get());
    });

    let toggle_recommendation = move |product_id: i64| {
        updating.update(|set| {
            set.insert(product_id);
        });
        spawn_local(async move {
            match api::update_recommendation_status(product_id).await {
                Ok(()) => {
                    // Refetch the current page so the listing reflects the change.
                    load_products(category.get_untracked(), page.get_untracked());
                }
                Err(e) => {
                    log::error!("Failed to update recommendation status for {}: {}", product_id, e);
                }
            }
            updating.update(|set| {
                set.remove(&product_id);
            });
        });
    };

    let columns = vec![
        Column::new("item_name", "Product", |l: &Listing| l.item_name.clone())
            .render(|value, l| {
                let thumbnail = match l.urls.first() {
                    Some(url) if !url.is_empty() => {
                        view! { <img class="cell-entity__image" src=url.clone() alt=l.item_name.clone() /> }
                            .into_any()
                    }
                    _ => view! { <div class="cell-entity__icon">{icon("package")}</div> }.into_any(),
                };
                view! {
                    <div class="cell-entity">
                        {thumbnail}
                        <div>
                            <div class="cell-entity__name">{value}</div>
                            <div class="cell-entity__sub">{l.sub_category.clone()}</div>
                        </div>
                    </div>
                }
                .into_any()
            }),
        Column::new("shop_name", "Shop", |l: &Listing| l.shop_name.clone())
            .render(|value, _| {
                view! {
                    <span class="cell-contact">
                        {icon("store")}
                        {value}
                    </span>
                }
                .into_any()
            }),
        Column::new("category", "Category", |l: &Listing| l.category.clone())
            .render(|value, _| {
                view! { <StatusBadge status="processing">{capitalize(&value)}</StatusBadge> }
                    .into_any()
            }),
        Column::new("final_price", "Price", |l: &Listing| format_inr(l.final_price))
            .render(|value, l| {
                let strikethrough = l.has_discount().then(|| {
                    view! {
                        <div class="cell-price__was">
                            <span class="cell-price__strike">{format!("₹{}", format_inr(l.actual_price))}</span>
                            <span class="cell-price__discount">{format!("({} off)", l.discount)}</span>
                        </div>
                    }
                });
                view! {
                    <div class="cell-price">
                        <div class="cell-strong">{format!("₹{}", value)}</div>
                        {strikethrough}
                    </div>
                }
                .into_any()
            }),
        Column::new("isActive", "Status", |l: &Listing| l.is_active.to_string())
            .render(|_, l| {
                let (status, label) = if l.is_active { ("active", "Active") } else { ("inactive", "Inactive") };
                view! { <StatusBadge status=status>{label}</StatusBadge> }.into_any()
            }),
        Column::new("id", "Actions", |l: &Listing| l.id.to_string())
            .render(move |_, l| {
                let product_id = l.id;
                let busy = updating.get().contains(&product_id);
                view! {
                    <button
                        class="btn-outline btn-sm"
                        disabled=busy
                        on:click=move |_| toggle_recommendation(product_id)
                    >
                        {icon("star")}
                        "Recommend"
                    </button>
                }
                .into_any()
            }),
    ];

    let stats = Memo::new(move |_| {
        let data = products.get();
        let active = data.iter().filter(|p| p.is_active).count();
        let discounted = data.iter().filter(|p| p.has_discount()).count();
        let average = if data.is_empty() {
            0.0
        } else {
            data.iter().map(|p| p.final_price).sum::<f64>() / data.len() as f64
        };
        (data.len(), active, average, discounted)
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Product Listings"</h1>
                <div class="page__actions">
                    <select
                        class="select"
                        on:change=move |ev| {
                            set_category.set(event_target_value(&ev));
                            set_page.set(0);
                        }
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
                        on:click=move |_| load_products(category.get_untracked(), page.get_untracked())
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

            <div class="stat-grid stat-grid--4">
                <StatCard
                    label="Total Products".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || Some(stats.get().0 as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Active Products".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(stats.get().1 as f64))
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Good
                />
                <StatCard
                    label="Average Price".to_string()
                    icon_name="rupee".to_string()
                    value=Signal::derive(move || Some(stats.get().2))
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Discounted Items".to_string()
                    icon_name="ticket".to_string()
                    value=Signal::derive(move || Some(stats.get().3 as f64))
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Warning
                />
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("package")}
                    {move || format!("Products in {}", capitalize(&category.get()))}
                </h3>
                <DataTable
                    data=products
                    columns=columns
                    search_key="item_name"
                    search_placeholder="Search by product name..."
                    paginated=false
                    loading=loading
                />

                <div class="server-paging">
                    <span class="server-paging__info">
                        {move || format!("Page {}", page.get() + 1)}
                    </span>
                    <div class="server-paging__buttons">
                        <button
                            class="btn-outline btn-sm"
                            on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                            disabled=move || page.get() == 0 || loading.get()
                        >
                            "Previous"
                        </button>
                        <button
                            class="btn-outline btn-sm"
                            on:click=move |_| set_page.update(|p| *p += 1)
                            disabled=move || products.get().len() < PAGE_SIZE || loading.get()
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
