use std::collections::HashSet;

use contracts::domain::products::Listing;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::recommendations::api;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

const PAGE_SIZE: usize = 10;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Curated recommendation feed with per-product removal.
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let (recommendations, set_recommendations) = signal::<Vec<Listing>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (page, set_page) = signal(0usize);
    let removing: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let load_recommendations = move |page_index: usize| {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_recommendations(page_index, PAGE_SIZE).await {
                Ok(data) => set_recommendations.set(data),
                Err(e) => {
                    log::error!("Failed to fetch recommendations: {}", e);
                    set_error.set(Some("Failed to load recommendations. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_recommendations(page.get());
    });

    let remove = move |product_id: i64| {
        removing.update(|set| {
            set.insert(product_id);
        });
        spawn_local(async move {
            match api::remove_recommendation(product_id).await {
                Ok(()) => {
                    set_recommendations.update(|items| {
                        items.retain(|item| item.id != product_id);
                    });
                }
                Err(e) => {
                    log::error!("Failed to remove recommendation {}: {}", product_id, e);
                }
            }
            removing.update(|set| {
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
        Column::new("shop_name", "Shop", |l: &Listing| l.shop_name.clone()),
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
        Column::new("id", "Actions", |l: &Listing| l.id.to_string())
            .render(move |_, l| {
                let product_id = l.id;
                let busy = removing.get().contains(&product_id);
                view! {
                    <button
                        class="btn-outline btn-sm btn-danger"
                        disabled=busy
                        on:click=move |_| remove(product_id)
                    >
                        {icon("x")}
                        "Remove"
                    </button>
                }
                .into_any()
            }),
    ];

    let stats = Memo::new(move |_| {
        let data = recommendations.get();
        let average = if data.is_empty() {
            0.0
        } else {
            data.iter().map(|p| p.final_price).sum::<f64>() / data.len() as f64
        };
        (data.len(), average)
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Recommendations"</h1>
                <button
                    class="btn-primary"
                    on:click=move |_| load_recommendations(page.get_untracked())
                    disabled=move || loading.get()
                >
                    "Refresh"
                </button>
            </div>

            {move || {
                error.get().map(|err| {
                    view! { <div class="alert alert--error"><span>{err}</span></div> }
                })
            }}

            <div class="stat-grid stat-grid--2">
                <StatCard
                    label="Recommended Products".to_string()
                    icon_name="star".to_string()
                    value=Signal::derive(move || Some(stats.get().0 as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Average Price".to_string()
                    icon_name="rupee".to_string()
                    value=Signal::derive(move || Some(stats.get().1))
                    format=ValueFormat::Money
                />
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("star")}
                    "Recommended Products"
                </h3>
                <DataTable
                    data=recommendations
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
                            disabled=move || recommendations.get().len() < PAGE_SIZE || loading.get()
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
