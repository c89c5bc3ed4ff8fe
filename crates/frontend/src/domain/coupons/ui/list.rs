use std::collections::HashSet;

use contracts::domain::coupons::{Coupon, CreateCouponRequest};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::coupons::api;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

/// Coupon management: list with an active/inactive filter, inline create
/// form, and per-row deactivation.
#[component]
pub fn CouponsPage() -> impl IntoView {
    let (coupons, set_coupons) = signal::<Vec<Coupon>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal("all".to_string());

    let (show_create_form, set_show_create_form) = signal(false);
    let (new_code, set_new_code) = signal(String::new());
    let (new_amount, set_new_amount) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (creating, set_creating) = signal(false);

    let deactivating: RwSignal<HashSet<i64>> = RwSignal::new(HashSet::new());

    let load_coupons = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_coupons().await {
                Ok(data) => set_coupons.set(data),
                Err(e) => {
                    log::error!("Failed to fetch coupons: {}", e);
                    set_error.set(Some("Failed to load coupons. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_coupons();
    });

    let filtered_coupons = Signal::derive(move || {
        let filter = status_filter.get();
        coupons
            .get()
            .into_iter()
            .filter(|coupon| match filter.as_str() {
                "active" => coupon.active,
                "inactive" => !coupon.active,
                _ => true,
            })
            .collect::<Vec<_>>()
    });

    let stats = Memo::new(move |_| {
        let data = coupons.get();
        let active = data.iter().filter(|c| c.active).count();
        let active_value: f64 = data.iter().filter(|c| c.active).map(|c| c.discount_amount).sum();
        (data.len(), active, active_value)
    });

    let create_coupon = move || {
        let code = new_code.get_untracked().trim().to_string();
        if code.is_empty() {
            set_form_error.set(Some("Coupon code is required".to_string()));
            return;
        }
        let amount: f64 = new_amount.get_untracked().trim().parse().unwrap_or(0.0);
        if amount <= 0.0 {
            set_form_error.set(Some("Discount amount must be greater than 0".to_string()));
            return;
        }

        set_creating.set(true);
        set_form_error.set(None);

        spawn_local(async move {
            let request = CreateCouponRequest { coupon_code: code, discount_amount: amount };
            match api::create_coupon(&request).await {
                Ok(_) => {
                    set_show_create_form.set(false);
                    set_new_code.set(String::new());
                    set_new_amount.set(String::new());
                    load_coupons();
                }
                Err(e) => {
                    log::error!("Failed to create coupon: {}", e);
                    set_form_error.set(Some("Failed to create coupon. Please try again.".to_string()));
                }
            }
            set_creating.set(false);
        });
    };

    let deactivate = move |coupon_id: i64| {
        deactivating.update(|set| {
            set.insert(coupon_id);
        });
        spawn_local(async move {
            match api::deactivate_coupon(coupon_id).await {
                Ok(_) => load_coupons(),
                Err(e) => {
                    log::error!("Failed to deactivate coupon {}: {}", coupon_id, e);
                }
            }
            deactivating.update(|set| {
                set.remove(&coupon_id);
            });
        });
    };

    let columns = vec![
        Column::new("couponCode", "Code", |c: &Coupon| c.coupon_code.clone())
            .render(|value, _| view! { <span class="cell-mono">{value}</span> }.into_any()),
        Column::new("discountAmount", "Discount", |c: &Coupon| format_inr(c.discount_amount))
            .render(|value, _| {
                view! { <span class="cell-strong">{format!("₹{}", value)}</span> }.into_any()
            }),
        Column::new("active", "Status", |c: &Coupon| c.active.to_string())
            .render(|_, c| {
                let (status, label) = if c.active { ("active", "Active") } else { ("inactive", "Inactive") };
                view! { <StatusBadge status=status>{label}</StatusBadge> }.into_any()
            }),
        Column::new("createdAt", "Created", |c: &Coupon| c.created_at.clone())
            .render(|value, _| view! { <span>{format_date(&value)}</span> }.into_any()),
        Column::new("id", "Actions", |c: &Coupon| c.id.to_string())
            .render(move |_, c| {
                if !c.active {
                    return view! { <span class="cell-muted">"\u{2014}"</span> }.into_any();
                }
                let coupon_id = c.id;
                let busy = deactivating.get().contains(&coupon_id);
                view! {
                    <button
                        class="btn-outline btn-sm btn-danger"
                        disabled=busy
                        on:click=move |_| deactivate(coupon_id)
                    >
                        {icon("x")}
                        "Deactivate"
                    </button>
                }
                .into_any()
            }),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Coupons"</h1>
                <div class="page__actions">
                    <select
                        class="select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="all" selected=move || status_filter.get() == "all">"All"</option>
                        <option value="active" selected=move || status_filter.get() == "active">"Active"</option>
                        <option value="inactive" selected=move || status_filter.get() == "inactive">"Inactive"</option>
                    </select>
                    <button
                        class="btn-primary"
                        on:click=move |_| set_show_create_form.update(|open| *open = !*open)
                    >
                        {icon("plus")}
                        "New Coupon"
                    </button>
                </div>
            </div>

            {move || {
                error.get().map(|err| {
                    view! { <div class="alert alert--error"><span>{err}</span></div> }
                })
            }}

            <Show when=move || show_create_form.get()>
                <div class="card card--form">
                    <h3 class="card__title">"Create Coupon"</h3>
                    {move || {
                        form_error.get().map(|err| {
                            view! { <div class="alert alert--error"><span>{err}</span></div> }
                        })
                    }}
                    <div class="form-row">
                        <div class="form-group">
                            <label for="coupon-code">"Coupon code"</label>
                            <input
                                type="text"
                                id="coupon-code"
                                placeholder="FESTIVE50"
                                prop:value=move || new_code.get()
                                on:input=move |ev| set_new_code.set(event_target_value(&ev))
                                disabled=move || creating.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="coupon-amount">"Discount amount"</label>
                            <input
                                type="number"
                                id="coupon-amount"
                                placeholder="50"
                                prop:value=move || new_amount.get()
                                on:input=move |ev| set_new_amount.set(event_target_value(&ev))
                                disabled=move || creating.get()
                            />
                        </div>
                        <button
                            class="btn-primary"
                            on:click=move |_| create_coupon()
                            disabled=move || creating.get()
                        >
                            {move || if creating.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </div>
            </Show>

            <div class="stat-grid stat-grid--3">
                <StatCard
                    label="Total Coupons".to_string()
                    icon_name="ticket".to_string()
                    value=Signal::derive(move || Some(stats.get().0 as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Active Coupons".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(stats.get().1 as f64))
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Good
                />
                <StatCard
                    label="Active Discount Value".to_string()
                    icon_name="rupee".to_string()
                    value=Signal::derive(move || Some(stats.get().2))
                    format=ValueFormat::Money
                />
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("ticket")}
                    "All Coupons"
                </h3>
                <DataTable
                    data=filtered_coupons
                    columns=columns
                    search_key="couponCode"
                    search_placeholder="Search by coupon code..."
                    loading=loading
                />
            </div>
        </div>
    }
}
