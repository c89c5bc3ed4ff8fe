use contracts::domain::orders::{metrics, EnrichedOrder};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::domain::orders::ui::details::OrderDetailView;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

fn order_columns(set_selected: WriteSignal<Option<EnrichedOrder>>) -> Vec<Column<EnrichedOrder>> {
    vec![
        Column::new("orderId", "Order ID", |o: &EnrichedOrder| o.summary.order_id.clone())
            .render(|value, _| view! { <span class="cell-mono">{value}</span> }.into_any()),
        Column::new("customerUid", "Customer", |o: &EnrichedOrder| o.summary.customer_uid.clone())
            .render(|value, _| view! { <span class="cell-truncate">{value}</span> }.into_any()),
        Column::new("payment_status", "Payment", |o: &EnrichedOrder| o.summary.payment_status.clone())
            .render(|value, _| {
                let status = if value == "COD" { "pending" } else { "completed" };
                view! { <StatusBadge status=status>{value}</StatusBadge> }.into_any()
            }),
        Column::new("actualAmount", "Amount", |o: &EnrichedOrder| format_inr(o.actual_amount))
            .render(|value, _| {
                view! { <span class="cell-strong">{format!("₹{}", value)}</span> }.into_any()
            }),
        Column::new("createdAt", "Date", |o: &EnrichedOrder| o.summary.created_at.clone())
            .render(|value, _| {
                view! {
                    <div class="cell-datetime">
                        <div>{format_date(&value)}</div>
                        <div class="cell-datetime__time">{format_time(&value)}</div>
                    </div>
                }
                .into_any()
            }),
        Column::new("status", "Status", |o: &EnrichedOrder| o.status_label.to_string())
            .render(|_, o| {
                let status = o.status.as_str();
                let status_label = o.status_label;
                view! {
                    <StatusBadge status=status>{status_label}</StatusBadge>
                }
                .into_any()
            }),
        Column::new("actions", "Actions", |_: &EnrichedOrder| String::new())
            .render(move |_, o| {
                let order = o.clone();
                view! {
                    <button
                        class="btn-outline btn-sm"
                        on:click=move |_| set_selected.set(Some(order.clone()))
                    >
                        {icon("eye")}
                        "View Details"
                    </button>
                }
                .into_any()
            }),
    ]
}

/// Orders management page: metrics over the enriched batch plus the
/// searchable order table. A refresh starts a fresh enrichment pass;
/// results of a superseded pass are discarded when a newer one exists.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<EnrichedOrder>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<Option<EnrichedOrder>>(None);

    let pass_counter = StoredValue::new(0u32);

    let load_orders = move || {
        let pass = pass_counter.get_value() + 1;
        pass_counter.set_value(pass);

        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let result = api::load_enriched_orders().await;

            // A newer refresh supersedes this pass entirely.
            if pass_counter.get_value() != pass {
                return;
            }

            match result {
                Ok(data) => {
                    set_orders.set(data);
                }
                Err(e) => {
                    log::error!("Failed to fetch orders: {}", e);
                    set_error.set(Some("Failed to load orders. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_orders();
    });

    let stats = Memo::new(move |_| metrics::aggregate(&orders.get()));

    let columns = order_columns(set_selected);

    view! {
        {move || {
            if let Some(order) = selected.get() {
                return view! {
                    <OrderDetailView
                        order=order
                        on_close=Callback::new(move |_| set_selected.set(None))
                    />
                }
                .into_any();
            }

            let columns = columns.clone();
            view! {
                <div class="page">
                    <div class="page__header">
                        <h1 class="page__title">"Orders Management"</h1>
                        <button
                            class="btn-primary"
                            on:click=move |_| load_orders()
                            disabled=move || loading.get()
                        >
                            {move || if loading.get() { "Loading..." } else { "Refresh" }}
                        </button>
                    </div>

                    {move || {
                        error.get().map(|err| {
                            view! {
                                <div class="alert alert--error">
                                    <span>{err}</span>
                                    <button class="btn-outline btn-sm" on:click=move |_| load_orders()>
                                        "Retry"
                                    </button>
                                </div>
                            }
                        })
                    }}

                    <div class="stat-grid stat-grid--4">
                        <StatCard
                            label="Total Orders".to_string()
                            icon_name="shopping-cart".to_string()
                            value=Signal::derive(move || Some(stats.get().total as f64))
                            format=ValueFormat::Integer
                        />
                        <StatCard
                            label="Pending Orders".to_string()
                            icon_name="clock".to_string()
                            value=Signal::derive(move || Some(stats.get().pending as f64))
                            format=ValueFormat::Integer
                            status=IndicatorStatus::Warning
                        />
                        <StatCard
                            label="In Transit".to_string()
                            icon_name="truck".to_string()
                            value=Signal::derive(move || Some(stats.get().in_transit as f64))
                            format=ValueFormat::Integer
                        />
                        <StatCard
                            label="Completed".to_string()
                            icon_name="check-circle".to_string()
                            value=Signal::derive(move || Some(stats.get().completed as f64))
                            format=ValueFormat::Integer
                            status=IndicatorStatus::Good
                        />
                    </div>

                    <div class="card-grid card-grid--2">
                        <div class="card">
                            <h3 class="card__title">"Revenue Overview"</h3>
                            <div class="card__rows">
                                <div class="card__row">
                                    <span class="card__row-label">"Total Revenue"</span>
                                    <span class="card__row-value card__row-value--success">
                                        {move || format!("₹{}", format_inr(stats.get().total_revenue))}
                                    </span>
                                </div>
                                <div class="card__row">
                                    <span class="card__row-label">"Average Order Value"</span>
                                    <span class="card__row-value">
                                        {move || format!("₹{}", format_inr(stats.get().average_order_value))}
                                    </span>
                                </div>
                            </div>
                        </div>
                        <div class="card">
                            <h3 class="card__title">"Order Statistics"</h3>
                            <div class="card__rows">
                                <div class="card__row">
                                    <span class="card__row-label">"Completion Rate"</span>
                                    <span class="card__row-value">
                                        {move || format!("{}%", stats.get().completion_rate)}
                                    </span>
                                </div>
                                <div class="card__row">
                                    <span class="card__row-label">"Cancelled Orders"</span>
                                    <span class="card__row-value card__row-value--error">
                                        {move || stats.get().cancelled.to_string()}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">
                            {icon("shopping-cart")}
                            "All Orders"
                        </h3>
                        <DataTable
                            data=orders
                            columns=columns
                            search_key="orderId"
                            search_placeholder="Search by order ID..."
                            loading=loading
                        />
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
