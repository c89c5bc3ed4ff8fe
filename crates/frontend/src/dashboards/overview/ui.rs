use chrono::Utc;
use contracts::domain::orders::OrderSummary;
use contracts::domain::products::Listing;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api as orders_api;
use crate::domain::recommendations::api as recommendations_api;
use crate::shared::components::data_table::{Column, DataTable};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

/// The quick metrics shown on the landing page. Computed from the raw order
/// feed without enrichment; revenue here is the delivery-fee sum over
/// delivered, non-cancelled orders.
#[derive(Clone, Copy, PartialEq, Default)]
struct OverviewStats {
    total: usize,
    pending: usize,
    completed: usize,
    cancelled: usize,
    revenue: f64,
    completion_rate: u32,
}

fn overview_stats(orders: &[OrderSummary]) -> OverviewStats {
    let mut stats = OverviewStats {
        total: orders.len(),
        ..OverviewStats::default()
    };

    for order in orders {
        if order.placed && !order.confirmed {
            stats.pending += 1;
        }
        if order.delivered {
            stats.completed += 1;
        }
        if order.cancelled {
            stats.cancelled += 1;
        }
        if order.delivered && !order.cancelled {
            stats.revenue += order.delivery_fee;
        }
    }

    if stats.total > 0 {
        stats.completion_rate =
            ((stats.completed as f64 / stats.total as f64) * 100.0).round() as u32;
    }

    stats
}

fn order_columns() -> Vec<Column<OrderSummary>> {
    vec![
        Column::new("orderId", "Order ID", |o: &OrderSummary| o.order_id.clone()),
        Column::new("customerUid", "Customer", |o: &OrderSummary| o.customer_uid.clone()),
        Column::new("payment_status", "Payment Status", |o: &OrderSummary| o.payment_status.clone())
            .render(|value, _| {
                let status = if value == "paid" { "completed" } else { "pending" };
                view! { <StatusBadge status=status>{value}</StatusBadge> }.into_any()
            }),
        Column::new("deliveryFee", "Amount", |o: &OrderSummary| format_inr(o.delivery_fee))
            .render(|value, _| view! { <span>{format!("₹{}", value)}</span> }.into_any()),
        Column::new("createdAt", "Date", |o: &OrderSummary| o.created_at.clone())
            .render(|value, _| view! { <span>{format_date(&value)}</span> }.into_any()),
    ]
}

fn recommendation_columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("item_name", "Product", |l: &Listing| l.item_name.clone()),
        Column::new("shop_name", "Shop", |l: &Listing| l.shop_name.clone()),
        Column::new("category", "Category", |l: &Listing| l.category.clone()),
        Column::new("final_price", "Price", |l: &Listing| format_inr(l.final_price))
            .render(|value, _| view! { <span>{format!("₹{}", value)}</span> }.into_any()),
        Column::new("isActive", "Status", |l: &Listing| l.is_active.to_string())
            .render(|_, l| {
                let (status, label) = if l.is_active { ("active", "Active") } else { ("inactive", "Inactive") };
                view! { <StatusBadge status=status>{label}</StatusBadge> }.into_any()
            }),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<OrderSummary>>(Vec::new());
    let (recommendations, set_recommendations) = signal::<Vec<Listing>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_dashboard = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let (orders_result, recommendations_result) = futures::future::join(
                orders_api::fetch_order_summaries(),
                recommendations_api::fetch_recommendations(0, 5),
            )
            .await;

            match (orders_result, recommendations_result) {
                (Ok(orders_data), Ok(recommendations_data)) => {
                    set_orders.set(orders_data);
                    set_recommendations.set(recommendations_data);
                }
                (orders_result, recommendations_result) => {
                    if let Err(e) = orders_result {
                        log::error!("Failed to fetch dashboard orders: {}", e);
                    }
                    if let Err(e) = recommendations_result {
                        log::error!("Failed to fetch dashboard recommendations: {}", e);
                    }
                    set_orders.set(Vec::new());
                    set_recommendations.set(Vec::new());
                    set_error.set(Some(
                        "Unable to connect to the server. Showing dashboard with no data.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_dashboard();
    });

    let stats = Memo::new(move |_| overview_stats(&orders.get()));
    let stat_value = move |pick: fn(&OverviewStats) -> f64| {
        Signal::derive(move || {
            if loading.get() {
                None
            } else {
                Some(pick(&stats.get()))
            }
        })
    };

    let recent_orders = Signal::derive(move || {
        orders.get().into_iter().take(10).collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard Overview"</h1>
                <span class="page__subtitle">
                    {format!("Last updated: {}", Utc::now().format("%d/%m/%Y %H:%M"))}
                </span>
            </div>

            {move || {
                error.get().map(|err| {
                    view! { <div class="alert alert--error"><span>{err}</span></div> }
                })
            }}

            <div class="stat-grid stat-grid--3">
                <StatCard
                    label="Total Orders".to_string()
                    icon_name="shopping-cart".to_string()
                    value=stat_value(|s| s.total as f64)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Pending Orders".to_string()
                    icon_name="clock".to_string()
                    value=stat_value(|s| s.pending as f64)
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Warning
                />
                <StatCard
                    label="Completed Orders".to_string()
                    icon_name="check-circle".to_string()
                    value=stat_value(|s| s.completed as f64)
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Good
                />
                <StatCard
                    label="Cancelled Orders".to_string()
                    icon_name="x-circle".to_string()
                    value=stat_value(|s| s.cancelled as f64)
                    format=ValueFormat::Integer
                    status=IndicatorStatus::Bad
                />
                <StatCard
                    label="Total Revenue".to_string()
                    icon_name="rupee".to_string()
                    value=stat_value(|s| s.revenue)
                    format=ValueFormat::Money
                    status=IndicatorStatus::Good
                />
                <StatCard
                    label="Completion Rate".to_string()
                    icon_name="trending-up".to_string()
                    value=stat_value(|s| s.completion_rate as f64)
                    format=ValueFormat::Percent
                />
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("package")}
                    "Recent Orders"
                </h3>
                <DataTable
                    data=recent_orders
                    columns=order_columns()
                    search_key="orderId"
                    search_placeholder="Search by order ID..."
                    paginated=false
                    loading=loading
                />
            </div>

            <div class="card">
                <h3 class="card__title">
                    {icon("star")}
                    "Recent Recommendations"
                </h3>
                <DataTable
                    data=recommendations
                    columns=recommendation_columns()
                    search_key="item_name"
                    search_placeholder="Search by product..."
                    paginated=false
                    loading=loading
                />
            </div>
        </div>
    }
}
