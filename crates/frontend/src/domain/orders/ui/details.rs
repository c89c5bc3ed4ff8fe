use contracts::domain::orders::{status, EnrichedOrder};
use leptos::prelude::*;

use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::number_format::format_inr;

/// Full-page detail view for one enriched order: summary grid, the five-step
/// fulfilment trail, and the line items from the detail record.
#[component]
pub fn OrderDetailView(order: EnrichedOrder, on_close: Callback<()>) -> impl IntoView {
    let summary = order.summary.clone();
    let steps = status::progress_trail(&summary);
    let step_count = steps.len();

    let trail = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let dot_class = if step.completed {
                "progress-step__dot progress-step__dot--done"
            } else {
                "progress-step__dot"
            };
            let label_class = if step.completed {
                "progress-step__label progress-step__label--done"
            } else {
                "progress-step__label"
            };
            let connector = (index + 1 < step_count).then(|| {
                let class = if step.completed {
                    "progress-step__connector progress-step__connector--done"
                } else {
                    "progress-step__connector"
                };
                view! { <div class=class></div> }
            });

            view! {
                <div class="progress-step">
                    <div class=dot_class></div>
                    <span class=label_class>{step.label}</span>
                    {connector}
                </div>
            }
        })
        .collect_view();

    let detail_section = match order.detail.clone() {
        Some(detail) => {
            let items = detail
                .items
                .iter()
                .map(|item| {
                    let thumbnail = if item.image.is_empty() {
                        view! { <div class="order-item__image order-item__image--empty">{icon("package")}</div> }
                            .into_any()
                    } else {
                        view! { <img class="order-item__image" src=item.image.clone() alt=item.item_name.clone() /> }
                            .into_any()
                    };
                    let discount = (item.discount != "0%").then(|| {
                        view! {
                            <span class="order-item__discount">{format!("({} off)", item.discount)}</span>
                        }
                    });

                    view! {
                        <div class="order-item">
                            {thumbnail}
                            <div class="order-item__body">
                                <div class="order-item__name">{item.item_name.clone()}</div>
                                <div class="order-item__shop">{item.shop_name.clone()}</div>
                                <div class="order-item__qty">
                                    {format!("Qty: {} × ₹{}", item.count, item.price)}
                                    {discount}
                                </div>
                            </div>
                            <div class="order-item__price">{format!("₹{}", format_inr(item.final_price))}</div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="detail-body">
                    <div class="detail-facts">
                        <div class="detail-facts__item">
                            <div class="detail-facts__label">"OTP"</div>
                            <div class="detail-facts__value cell-mono">{summary.otp.clone()}</div>
                        </div>
                        <div class="detail-facts__item">
                            <div class="detail-facts__label">"Delivery Fee"</div>
                            <div class="detail-facts__value">{format!("₹{}", format_inr(summary.delivery_fee))}</div>
                        </div>
                        <div class="detail-facts__item">
                            <div class="detail-facts__label">"Total Items"</div>
                            <div class="detail-facts__value">{detail.total_items.to_string()}</div>
                        </div>
                    </div>

                    <div class="order-items">
                        <h4 class="order-items__title">"Order Items"</h4>
                        {items}
                    </div>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="detail-missing">"No order details available"</div>
        }
        .into_any(),
    };

    let amount = order
        .detail
        .as_ref()
        .map(|d| format!("₹{}", format_inr(d.sub_order_cost)))
        .unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <div class="page">
            <div class="page__header">
                <button class="btn-outline" on:click=move |_| on_close.run(())>
                    {icon("chevron-left")}
                    "Back to orders"
                </button>
                <h1 class="page__title">{format!("Order Details - {}", summary.order_id)}</h1>
            </div>

            <div class="card">
                <div class="detail-grid">
                    <div class="detail-grid__item">
                        <div class="detail-grid__label">"Order ID"</div>
                        <div class="detail-grid__value cell-mono">{summary.order_id.clone()}</div>
                    </div>
                    <div class="detail-grid__item">
                        <div class="detail-grid__label">"Customer"</div>
                        <div class="detail-grid__value cell-truncate">{summary.customer_uid.clone()}</div>
                    </div>
                    <div class="detail-grid__item">
                        <div class="detail-grid__label">"Payment"</div>
                        <Badge variant="neutral">{summary.payment_status.clone()}</Badge>
                    </div>
                    <div class="detail-grid__item">
                        <div class="detail-grid__label">"Total Amount"</div>
                        <div class="detail-grid__value detail-grid__value--strong">{amount}</div>
                    </div>
                    <div class="detail-grid__item">
                        <div class="detail-grid__label">"Status"</div>
                        <StatusBadge status=order.status.as_str()>{order.status_label}</StatusBadge>
                    </div>
                </div>

                <div class="detail-progress">
                    <div class="detail-progress__title">"Order Progress"</div>
                    <div class="detail-progress__steps">{trail}</div>
                </div>

                {detail_section}
            </div>
        </div>
    }
}
