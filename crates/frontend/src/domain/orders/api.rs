use contracts::domain::orders::{enrich_orders, EnrichedOrder, OrderDetail, OrderSummary};

use crate::shared::api_utils::get_json;

/// Fetch the primary order feed. Failure here is fatal to the whole pass.
pub async fn fetch_order_summaries() -> Result<Vec<OrderSummary>, String> {
    get_json("/api/owner/orders/get").await
}

/// Fetch the detail record for one order. A missing record and any other
/// transport failure look the same at this layer.
pub async fn fetch_order_detail(order_id: &str) -> Result<OrderDetail, String> {
    get_json(&format!("/api/order_status/get/subOrders/{}", order_id)).await
}

/// Load the order feed and enrich every row with its detail record.
///
/// Detail requests run concurrently; a failure for one order is logged and
/// degrades only that row (absent detail, zero amount). Only the summary
/// fetch can fail the operation.
pub async fn load_enriched_orders() -> Result<Vec<EnrichedOrder>, String> {
    let summaries = fetch_order_summaries().await?;

    let enriched = enrich_orders(summaries, |order_id| async move {
        fetch_order_detail(&order_id).await.map_err(|err| {
            log::warn!("Failed to fetch details for order {}: {}", order_id, err);
            err
        })
    })
    .await;

    Ok(enriched)
}
