use serde::{Deserialize, Serialize};

use super::status::{self, OrderStatus};

/// One row of the primary order feed (`GET /api/owner/orders/get`).
///
/// Field names are pinned to the backend's wire format, including its
/// historical spellings (`confirmedd`, `cancelOrder`). The six progress
/// flags are not mutually exclusive: they form a forward-moving trail,
/// except `cancelled`, which can be set at any point and takes display
/// precedence over everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    #[serde(rename = "ownerUid")]
    pub owner_uid: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "driverUid", default)]
    pub driver_uid: Option<String>,
    #[serde(rename = "customerUid")]
    pub customer_uid: String,
    /// Payment mode reported by the backend, e.g. "COD" or "paid".
    pub payment_status: String,
    pub placed: bool,
    #[serde(rename = "confirmedd")]
    pub confirmed: bool,
    pub processed: bool,
    pub shipped: bool,
    pub delivered: bool,
    #[serde(rename = "cancelOrder")]
    pub cancelled: bool,
    #[serde(rename = "deliveryFee")]
    pub delivery_fee: f64,
    #[serde(default)]
    pub driver_payment: Option<String>,
    /// One-time code handed to the driver at delivery.
    pub otp: String,
    /// ISO-8601 creation timestamp, kept as a string and formatted client-side.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Secondary per-order record (`GET /api/order_status/get/subOrders/{id}`).
///
/// Zero-or-one per `OrderSummary`; a failed fetch is a valid state, not a
/// batch error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    #[serde(rename = "subOrderId")]
    pub sub_order_id: String,
    #[serde(rename = "addressId")]
    pub address_id: i64,
    #[serde(rename = "ownerUid")]
    pub owner_uid: String,
    #[serde(rename = "subOrderCost")]
    pub sub_order_cost: f64,
    pub otp: String,
    #[serde(rename = "totalItems")]
    pub total_items: i64,
    pub items: Vec<OrderLine>,
}

/// A single line item inside an [`OrderDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    #[serde(rename = "ownerUid")]
    pub owner_uid: String,
    pub category: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    #[serde(rename = "shopName")]
    pub shop_name: String,
    /// Unit price as reported by the backend (string on the wire).
    pub price: String,
    /// Discount descriptor such as "10%"; "0%" means none.
    pub discount: String,
    pub count: i64,
    #[serde(rename = "finalPrice")]
    pub final_price: f64,
    #[serde(rename = "itemId")]
    pub item_id: String,
    /// Image URL, possibly empty.
    #[serde(default)]
    pub image: String,
}

/// Summary plus whatever detail the enrichment pass could fetch for it,
/// with the derived amount and canonical status baked in. Built once per
/// pass and discarded on the next refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedOrder {
    pub summary: OrderSummary,
    pub detail: Option<OrderDetail>,
    /// Cost total from the detail record, or 0 when the detail is absent.
    pub actual_amount: f64,
    pub status: OrderStatus,
    pub status_label: &'static str,
}

impl EnrichedOrder {
    pub fn new(summary: OrderSummary, detail: Option<OrderDetail>) -> Self {
        let derived = status::derive(&summary);
        let actual_amount = detail.as_ref().map(|d| d.sub_order_cost).unwrap_or(0.0);
        Self {
            summary,
            detail,
            actual_amount,
            status: derived.status,
            status_label: derived.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "id": 7,
            "ownerUid": "owner-1",
            "orderId": "ORD-1001",
            "customerUid": "cust-9",
            "payment_status": "COD",
            "placed": true,
            "confirmedd": true,
            "processed": false,
            "shipped": false,
            "delivered": false,
            "cancelOrder": false,
            "deliveryFee": 40.0,
            "otp": "4821",
            "createdAt": "2024-06-01T10:15:00Z"
        }"#;

        let summary: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.order_id, "ORD-1001");
        assert!(summary.confirmed);
        assert!(!summary.cancelled);
        assert_eq!(summary.driver_uid, None);
        assert_eq!(summary.delivery_fee, 40.0);
    }

    #[test]
    fn enriched_amount_falls_back_to_zero() {
        let summary: OrderSummary = serde_json::from_str(
            r#"{
                "id": 1,
                "ownerUid": "o",
                "orderId": "ORD-1",
                "customerUid": "c",
                "payment_status": "paid",
                "placed": true,
                "confirmedd": false,
                "processed": false,
                "shipped": false,
                "delivered": false,
                "cancelOrder": false,
                "deliveryFee": 10.0,
                "otp": "0000",
                "createdAt": "2024-06-01T10:15:00Z"
            }"#,
        )
        .unwrap();

        let enriched = EnrichedOrder::new(summary, None);
        assert_eq!(enriched.actual_amount, 0.0);
        assert!(enriched.detail.is_none());
        assert_eq!(enriched.status_label, "Placed");
    }
}
