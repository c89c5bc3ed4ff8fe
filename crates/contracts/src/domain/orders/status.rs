use serde::{Deserialize, Serialize};

use super::aggregate::OrderSummary;

/// Canonical order state. Exactly one applies to any flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Cancelled,
    Completed,
    Processing,
    Pending,
    Inactive,
}

impl OrderStatus {
    /// Stable lowercase identifier, used by status badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
            OrderStatus::Processing => "processing",
            OrderStatus::Pending => "pending",
            OrderStatus::Inactive => "inactive",
        }
    }
}

/// Canonical status together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStatus {
    pub status: OrderStatus,
    pub label: &'static str,
}

/// One step of the five-step fulfilment trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStep {
    pub key: &'static str,
    pub label: &'static str,
    pub completed: bool,
}

/// Derive the canonical status from an order's progress flags.
///
/// Evaluated top to bottom, first match wins. Later fulfilment stages
/// override earlier ones; cancellation overrides everything, no matter
/// which other flags are set. Total: every input maps to a status, with
/// no flags at all resolving to `Inactive` / "Unknown".
pub fn derive(order: &OrderSummary) -> DerivedStatus {
    if order.cancelled {
        return DerivedStatus { status: OrderStatus::Cancelled, label: "Cancelled" };
    }
    if order.delivered {
        return DerivedStatus { status: OrderStatus::Completed, label: "Delivered" };
    }
    if order.shipped {
        return DerivedStatus { status: OrderStatus::Processing, label: "Shipped" };
    }
    if order.processed {
        return DerivedStatus { status: OrderStatus::Processing, label: "Processed" };
    }
    if order.confirmed {
        return DerivedStatus { status: OrderStatus::Processing, label: "Confirmed" };
    }
    if order.placed {
        return DerivedStatus { status: OrderStatus::Pending, label: "Placed" };
    }
    DerivedStatus { status: OrderStatus::Inactive, label: "Unknown" }
}

/// The five fulfilment steps with each step's own completion flag.
///
/// Deliberately not collapsed through the priority rule: a shipped order
/// shows steps 1-4 complete and step 5 incomplete even though its
/// canonical label is "Shipped".
pub fn progress_trail(order: &OrderSummary) -> Vec<ProgressStep> {
    vec![
        ProgressStep { key: "placed", label: "Placed", completed: order.placed },
        ProgressStep { key: "confirmed", label: "Confirmed", completed: order.confirmed },
        ProgressStep { key: "processed", label: "Processed", completed: order.processed },
        ProgressStep { key: "shipped", label: "Shipped", completed: order.shipped },
        ProgressStep { key: "delivered", label: "Delivered", completed: order.delivered },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(
        placed: bool,
        confirmed: bool,
        processed: bool,
        shipped: bool,
        delivered: bool,
        cancelled: bool,
    ) -> OrderSummary {
        OrderSummary {
            id: 1,
            owner_uid: "owner".to_string(),
            order_id: "ORD-1".to_string(),
            driver_uid: None,
            customer_uid: "cust".to_string(),
            payment_status: "COD".to_string(),
            placed,
            confirmed,
            processed,
            shipped,
            delivered,
            cancelled,
            delivery_fee: 0.0,
            driver_payment: None,
            otp: "0000".to_string(),
            created_at: "2024-06-01T10:15:00Z".to_string(),
        }
    }

    #[test]
    fn priority_order_first_match_wins() {
        let cases = [
            (summary(true, true, true, true, true, true), OrderStatus::Cancelled, "Cancelled"),
            (summary(true, true, true, true, true, false), OrderStatus::Completed, "Delivered"),
            (summary(true, true, true, true, false, false), OrderStatus::Processing, "Shipped"),
            (summary(true, true, true, false, false, false), OrderStatus::Processing, "Processed"),
            (summary(true, true, false, false, false, false), OrderStatus::Processing, "Confirmed"),
            (summary(true, false, false, false, false, false), OrderStatus::Pending, "Placed"),
            (summary(false, false, false, false, false, false), OrderStatus::Inactive, "Unknown"),
        ];

        for (order, status, label) in cases {
            let derived = derive(&order);
            assert_eq!(derived.status, status);
            assert_eq!(derived.label, label);
        }
    }

    #[test]
    fn cancelled_wins_over_delivered() {
        let derived = derive(&summary(true, false, false, false, true, true));
        assert_eq!(derived.status, OrderStatus::Cancelled);
        assert_eq!(derived.label, "Cancelled");
    }

    #[test]
    fn trail_is_independent_of_canonical_status() {
        let order = summary(true, true, true, true, false, false);
        assert_eq!(derive(&order).label, "Shipped");

        let steps = progress_trail(&order);
        assert_eq!(steps.len(), 5);
        let completed: Vec<bool> = steps.iter().map(|s| s.completed).collect();
        assert_eq!(completed, vec![true, true, true, true, false]);
    }

    #[test]
    fn trail_keeps_every_step_for_cancelled_orders() {
        let order = summary(true, true, false, false, true, true);
        let steps = progress_trail(&order);
        let completed: Vec<bool> = steps.iter().map(|s| s.completed).collect();
        assert_eq!(completed, vec![true, true, false, false, true]);
    }
}
