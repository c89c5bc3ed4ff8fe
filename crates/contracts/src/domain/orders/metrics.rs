use super::aggregate::EnrichedOrder;

/// Summary statistics over one enriched batch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderMetrics {
    pub total: usize,
    /// Placed but not yet confirmed, excluding cancelled orders.
    pub pending: usize,
    /// Shipped but not yet delivered, excluding cancelled orders.
    pub in_transit: usize,
    /// Every delivered order. Cancellation does not remove an order from
    /// this count, even though the canonical status treats cancellation as
    /// overriding; the backend dashboard has always counted it this way.
    pub completed: usize,
    pub cancelled: usize,
    /// Sum of actual amounts over non-cancelled orders.
    pub total_revenue: f64,
    pub average_order_value: f64,
    /// Completed share of the batch, rounded to whole percent.
    pub completion_rate: u32,
}

/// Reduce an enriched batch into [`OrderMetrics`].
///
/// Single pass, order-independent; an empty batch yields all zeros rather
/// than dividing by zero.
pub fn aggregate(orders: &[EnrichedOrder]) -> OrderMetrics {
    let mut metrics = OrderMetrics {
        total: orders.len(),
        ..OrderMetrics::default()
    };

    for order in orders {
        let summary = &order.summary;
        if summary.placed && !summary.confirmed && !summary.cancelled {
            metrics.pending += 1;
        }
        if summary.shipped && !summary.delivered && !summary.cancelled {
            metrics.in_transit += 1;
        }
        if summary.delivered {
            metrics.completed += 1;
        }
        if summary.cancelled {
            metrics.cancelled += 1;
        } else {
            metrics.total_revenue += order.actual_amount;
        }
    }

    if metrics.total > 0 {
        metrics.average_order_value = metrics.total_revenue / metrics.total as f64;
        metrics.completion_rate =
            ((metrics.completed as f64 / metrics.total as f64) * 100.0).round() as u32;
    }

    metrics
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::super::aggregate::{OrderDetail, OrderSummary};
    use super::super::enrich::enrich_orders;
    use super::super::status::OrderStatus;
    use super::*;

    fn summary(order_id: &str, flags: [bool; 6], delivery_fee: f64) -> OrderSummary {
        let [placed, confirmed, processed, shipped, delivered, cancelled] = flags;
        OrderSummary {
            id: 1,
            owner_uid: "owner".to_string(),
            order_id: order_id.to_string(),
            driver_uid: None,
            customer_uid: "cust".to_string(),
            payment_status: "COD".to_string(),
            placed,
            confirmed,
            processed,
            shipped,
            delivered,
            cancelled,
            delivery_fee,
            driver_payment: None,
            otp: "0000".to_string(),
            created_at: "2024-06-01T10:15:00Z".to_string(),
        }
    }

    fn enriched(order_id: &str, flags: [bool; 6], amount: f64) -> EnrichedOrder {
        let detail = OrderDetail {
            id: 1,
            sub_order_id: order_id.to_string(),
            address_id: 10,
            owner_uid: "owner".to_string(),
            sub_order_cost: amount,
            otp: "0000".to_string(),
            total_items: 1,
            items: Vec::new(),
        };
        EnrichedOrder::new(summary(order_id, flags, 0.0), Some(detail))
    }

    #[test]
    fn empty_batch_yields_zeros() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics, OrderMetrics::default());
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut orders = vec![
            enriched("A", [true, false, false, false, false, false], 10.0),
            enriched("B", [true, true, true, true, false, false], 20.0),
            enriched("C", [true, true, true, true, true, false], 30.0),
            enriched("D", [true, false, false, false, false, true], 40.0),
        ];

        let forward = aggregate(&orders);
        orders.reverse();
        let backward = aggregate(&orders);
        orders.rotate_left(2);
        let rotated = aggregate(&orders);

        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
        assert_eq!(forward.pending, 1);
        assert_eq!(forward.in_transit, 1);
        assert_eq!(forward.total_revenue, 60.0);
    }

    #[test]
    fn delivered_and_cancelled_counts_in_both_statistics() {
        let orders = vec![enriched("A", [true, true, true, true, true, true], 75.0)];
        let metrics = aggregate(&orders);

        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.cancelled, 1);
        // Revenue still excludes the cancelled order.
        assert_eq!(metrics.total_revenue, 0.0);
    }

    #[test]
    fn enrich_then_aggregate_scenario() {
        let summaries = vec![
            summary("A", [true, false, false, false, false, true], 50.0),
            summary("B", [false, false, false, false, true, false], 100.0),
        ];

        let enriched = block_on(enrich_orders(summaries, |id| async move {
            if id == "A" {
                Err("HTTP error: 404".to_string())
            } else {
                Ok(OrderDetail {
                    id: 2,
                    sub_order_id: id,
                    address_id: 11,
                    owner_uid: "owner".to_string(),
                    sub_order_cost: 120.0,
                    otp: "0000".to_string(),
                    total_items: 3,
                    items: Vec::new(),
                })
            }
        }));

        assert_eq!(enriched[0].status, OrderStatus::Cancelled);
        assert_eq!(enriched[0].actual_amount, 0.0);
        assert_eq!(enriched[1].status, OrderStatus::Completed);
        assert_eq!(enriched[1].actual_amount, 120.0);

        let metrics = aggregate(&enriched);
        assert_eq!(metrics.total, 2);
        assert_eq!(metrics.cancelled, 1);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.total_revenue, 120.0);
        assert_eq!(metrics.average_order_value, 60.0);
        assert_eq!(metrics.completion_rate, 50);
    }
}
