use std::future::Future;

use futures::future::join_all;

use super::aggregate::{EnrichedOrder, OrderDetail, OrderSummary};

/// Enrich a batch of order summaries with their detail records.
///
/// One detail request per summary, all launched before any is awaited, so
/// their in-flight lifetimes overlap. Results are placed positionally:
/// output index `i` always corresponds to input index `i`, regardless of
/// completion order. A failed fetch degrades that slot to an absent detail
/// and a zero amount; it never fails the batch, is never retried, and does
/// not delay sibling slots beyond their own completion. The returned future
/// resolves only once every request has settled.
///
/// The transport stays outside: `fetch_detail` receives the order id and is
/// expected to log its own failures.
pub async fn enrich_orders<F, Fut, E>(summaries: Vec<OrderSummary>, fetch_detail: F) -> Vec<EnrichedOrder>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<OrderDetail, E>>,
{
    let requests: Vec<Fut> = summaries
        .iter()
        .map(|summary| fetch_detail(summary.order_id.clone()))
        .collect();

    let results = join_all(requests).await;

    summaries
        .into_iter()
        .zip(results)
        .map(|(summary, result)| EnrichedOrder::new(summary, result.ok()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::executor::block_on;

    use super::*;

    fn summary(order_id: &str) -> OrderSummary {
        OrderSummary {
            id: 1,
            owner_uid: "owner".to_string(),
            order_id: order_id.to_string(),
            driver_uid: None,
            customer_uid: "cust".to_string(),
            payment_status: "COD".to_string(),
            placed: true,
            confirmed: false,
            processed: false,
            shipped: false,
            delivered: false,
            cancelled: false,
            delivery_fee: 25.0,
            driver_payment: None,
            otp: "0000".to_string(),
            created_at: "2024-06-01T10:15:00Z".to_string(),
        }
    }

    fn detail(order_id: &str, cost: f64) -> OrderDetail {
        OrderDetail {
            id: 1,
            sub_order_id: order_id.to_string(),
            address_id: 10,
            owner_uid: "owner".to_string(),
            sub_order_cost: cost,
            otp: "0000".to_string(),
            total_items: 1,
            items: Vec::new(),
        }
    }

    /// Stays pending for `remaining` polls, so futures can be made to
    /// complete in any order relative to each other.
    struct YieldTimes {
        remaining: u32,
    }

    impl Future for YieldTimes {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.remaining == 0 {
                Poll::Ready(())
            } else {
                self.remaining -= 1;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[test]
    fn empty_batch_resolves_to_empty() {
        let enriched = block_on(enrich_orders(Vec::new(), |_id| async {
            Ok::<_, String>(detail("unused", 0.0))
        }));
        assert!(enriched.is_empty());
    }

    #[test]
    fn failed_slot_degrades_without_failing_the_batch() {
        let summaries = vec![summary("A"), summary("B"), summary("C")];

        let enriched = block_on(enrich_orders(summaries, |id| async move {
            if id == "B" {
                Err("HTTP error: 500".to_string())
            } else {
                Ok(detail(&id, 100.0))
            }
        }));

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].summary.order_id, "A");
        assert_eq!(enriched[0].actual_amount, 100.0);
        assert!(enriched[1].detail.is_none());
        assert_eq!(enriched[1].actual_amount, 0.0);
        assert_eq!(enriched[2].actual_amount, 100.0);
    }

    #[test]
    fn output_order_matches_input_order_despite_completion_order() {
        // Earlier slots are made to finish last.
        let summaries = vec![summary("first"), summary("second"), summary("third")];

        let enriched = block_on(enrich_orders(summaries, |id| async move {
            let delay = match id.as_str() {
                "first" => 8,
                "second" => 4,
                _ => 0,
            };
            YieldTimes { remaining: delay }.await;
            Ok::<_, String>(detail(&id, delay as f64))
        }));

        let ids: Vec<&str> = enriched.iter().map(|e| e.summary.order_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert_eq!(enriched[0].actual_amount, 8.0);
        assert_eq!(enriched[2].actual_amount, 0.0);
    }
}
