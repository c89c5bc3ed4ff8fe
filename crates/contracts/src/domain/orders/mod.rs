pub mod aggregate;
pub mod enrich;
pub mod metrics;
pub mod status;

pub use aggregate::{EnrichedOrder, OrderDetail, OrderLine, OrderSummary};
pub use enrich::enrich_orders;
pub use metrics::OrderMetrics;
pub use status::{DerivedStatus, OrderStatus, ProgressStep};
