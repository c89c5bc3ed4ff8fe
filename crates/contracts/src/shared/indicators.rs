use serde::{Deserialize, Serialize};

/// How to format a stat card's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Rupee amount with Indian-system digit grouping.
    Money,
    Integer,
    Percent,
}

/// Visual status of an indicator (drives the card colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Warning,
    Neutral,
}
