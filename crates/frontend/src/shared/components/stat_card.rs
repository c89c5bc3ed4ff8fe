use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::number_format::{format_inr, format_int};

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format!("₹{}", format_inr(val)),
        ValueFormat::Integer => format_int(val),
        ValueFormat::Percent => format!("{:.0}%", val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(optional, into)]
    status: Option<IndicatorStatus>,
) -> impl IntoView {
    let status_class = match status.unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
