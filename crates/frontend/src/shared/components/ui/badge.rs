use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.as_str() {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Badge keyed by a canonical status identifier. "completed"/"active" render
/// green, "pending" amber, "processing" blue, "cancelled"/"inactive" red.
#[component]
pub fn StatusBadge(
    #[prop(into)] status: String,
    children: Children,
) -> impl IntoView {
    let status_class = match status.as_str() {
        "completed" | "active" => "badge badge--status badge--success",
        "pending" => "badge badge--status badge--warning",
        "processing" => "badge badge--status badge--primary",
        "cancelled" | "inactive" => "badge badge--status badge--error",
        _ => "badge badge--status badge--neutral",
    };

    view! {
        <span class=status_class>
            {children()}
        </span>
    }
}
