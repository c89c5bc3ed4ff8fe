use leptos::prelude::*;

use crate::shared::icons::icon;

/// Reusable pagination controls driven by the table view flags.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of filtered records
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || !has_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("Page {} of {} ({} records)", page + 1, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || !has_next.get()
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
