use std::sync::Arc;

use contracts::shared::table::{TableView, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;

use super::pagination_controls::PaginationControls;
use super::search_input::SearchInput;

/// Describes one table column: a key into the row type, a header label, a
/// stringifying accessor used for default cells and search filtering, and
/// an optional custom renderer invoked with `(stringified value, full row)`.
/// Renderers never mutate the row.
#[derive(Clone)]
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    value: Arc<dyn Fn(&T) -> String + Send + Sync>,
    render: Option<Arc<dyn Fn(String, &T) -> AnyView + Send + Sync>>,
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            value: Arc::new(value),
            render: None,
        }
    }

    /// Attach a custom cell renderer.
    pub fn render(mut self, render: impl Fn(String, &T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn text(&self, row: &T) -> String {
        (self.value)(row)
    }

    fn cell(&self, row: &T) -> AnyView {
        let value = (self.value)(row);
        match &self.render {
            Some(render) => render(value, row),
            None => view! { <span>{value}</span> }.into_any(),
        }
    }

    fn accessor(&self) -> Arc<dyn Fn(&T) -> String + Send + Sync> {
        self.value.clone()
    }
}

/// Generic data table: client-side search over one column plus fixed-size
/// pagination, with per-cell rendering delegated to the column list.
///
/// The search term and page index live here; the filtered slice itself is
/// computed by [`TableView`]. Changing the term resets the page to 0, so the
/// view can never be left on an out-of-range page. While `loading` is true a
/// placeholder row is shown instead of (possibly stale) data rows.
#[component]
pub fn DataTable<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    /// Key of the column to search by; no search box when absent
    #[prop(optional, into)] search_key: Option<&'static str>,
    #[prop(optional, into)] search_placeholder: String,
    /// Rows per page; engine default when absent
    #[prop(optional, into)] page_size: Option<usize>,
    /// Client-side pagination toggle (callers with server-side paging turn it off)
    #[prop(default = true)] paginated: bool,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(0usize);

    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let search_accessor = search_key
        .and_then(|key| columns.iter().find(|c| c.key == key))
        .map(|c| c.accessor());
    let searchable = search_accessor.is_some();

    let view_state = Memo::new(move |_| {
        let rows = data.get();
        // Unpaginated tables are a single page holding everything.
        let size = if paginated { page_size } else { rows.len().max(1) };
        let current = if paginated { page.get() } else { 0 };
        match &search_accessor {
            Some(key) => {
                let key = key.clone();
                TableView::build(&rows, &search.get(), move |row| key(row), current, size)
            }
            None => TableView::build(&rows, "", |_| String::new(), current, size),
        }
    });

    let on_search = Callback::new(move |term: String| {
        set_search.set(term);
        set_page.set(0);
    });

    let header_cells = columns
        .iter()
        .map(|c| view! { <th>{c.label}</th> })
        .collect_view();
    let column_count = columns.len();

    let body_rows = move || {
        if loading.get() {
            return view! {
                <tr class="data-table__placeholder">
                    <td colspan=column_count.to_string()>"Loading..."</td>
                </tr>
            }
            .into_any();
        }

        let state = view_state.get();
        if state.is_empty() {
            return view! {
                <tr class="data-table__empty">
                    <td colspan=column_count.to_string()>"No results found"</td>
                </tr>
            }
            .into_any();
        }

        state
            .rows
            .into_iter()
            .map(|row| {
                let cells = columns
                    .iter()
                    .map(|col| view! { <td>{col.cell(&row)}</td> })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="data-table">
            {searchable.then(|| view! {
                <div class="data-table__search">
                    <SearchInput value=search on_change=on_search placeholder=search_placeholder />
                </div>
            })}
            <div class="table-container">
                <table class="table__data">
                    <thead>
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody>{body_rows}</tbody>
                </table>
            </div>
            {paginated.then(|| view! {
                <PaginationControls
                    current_page=Signal::derive(move || view_state.get().page)
                    total_pages=Signal::derive(move || view_state.get().total_pages)
                    total_count=Signal::derive(move || view_state.get().total_count)
                    has_previous=Signal::derive(move || view_state.get().has_previous_page())
                    has_next=Signal::derive(move || view_state.get().has_next_page())
                    on_page_change=Callback::new(move |p: usize| set_page.set(p))
                />
            })}
        </div>
    }
}
