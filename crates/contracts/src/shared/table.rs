//! Client-side tabular view engine: search filtering plus fixed-size
//! pagination over an already-loaded record collection. Pure and
//! UI-independent; the frontend `DataTable` component drives it.

/// Page size applied when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A filtered, paginated slice of a source collection, recomputed whenever
/// the source data, search term or page index changes. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    /// Records on the requested page, in source order.
    pub rows: Vec<T>,
    /// Records matching the filter across all pages.
    pub total_count: usize,
    /// Zero when the filtered collection is empty.
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T: Clone> TableView<T> {
    /// Build the view for one (data, search, page) combination.
    ///
    /// Filtering keeps records whose stringified search-key value contains
    /// the lower-cased term as a substring; an empty term keeps everything.
    /// A page index past the last page yields an empty page, not an error.
    /// Callers are expected to reset the page index to 0 whenever the term
    /// changes.
    pub fn build<K>(rows: &[T], search: &str, key: K, page: usize, page_size: usize) -> Self
    where
        K: Fn(&T) -> String,
    {
        let page_size = page_size.max(1);
        let term = search.trim().to_lowercase();

        let filtered: Vec<T> = if term.is_empty() {
            rows.to_vec()
        } else {
            rows.iter()
                .filter(|row| key(row).to_lowercase().contains(&term))
                .cloned()
                .collect()
        };

        let total_count = filtered.len();
        let total_pages = total_count.div_ceil(page_size);

        let start = page.saturating_mul(page_size);
        let rows = if start < total_count {
            let end = (start + page_size).min(total_count);
            filtered[start..end].to_vec()
        } else {
            Vec::new()
        };

        Self { rows, total_count, total_pages, page, page_size }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("ORD-{:03}", i)).collect()
    }

    #[test]
    fn empty_term_keeps_everything() {
        let data = rows(4);
        let view = TableView::build(&data, "", |r| r.clone(), 0, DEFAULT_PAGE_SIZE);
        assert_eq!(view.total_count, 4);
        assert_eq!(view.rows.len(), 4);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let data = vec!["ORD-ABC-1".to_string(), "ORD-XYZ-2".to_string(), "ord-abc-3".to_string()];
        let view = TableView::build(&data, "ABC", |r| r.clone(), 0, DEFAULT_PAGE_SIZE);
        assert_eq!(view.total_count, 2);
        assert_eq!(view.rows, vec!["ORD-ABC-1".to_string(), "ord-abc-3".to_string()]);
    }

    #[test]
    fn pages_split_23_records_into_10_10_3() {
        let data = rows(23);

        let first = TableView::build(&data, "", |r| r.clone(), 0, 10);
        let second = TableView::build(&data, "", |r| r.clone(), 1, 10);
        let third = TableView::build(&data, "", |r| r.clone(), 2, 10);

        assert_eq!(first.total_pages, 3);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(second.rows.len(), 10);
        assert_eq!(third.rows.len(), 3);
        assert_eq!(third.rows[0], "ORD-020");

        assert!(!first.has_previous_page());
        assert!(first.has_next_page());
        assert!(third.has_previous_page());
        assert!(!third.has_next_page());
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let data = rows(23);
        let view = TableView::build(&data, "", |r| r.clone(), 7, 10);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_count, 23);
        assert!(!view.has_next_page());
    }

    #[test]
    fn no_matches_yields_zero_pages() {
        let data = rows(5);
        let view = TableView::build(&data, "missing", |r| r.clone(), 0, 10);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(!view.has_next_page());
        assert!(!view.has_previous_page());
    }
}
