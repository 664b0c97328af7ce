//! In-memory list filtering and pagination.
//!
//! Every table view fetches its collection once and then derives a
//! filtered, paginated view entirely in memory; no server-side query
//! parameters are involved. `Listing` owns that derivation so each view
//! gets identical search, filter, and paging semantics.

/// Rows per page across all table views.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A record that can participate in free-text search and status filtering.
pub trait Filterable {
    /// Text fields included in the free-text search. Missing values are
    /// simply omitted; callers never see `None` here.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared (exact equality) against the optional status filter.
    /// `None` means the record type has no filterable status.
    fn filter_key(&self) -> Option<String>;
}

/// A filtered, paginated view over an already-fetched sequence.
///
/// Invariants:
/// - Changing the query or the status filter resets the page to 1, so the
///   view never lands on an out-of-range empty page.
/// - `go_to_page` is a no-op outside `[1, total_pages]`.
/// - No I/O: filtering and paging only ever touch the fetched items.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    query: String,
    status_filter: Option<String>,
    page: usize,
    page_size: usize,
}

impl<T: Filterable> Listing<T> {
    /// Creates a listing over `items` with the default page size.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            query: String::new(),
            status_filter: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the page size after construction.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        self.page_size = page_size;
        self
    }

    /// Replaces the fetched items, keeping query and filter but resetting
    /// the page (a refetch behaves like a fresh view).
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
    }

    /// Sets the free-text query and resets to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Sets or clears the equality status filter and resets to page 1.
    pub fn set_status_filter(&mut self, filter: Option<String>) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// The current free-text query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current status filter, if any.
    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    /// Number of fetched items before filtering.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the fetched sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn matches(&self, item: &T) -> bool {
        let match_search = if self.query.is_empty() {
            true
        } else {
            let haystack = item.search_fields().join(" ").to_lowercase();
            haystack.contains(&self.query.to_lowercase())
        };

        let match_status = match &self.status_filter {
            None => true,
            Some(wanted) => item.filter_key().as_deref() == Some(wanted.as_str()),
        };

        match_search && match_status
    }

    /// All items passing the current query and status filter, in fetch order.
    pub fn filtered(&self) -> Vec<&T> {
        self.items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Number of items passing the current filters.
    pub fn filtered_len(&self) -> usize {
        self.items.iter().filter(|item| self.matches(item)).count()
    }

    /// Total pages: `ceil(filtered / page_size)`. Zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size)
    }

    /// The 1-based current page.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// The slice of the filtered sequence for the current page.
    pub fn page_items(&self) -> Vec<&T> {
        let filtered = self.filtered();
        let start = (self.page - 1) * self.page_size;
        let end = (self.page * self.page_size).min(filtered.len());
        if start >= filtered.len() {
            return Vec::new();
        }
        filtered[start..end].to_vec()
    }

    /// Navigates to `page`; a no-op outside `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
        }
    }

    /// Navigates to the next page, if there is one.
    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    /// Navigates to the previous page, if there is one.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.go_to_page(self.page - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        case_number: String,
        subject: String,
        status: &'static str,
    }

    impl Row {
        fn new(case_number: &str, subject: &str, status: &'static str) -> Self {
            Self {
                case_number: case_number.to_string(),
                subject: subject.to_string(),
                status,
            }
        }
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.case_number, &self.subject]
        }

        fn filter_key(&self) -> Option<String> {
            Some(self.status.to_string())
        }
    }

    fn twelve_rows() -> Vec<Row> {
        (1..=12)
            .map(|i| {
                let status = if i % 2 == 0 { "Opened" } else { "In Progress" };
                Row::new(&format!("GS-{i:04}"), &format!("Subject {i}"), status)
            })
            .collect()
    }

    #[test]
    fn test_pages_reconstruct_filtered_sequence() {
        let mut listing = Listing::new(twelve_rows());

        let mut reconstructed = Vec::new();
        for page in 1..=listing.total_pages() {
            listing.go_to_page(page);
            for row in listing.page_items() {
                reconstructed.push(row.case_number.clone());
            }
        }

        let expected: Vec<String> = listing
            .filtered()
            .iter()
            .map(|r| r.case_number.clone())
            .collect();
        assert_eq!(reconstructed, expected);
    }

    #[test]
    fn test_twelve_items_page_size_five() {
        let mut listing = Listing::new(twelve_rows());
        assert_eq!(listing.total_pages(), 3);

        let first: Vec<&str> = listing
            .page_items()
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();
        assert_eq!(first, vec!["GS-0001", "GS-0002", "GS-0003", "GS-0004", "GS-0005"]);

        listing.go_to_page(3);
        let last: Vec<&str> = listing
            .page_items()
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();
        assert_eq!(last, vec!["GS-0011", "GS-0012"]);

        // Out-of-range navigation is a no-op
        listing.go_to_page(4);
        assert_eq!(listing.current_page(), 3);
        listing.go_to_page(0);
        assert_eq!(listing.current_page(), 3);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut listing = Listing::new(twelve_rows());
        listing.go_to_page(3);
        assert_eq!(listing.current_page(), 3);

        listing.set_query("subject");
        assert_eq!(listing.current_page(), 1);

        listing.go_to_page(2);
        listing.set_status_filter(Some("Opened".to_string()));
        assert_eq!(listing.current_page(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut listing = Listing::new(twelve_rows());
        listing.set_query("gs-001");
        let matches: Vec<&str> = listing
            .filtered()
            .iter()
            .map(|r| r.case_number.as_str())
            .collect();
        assert_eq!(matches, vec!["GS-0010", "GS-0011", "GS-0012"]);
    }

    #[test]
    fn test_status_filter_is_exact_equality() {
        let mut listing = Listing::new(twelve_rows());
        listing.set_status_filter(Some("Opened".to_string()));
        assert_eq!(listing.filtered_len(), 6);

        // Not a substring match
        listing.set_status_filter(Some("Open".to_string()));
        assert_eq!(listing.filtered_len(), 0);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let mut listing = Listing::new(twelve_rows());
        listing.set_query("subject 1");
        listing.set_status_filter(Some("Opened".to_string()));
        // "Subject 1" prefix matches 1, 10, 11, 12; even ids are Opened
        let matches: Vec<&str> = listing
            .filtered()
            .iter()
            .map(|r| r.subject.as_str())
            .collect();
        assert_eq!(matches, vec!["Subject 10", "Subject 12"]);
    }

    #[test]
    fn test_no_match_yields_empty_page_and_zero_pages() {
        let mut listing = Listing::new(twelve_rows());
        listing.set_query("does-not-exist");

        assert_eq!(listing.total_pages(), 0);
        assert_eq!(listing.current_page(), 1);
        assert!(listing.page_items().is_empty());

        // Navigation is disabled while nothing matches
        listing.go_to_page(2);
        assert_eq!(listing.current_page(), 1);
        listing.next_page();
        assert_eq!(listing.current_page(), 1);
    }

    #[test]
    fn test_missing_fields_treated_as_empty() {
        struct Sparse;

        impl Filterable for Sparse {
            fn search_fields(&self) -> Vec<&str> {
                Vec::new()
            }

            fn filter_key(&self) -> Option<String> {
                None
            }
        }

        let mut listing = Listing::new(vec![Sparse, Sparse]);
        assert_eq!(listing.filtered_len(), 2);

        listing.set_query("anything");
        assert_eq!(listing.filtered_len(), 0);

        // A record without a status never matches an active filter
        listing.set_query("");
        listing.set_status_filter(Some("Opened".to_string()));
        assert_eq!(listing.filtered_len(), 0);
    }

    #[test]
    fn test_replace_items_resets_page() {
        let mut listing = Listing::new(twelve_rows());
        listing.go_to_page(2);
        listing.replace_items(twelve_rows());
        assert_eq!(listing.current_page(), 1);
    }
}
