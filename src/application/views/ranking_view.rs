//! Stateful ranking view: criteria, sort key and page position.

use crate::domain::entities::Country;
use crate::domain::options::RankingOptions;
use crate::domain::pipeline::{FilterCriteria, Page, PageState, SortKey, filter, sort};
use std::sync::Arc;

/// Ranking state owned by one client (a CLI session, a UI screen).
///
/// Every setter that changes the filtered or sorted list recomputes the
/// pipeline eagerly and returns to page 1 in paginated mode. Setting a value
/// equal to the current one changes nothing.
#[derive(Debug, Clone)]
pub struct RankingView {
    options: RankingOptions,
    source: Arc<Vec<Country>>,
    criteria: FilterCriteria,
    sort_key: SortKey,
    paging: PageState,
    sorted: Vec<Country>,
}

impl RankingView {
    pub fn new(options: RankingOptions) -> Self {
        Self {
            options,
            source: Arc::new(Vec::new()),
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            paging: PageState::new(),
            sorted: Vec::new(),
        }
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Replaces the source list.
    pub fn set_countries(&mut self, countries: Arc<Vec<Country>>) {
        self.source = countries;
        self.recompute();
    }

    /// Drops the source list, as when a refetch fails.
    pub fn clear_countries(&mut self) {
        self.set_countries(Arc::new(Vec::new()));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.criteria.search {
            self.criteria.search = search;
            self.recompute();
        }
    }

    pub fn toggle_region(&mut self, region: &str) {
        self.criteria.toggle_region(region);
        self.recompute();
    }

    pub fn set_un_member_only(&mut self, on: bool) {
        if on != self.criteria.un_member_only {
            self.criteria.un_member_only = on;
            self.recompute();
        }
    }

    pub fn set_independent_only(&mut self, on: bool) {
        if on != self.criteria.independent_only {
            self.criteria.independent_only = on;
            self.recompute();
        }
    }

    /// Clears regions, both flags and the search text.
    pub fn reset_filters(&mut self) {
        if !self.criteria.is_empty() || !self.criteria.search.is_empty() {
            self.criteria = FilterCriteria::default();
            self.recompute();
        }
    }

    pub fn set_sort(&mut self, key: SortKey) {
        if key != self.sort_key {
            self.sort_key = key;
            self.recompute();
        }
    }

    /// The filtered and sorted list.
    pub fn sorted(&self) -> &[Country] {
        &self.sorted
    }

    /// Number of countries after filtering.
    pub fn found(&self) -> usize {
        self.sorted.len()
    }

    pub fn total_pages(&self) -> usize {
        crate::domain::pipeline::total_pages(self.sorted.len(), self.options.page_size)
    }

    pub fn page_number(&self) -> usize {
        self.paging.page()
    }

    pub fn is_view_all(&self) -> bool {
        self.paging.view_all()
    }

    /// The page currently in view.
    pub fn current_page(&self) -> Page<Country> {
        self.paging.apply(&self.sorted, self.options.page_size)
    }

    pub fn prev_page(&mut self) {
        self.paging.prev();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.paging.next(total);
    }

    /// Jumps to `page`; ignored when outside `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.paging.go_to(page, total)
    }

    pub fn show_all(&mut self) {
        self.paging.show_all();
    }

    pub fn show_paginated(&mut self) {
        self.paging.show_paginated();
    }

    fn recompute(&mut self) {
        let filtered = filter(&self.source, &self.criteria);
        self.sorted = sort(&filtered, self.sort_key);
        self.paging.reset();
    }
}
