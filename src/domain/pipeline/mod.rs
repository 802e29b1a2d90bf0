//! Ranking pipeline: filter, then sort, then paginate.
//!
//! Each stage is a pure function that fully materializes its output before
//! the next stage runs. Callers re-run the pipeline whenever the source
//! list, the criteria, the sort key or the page state changes.
//!
//! ```
//! use world_ranks::domain::entities::Country;
//! use world_ranks::domain::pipeline::{rank, FilterCriteria, RankingQuery, SortKey};
//!
//! let countries = vec![
//!     Country::new("CAN", "Canada").with_region("Americas").with_area(9_984_670.0),
//!     Country::new("USA", "United States").with_region("Americas").with_area(9_372_610.0),
//!     Country::new("FRA", "France").with_region("Europe").with_area(551_695.0),
//! ];
//!
//! let query = RankingQuery::new()
//!     .with_criteria(FilterCriteria::new().with_regions(["Americas"]))
//!     .with_sort(SortKey::Area);
//!
//! let ranked = rank(&countries, &query, 50);
//! assert_eq!(ranked.found, 2);
//! assert_eq!(ranked.page.items[0].code, "CAN");
//! ```

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{FilterCriteria, filter};
pub use paginate::{Page, PageState, paginate, total_pages};
pub use sort::{SortKey, sort};

use crate::domain::entities::Country;

/// Everything needed to compute one ranking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingQuery {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
    pub view_all: bool,
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
            view_all: false,
        }
    }
}

impl RankingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_view_all(mut self, view_all: bool) -> Self {
        self.view_all = view_all;
        self
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Number of countries left after filtering.
    pub found: usize,
    pub sort: SortKey,
    pub page: Page<Country>,
}

/// Runs filter, sort and paginate over `countries`.
pub fn rank(countries: &[Country], query: &RankingQuery, page_size: usize) -> Ranking {
    let filtered = filter(countries, &query.criteria);
    let sorted = sort(&filtered, query.sort);
    let page = paginate(&sorted, query.page, page_size, query.view_all);

    Ranking {
        found: sorted.len(),
        sort: query.sort,
        page,
    }
}
