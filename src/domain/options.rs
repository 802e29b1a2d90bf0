//! Ranking configuration handed to views and handlers.

use crate::domain::pipeline::SortKey;

/// Regions offered for filtering, in display order.
pub const DEFAULT_REGIONS: [&str; 6] = [
    "Americas",
    "Antarctic",
    "Africa",
    "Asia",
    "Europe",
    "Oceania",
];

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Selectable regions, sort options and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingOptions {
    pub regions: Vec<String>,
    pub sort_keys: Vec<SortKey>,
    pub page_size: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            sort_keys: SortKey::ALL.to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RankingOptions {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn is_known_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RankingOptions::default();

        assert_eq!(options.page_size, 50);
        assert_eq!(options.regions.len(), 6);
        assert_eq!(options.sort_keys.first(), Some(&SortKey::Population));
        assert!(options.is_known_region("Antarctic"));
        assert!(!options.is_known_region("Atlantis"));
    }
}
