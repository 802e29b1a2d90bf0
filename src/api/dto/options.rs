//! DTOs for the ranking options endpoint.

use serde::Serialize;

use crate::domain::options::RankingOptions;

#[derive(Debug, Serialize)]
pub struct SortOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Choices a client can offer for filtering and sorting.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub regions: Vec<String>,
    pub sort_options: Vec<SortOption>,
    pub page_size: usize,
}

impl From<&RankingOptions> for OptionsResponse {
    fn from(options: &RankingOptions) -> Self {
        Self {
            regions: options.regions.clone(),
            sort_options: options
                .sort_keys
                .iter()
                .map(|key| SortOption {
                    key: key.as_str(),
                    label: key.label(),
                })
                .collect(),
            page_size: options.page_size,
        }
    }
}
