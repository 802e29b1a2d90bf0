//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, DetailService};
use crate::domain::options::RankingOptions;
use crate::domain::repositories::CountrySource;

/// Services shared by every request.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService<dyn CountrySource>>,
    pub detail: Arc<DetailService<dyn CountrySource>>,
    pub options: Arc<RankingOptions>,
}

impl AppState {
    /// Builds both services over one source.
    pub fn new(source: Arc<dyn CountrySource>, options: RankingOptions) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(source.clone())),
            detail: Arc::new(DetailService::new(source)),
            options: Arc::new(options),
        }
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }
}
