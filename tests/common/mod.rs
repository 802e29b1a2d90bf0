#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use world_ranks::domain::entities::Country;
use world_ranks::domain::options::RankingOptions;
use world_ranks::domain::repositories::{CountrySource, SourceCall, SourceError};
use world_ranks::state::AppState;

/// In-memory source with call counters and switchable failures.
#[derive(Default)]
pub struct StubSource {
    pub countries: Vec<Country>,
    pub all_error: Option<SourceError>,
    pub neighbors_error: Option<SourceError>,
    pub all_calls: AtomicUsize,
    pub code_calls: AtomicUsize,
    pub codes_calls: AtomicUsize,
}

impl StubSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            ..Self::default()
        }
    }

    pub fn failing_all(error: SourceError) -> Self {
        Self {
            all_error: Some(error),
            ..Self::default()
        }
    }

    pub fn with_neighbors_error(mut self, error: SourceError) -> Self {
        self.neighbors_error = Some(error);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
            + self.code_calls.load(Ordering::SeqCst)
            + self.codes_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for StubSource {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        match &self.all_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.countries.clone()),
        }
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        self.code_calls.fetch_add(1, Ordering::SeqCst);
        self.countries
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .ok_or(SourceError::Status {
                call: SourceCall::Country,
                status: 404,
            })
    }

    /// Answers in reverse catalog order.
    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>, SourceError> {
        self.codes_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.neighbors_error {
            return Err(e.clone());
        }
        Ok(self
            .countries
            .iter()
            .rev()
            .filter(|c| codes.contains(&c.code))
            .cloned()
            .collect())
    }
}

/// Six countries across three regions.
pub fn sample_countries() -> Vec<Country> {
    vec![
        Country::new("USA", "United States")
            .with_region("Americas")
            .with_subregion("North America")
            .with_population(331_002_651)
            .with_area(9_372_610.0)
            .with_un_member(true)
            .with_independent(true)
            .with_borders(["CAN", "MEX"]),
        Country::new("CAN", "Canada")
            .with_region("Americas")
            .with_subregion("North America")
            .with_population(38_005_238)
            .with_area(9_984_670.0)
            .with_un_member(true)
            .with_independent(true)
            .with_borders(["USA"]),
        Country::new("MEX", "Mexico")
            .with_region("Americas")
            .with_subregion("North America")
            .with_population(128_932_753)
            .with_area(1_964_375.0)
            .with_un_member(true)
            .with_independent(true)
            .with_borders(["USA"]),
        Country::new("GBR", "United Kingdom")
            .with_region("Europe")
            .with_subregion("Northern Europe")
            .with_population(67_215_293)
            .with_area(242_900.0)
            .with_un_member(true)
            .with_independent(true),
        Country::new("ALA", "Åland Islands")
            .with_region("Europe")
            .with_subregion("Northern Europe")
            .with_population(29_458)
            .with_area(1_580.0),
        Country::new("ATA", "Antarctica").with_region("Antarctic"),
    ]
}

pub fn create_test_state(source: Arc<StubSource>) -> AppState {
    create_test_state_with_page_size(source, 50)
}

pub fn create_test_state_with_page_size(source: Arc<StubSource>, page_size: usize) -> AppState {
    AppState::new(source, RankingOptions::default().with_page_size(page_size))
}

/// State whose catalog has already been loaded from `source`.
pub async fn create_loaded_state(source: Arc<StubSource>, page_size: usize) -> AppState {
    let state = create_test_state_with_page_size(source, page_size);
    state.catalog.load().await;
    state
}
