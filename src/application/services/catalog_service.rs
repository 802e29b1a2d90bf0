//! Country list loading and ranking.

use crate::domain::entities::Country;
use crate::domain::generation::RequestGeneration;
use crate::domain::pipeline::{Ranking, RankingQuery, rank};
use crate::domain::repositories::CountrySource;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Load state of the in-memory country list.
///
/// Exactly one of loading, failed or ready holds at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        countries: Arc<Vec<Country>>,
        fetched_at: DateTime<Utc>,
    },
}

impl CatalogState {
    pub fn status(&self) -> &'static str {
        match self {
            CatalogState::Loading => "loading",
            CatalogState::Failed { .. } => "error",
            CatalogState::Ready { .. } => "ready",
        }
    }
}

/// Holds the full country list and runs the ranking pipeline over it.
///
/// The list is fetched once by [`load`](Self::load) and replaced wholesale by
/// later calls. Overlapping loads are allowed; only the most recently issued
/// one may publish its result.
pub struct CatalogService<S: CountrySource + ?Sized> {
    source: Arc<S>,
    state: RwLock<CatalogState>,
    generation: RequestGeneration,
}

impl<S: CountrySource + ?Sized> CatalogService<S> {
    /// Creates a service in the [`CatalogState::Loading`] state.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: RwLock::new(CatalogState::Loading),
            generation: RequestGeneration::new(),
        }
    }

    /// Fetches the full list and publishes the outcome.
    ///
    /// The state switches to loading (clearing any previous error) before
    /// the request is sent. Failures are stored as [`CatalogState::Failed`]
    /// with an empty list. Returns the state after this call.
    pub async fn load(&self) -> CatalogState {
        // Loading writes and tickets must happen in the same order.
        let ticket = {
            let mut state = self.state.write().await;
            *state = CatalogState::Loading;
            self.generation.issue()
        };

        let outcome = match self.source.fetch_all().await {
            Ok(countries) => {
                info!(count = countries.len(), "Country catalog loaded");
                CatalogState::Ready {
                    countries: Arc::new(countries),
                    fetched_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Country catalog load failed");
                CatalogState::Failed {
                    message: e.to_string(),
                }
            }
        };

        let mut state = self.state.write().await;
        if self.generation.is_current(ticket) {
            *state = outcome;
        } else {
            debug!("Discarding superseded catalog load");
        }
        state.clone()
    }

    /// Current load state.
    pub async fn state(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Runs the pipeline over the loaded list.
    ///
    /// Returns the current state unchanged as the error when the list is not
    /// ready.
    pub async fn rank(&self, query: &RankingQuery, page_size: usize) -> Result<Ranking, CatalogState> {
        match self.state().await {
            CatalogState::Ready { countries, .. } => Ok(rank(&countries, query, page_size)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pipeline::{FilterCriteria, SortKey};
    use crate::domain::repositories::{MockCountrySource, SourceCall, SourceError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    fn countries() -> Vec<Country> {
        vec![
            Country::new("CAN", "Canada").with_population(38_000_000),
            Country::new("USA", "United States").with_population(331_000_000),
            Country::new("GBR", "United Kingdom").with_population(67_000_000),
        ]
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let service = CatalogService::new(Arc::new(MockCountrySource::new()));

        assert_eq!(service.state().await, CatalogState::Loading);
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut source = MockCountrySource::new();
        source
            .expect_fetch_all()
            .times(1)
            .returning(|| Ok(countries()));

        let service = CatalogService::new(Arc::new(source));
        let state = service.load().await;

        match state {
            CatalogState::Ready { countries, .. } => assert_eq!(countries.len(), 3),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_failure_keeps_message() {
        let mut source = MockCountrySource::new();
        source.expect_fetch_all().times(1).returning(|| {
            Err(SourceError::Status {
                call: SourceCall::AllCountries,
                status: 500,
            })
        });

        let service = CatalogService::new(Arc::new(source));
        let state = service.load().await;

        assert_eq!(
            state,
            CatalogState::Failed {
                message: "Failed to fetch countries".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_refetch_clears_error() {
        let mut source = MockCountrySource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Err(SourceError::Transport {
                    call: SourceCall::AllCountries,
                    message: "Network error".to_string(),
                })
            });
        source
            .expect_fetch_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(countries()));

        let service = CatalogService::new(Arc::new(source));

        assert_eq!(service.load().await.status(), "error");
        assert_eq!(service.load().await.status(), "ready");
    }

    #[tokio::test]
    async fn test_rank_requires_ready_catalog() {
        let service = CatalogService::new(Arc::new(MockCountrySource::new()));

        let result = service.rank(&RankingQuery::new(), 50).await;

        assert_eq!(result, Err(CatalogState::Loading));
    }

    #[tokio::test]
    async fn test_rank_over_loaded_catalog() {
        let mut source = MockCountrySource::new();
        source.expect_fetch_all().returning(|| Ok(countries()));

        let service = CatalogService::new(Arc::new(source));
        service.load().await;

        let query = RankingQuery::new()
            .with_criteria(FilterCriteria::new().with_search("united"))
            .with_sort(SortKey::Name);
        let ranking = service.rank(&query, 50).await.unwrap();

        assert_eq!(ranking.found, 2);
        let codes: Vec<&str> = ranking.page.items.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["GBR", "USA"]);
    }

    /// Source whose full-list lookups answer from a queue; an entry with a
    /// gate blocks until the test releases it.
    struct GatedSource {
        replies: Mutex<Vec<(Option<oneshot::Receiver<()>>, Vec<Country>)>>,
    }

    #[async_trait]
    impl CountrySource for GatedSource {
        async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
            let (gate, countries) = self.replies.lock().unwrap().remove(0);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(countries)
        }

        async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
            Ok(Country::new(code, code))
        }

        async fn fetch_by_codes(&self, _codes: &[String]) -> Result<Vec<Country>, SourceError> {
            Ok(Vec::new())
        }
    }

    fn ready_codes(state: &CatalogState) -> Vec<String> {
        match state {
            CatalogState::Ready { countries, .. } => countries.iter().map(|c| c.code.clone()).collect(),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_superseded_load_is_discarded() {
        let (release_old, old_gate) = oneshot::channel();
        let source = GatedSource {
            replies: Mutex::new(vec![
                (Some(old_gate), vec![Country::new("OLD", "Old")]),
                (None, countries()),
            ]),
        };
        let service = Arc::new(CatalogService::new(Arc::new(source)));

        let slow = {
            let service = service.clone();
            tokio::spawn(async move { service.load().await })
        };
        while service.source.replies.lock().unwrap().len() == 2 {
            tokio::task::yield_now().await;
        }

        let fresh = service.load().await;
        assert_eq!(ready_codes(&fresh).len(), 3);

        release_old.send(()).unwrap();
        let after_old = slow.await.unwrap();

        assert_eq!(ready_codes(&after_old).len(), 3);
        assert_eq!(ready_codes(&service.state().await), vec!["CAN", "USA", "GBR"]);
    }

    #[tokio::test]
    async fn test_ticket_taken_only_with_state_lock() {
        let mut source = MockCountrySource::new();
        source.expect_fetch_all().times(1).returning(|| Ok(countries()));
        let service = Arc::new(CatalogService::new(Arc::new(source)));

        let guard = service.state.write().await;
        let marker = service.generation.issue();
        let pending = {
            let service = service.clone();
            tokio::spawn(async move { service.load().await })
        };
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(service.generation.is_current(marker));
        drop(guard);

        let state = pending.await.unwrap();

        assert!(!service.generation.is_current(marker));
        assert_eq!(ready_codes(&state).len(), 3);
        assert_eq!(service.state().await, state);
    }
}
