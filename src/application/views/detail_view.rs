//! Stateful detail view with stale-result protection.

use crate::application::services::DetailService;
use crate::domain::entities::CountryDetail;
use crate::domain::generation::{RequestGeneration, Ticket};
use crate::domain::repositories::CountrySource;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// What the detail view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No country requested yet.
    Idle,
    Loading {
        code: String,
    },
    Failed {
        code: String,
        message: String,
    },
    Ready(CountryDetail),
}

/// Tracks the country a client is looking at.
///
/// Opening a new code supersedes any resolution still in flight: when the
/// older result arrives it is dropped instead of overwriting the newer view.
pub struct DetailView<S: CountrySource + ?Sized> {
    service: Arc<DetailService<S>>,
    generation: RequestGeneration,
    target: RwLock<Option<String>>,
    state: RwLock<DetailState>,
}

impl<S: CountrySource + ?Sized> DetailView<S> {
    pub fn new(service: Arc<DetailService<S>>) -> Self {
        Self {
            service,
            generation: RequestGeneration::new(),
            target: RwLock::new(None),
            state: RwLock::new(DetailState::Idle),
        }
    }

    pub async fn state(&self) -> DetailState {
        self.state.read().await.clone()
    }

    pub async fn target(&self) -> Option<String> {
        self.target.read().await.clone()
    }

    /// Resolves `code` and shows the result.
    ///
    /// A blank code is ignored. Returns the state after this call, which is
    /// the newer request's state when this one was superseded meanwhile.
    pub async fn open(&self, code: &str) -> DetailState {
        let code = code.trim();
        if code.is_empty() {
            return self.state().await;
        }

        self.run(code.to_string()).await
    }

    /// Re-resolves the current target from scratch.
    pub async fn refetch(&self) -> DetailState {
        match self.target().await {
            Some(code) => self.run(code).await,
            None => self.state().await,
        }
    }

    /// Takes a ticket for `code`.
    ///
    /// Runs under the state lock so the target always names the request
    /// holding the current ticket.
    async fn begin(&self, code: &str) -> Ticket {
        let mut state = self.state.write().await;
        *self.target.write().await = Some(code.to_string());
        *state = DetailState::Loading {
            code: code.to_string(),
        };
        self.generation.issue()
    }

    async fn run(&self, code: String) -> DetailState {
        let ticket = self.begin(&code).await;

        let next = match self.service.resolve(&code).await {
            Ok(Some(detail)) => DetailState::Ready(detail),
            Ok(None) => DetailState::Idle,
            Err(e) => DetailState::Failed {
                code: code.clone(),
                message: e.to_string(),
            },
        };

        let mut state = self.state.write().await;
        if self.generation.is_current(ticket) {
            *state = next;
        } else {
            debug!(%code, "Discarding stale detail result");
        }
        state.clone()
    }
}
