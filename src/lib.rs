//! # World Ranks
//!
//! Country rankings over the REST Countries API, served with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Country entities, the source trait and the ranking pipeline
//! - **Application Layer** ([`application`]) - Catalog and detail services, per-client views
//! - **Infrastructure Layer** ([`infrastructure`]) - REST Countries HTTP client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Filter by region, UN membership, independence and free text
//! - Sort by population, name or area
//! - Fixed-size pages or a single view-all page
//! - Country detail with bordering countries
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at another provider instance
//! export COUNTRIES_API_URL="https://restcountries.com/v3.1"
//!
//! # Start the service
//! cargo run
//!
//! # Or browse from the terminal
//! cargo run --bin ranks -- list --sort area
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CatalogService, CatalogState, DetailService};
    pub use crate::application::views::{DetailState, DetailView, RankingView};
    pub use crate::domain::entities::{Country, CountryDetail, Flag};
    pub use crate::domain::options::RankingOptions;
    pub use crate::domain::pipeline::{FilterCriteria, RankingQuery, SortKey};
    pub use crate::domain::repositories::{CountrySource, SourceCall, SourceError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
