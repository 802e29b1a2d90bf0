//! Application layer orchestrating provider calls and ranking state.
//!
//! Services own shared state fed by a [`crate::domain::repositories::CountrySource`];
//! views hold the state of one client on top of them.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Full list loading and ranking
//! - [`services::detail_service::DetailService`] - Country and neighbor resolution
//!
//! # Views
//!
//! - [`views::ranking_view::RankingView`] - Filters, sort and page of one client
//! - [`views::detail_view::DetailView`] - Country in view with stale-result protection

pub mod services;
pub mod views;
