//! Per-client state on top of the services.
//!
//! Views keep what a single client is looking at: the active filters, sort
//! key and page for rankings, and the country being inspected for details.

pub mod detail_view;
pub mod ranking_view;

pub use detail_view::{DetailState, DetailView};
pub use ranking_view::RankingView;
