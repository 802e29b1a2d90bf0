//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod countries;
pub mod detail;
pub mod health;
pub mod options;

pub use countries::{ranking_handler, refresh_handler};
pub use detail::country_detail_handler;
pub use health::health_handler;
pub use options::options_handler;
