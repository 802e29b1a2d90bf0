//! Services that talk to the country provider.

pub mod catalog_service;
pub mod detail_service;

pub use catalog_service::{CatalogService, CatalogState};
pub use detail_service::DetailService;
