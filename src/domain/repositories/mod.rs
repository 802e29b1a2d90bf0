//! Data access traits for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Sources
//!
//! - [`CountrySource`] - List, single and batch lookups of country records

pub mod country_source;

pub use country_source::{CountrySource, SourceCall, SourceError};

#[cfg(test)]
pub use country_source::MockCountrySource;
