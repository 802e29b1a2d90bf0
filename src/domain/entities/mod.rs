//! Core domain entities.
//!
//! - [`Country`] - A country record fetched from the provider
//! - [`CountryDetail`] - A country plus its resolved neighbors
//!
//! Entities are plain data. They are never mutated once fetched; pipeline
//! stages and resolvers build new values instead.

pub mod country;
pub mod detail;

pub use country::{Country, Flag};
pub use detail::CountryDetail;
