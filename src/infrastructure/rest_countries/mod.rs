//! REST Countries provider.
//!
//! - [`Endpoints`] - URL building for the three provider calls
//! - [`CountryPayload`] - Wire shape of a provider record
//! - [`RestCountriesClient`] - reqwest-backed [`CountrySource`](crate::domain::repositories::CountrySource)

mod client;
mod endpoints;
mod payload;

pub use client::RestCountriesClient;
pub use endpoints::{DEFAULT_BASE_URL, EndpointError, Endpoints};
pub use payload::CountryPayload;
