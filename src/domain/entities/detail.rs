//! Resolved detail view of a single country.

use super::country::Country;

/// A country together with its resolved neighbors.
///
/// Built fresh by every resolution; a re-resolution replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub country: Country,
    /// Neighbor records in the order of `country.borders`.
    pub neighbors: Vec<Country>,
}

impl CountryDetail {
    pub fn new(country: Country, neighbors: Vec<Country>) -> Self {
        Self { country, neighbors }
    }

    /// Border codes the provider did not return a record for.
    pub fn unresolved_borders(&self) -> Vec<&str> {
        self.country
            .borders
            .iter()
            .filter(|code| !self.neighbors.iter().any(|n| &n.code == *code))
            .map(String::as_str)
            .collect()
    }
}
