//! Filter stage: region, UN membership, independence and free-text search.

use crate::domain::entities::Country;
use std::collections::BTreeSet;

/// Combined filter configuration.
///
/// All criteria combine with AND. The region set matches with OR: a country
/// passes if its region is any of the selected ones. An empty set means no
/// region restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub regions: BTreeSet<String>,
    pub un_member_only: bool,
    pub independent_only: bool,
    pub search: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_un_member_only(mut self, on: bool) -> Self {
        self.un_member_only = on;
        self
    }

    pub fn with_independent_only(mut self, on: bool) -> Self {
        self.independent_only = on;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Adds `region` if absent, removes it if present.
    pub fn toggle_region(&mut self, region: &str) {
        if !self.regions.remove(region) {
            self.regions.insert(region.to_string());
        }
    }

    /// Returns true when no criterion restricts the list.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && !self.un_member_only
            && !self.independent_only
            && self.search.trim().is_empty()
    }

    /// Tests one country against every active criterion.
    pub fn matches(&self, country: &Country) -> bool {
        self.matches_with_term(country, &self.search_term())
    }

    fn matches_with_term(&self, country: &Country, term: &str) -> bool {
        self.matches_region(country)
            && (!self.un_member_only || country.un_member)
            && (!self.independent_only || country.independent)
            && matches_search(country, term)
    }

    fn matches_region(&self, country: &Country) -> bool {
        if self.regions.is_empty() {
            return true;
        }
        country
            .region
            .as_ref()
            .is_some_and(|region| self.regions.contains(region))
    }

    fn search_term(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

/// Substring match of an already trimmed, lower-cased term against name,
/// region and subregion. Missing region or subregion never match.
fn matches_search(country: &Country, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(country.name.as_str())
        || country.region.as_deref().is_some_and(contains)
        || country.subregion.as_deref().is_some_and(contains)
}

/// Returns the countries matching `criteria`, in input order.
///
/// The input is never modified.
pub fn filter(countries: &[Country], criteria: &FilterCriteria) -> Vec<Country> {
    let term = criteria.search_term();

    countries
        .iter()
        .filter(|c| criteria.matches_with_term(c, &term))
        .cloned()
        .collect()
}
