//! Sort stage: one fixed comparator per key.

use crate::domain::entities::Country;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Ordering applied to a country list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Descending population; missing population counts as 0.
    #[default]
    Population,
    /// Ascending by display name, accent- and case-insensitive.
    Name,
    /// Descending area; missing area counts as 0.
    Area,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Population, SortKey::Name, SortKey::Area];

    /// Parses a key, falling back to [`SortKey::Population`] for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => SortKey::Name,
            "area" => SortKey::Area,
            _ => SortKey::Population,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Population => "population",
            SortKey::Name => "name",
            SortKey::Area => "area",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Population => "Population",
            SortKey::Name => "Name",
            SortKey::Area => "Area",
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a sorted copy of `countries`.
///
/// The sort is stable: countries that compare equal keep their input order.
pub fn sort(countries: &[Country], key: SortKey) -> Vec<Country> {
    let mut sorted = countries.to_vec();

    match key {
        SortKey::Population => {
            sorted.sort_by(|a, b| b.population_or_zero().cmp(&a.population_or_zero()));
        }
        SortKey::Name => sorted.sort_by_cached_key(|c| collation_key(&c.name)),
        SortKey::Area => sorted.sort_by(|a, b| compare_area_desc(a, b)),
    }

    sorted
}

fn compare_area_desc(a: &Country, b: &Country) -> Ordering {
    b.area_or_zero().total_cmp(&a.area_or_zero())
}

/// Folds a display name for ordering: decomposes, drops combining marks and
/// lowercases, so "Åland Islands" sorts with the A's.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
