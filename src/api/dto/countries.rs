//! DTOs for the ranking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{Country, Flag};
use crate::domain::pipeline::{FilterCriteria, Ranking, RankingQuery, SortKey};

/// Query parameters of `GET /api/countries`.
///
/// Every parameter is optional. `regions` is a comma-separated list.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RankingParams {
    #[validate(length(max = 100, message = "Search text is limited to 100 characters"))]
    pub search: Option<String>,

    pub regions: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub un_member: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub independent: Option<bool>,

    /// Unknown values fall back to population.
    pub sort: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<usize>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub view_all: Option<bool>,
}

impl RankingParams {
    /// Region names from the comma-separated `regions` value, blanks dropped.
    pub fn region_list(&self) -> Vec<String> {
        self.regions
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn to_query(&self) -> RankingQuery {
        let criteria = FilterCriteria::new()
            .with_regions(self.region_list())
            .with_un_member_only(self.un_member.unwrap_or(false))
            .with_independent_only(self.independent.unwrap_or(false))
            .with_search(self.search.clone().unwrap_or_default());

        RankingQuery::new()
            .with_criteria(criteria)
            .with_sort(SortKey::parse(self.sort.as_deref().unwrap_or_default()))
            .with_page(self.page.unwrap_or(1))
            .with_view_all(self.view_all.unwrap_or(false))
    }
}

#[derive(Debug, Serialize)]
pub struct FlagItem {
    pub svg: Option<String>,
    pub png: Option<String>,
    pub alt: Option<String>,
}

impl From<Flag> for FlagItem {
    fn from(flag: Flag) -> Self {
        Self {
            svg: flag.svg,
            png: flag.png,
            alt: flag.alt,
        }
    }
}

/// One row of a ranking page.
#[derive(Debug, Serialize)]
pub struct CountryItem {
    pub code: String,
    pub name: String,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub un_member: bool,
    pub independent: bool,
    pub flag: FlagItem,
}

impl From<Country> for CountryItem {
    fn from(country: Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            population: country.population,
            area: country.area,
            region: country.region,
            subregion: country.subregion,
            un_member: country.un_member,
            independent: country.independent,
            flag: country.flag.into(),
        }
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub view_all: bool,
}

/// One ranking page.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    /// Countries left after filtering.
    pub found: usize,
    pub sort: &'static str,
    pub pagination: PaginationMeta,
    pub items: Vec<CountryItem>,
}

impl From<Ranking> for RankingResponse {
    fn from(ranking: Ranking) -> Self {
        let page = ranking.page;

        Self {
            found: ranking.found,
            sort: ranking.sort.as_str(),
            pagination: PaginationMeta {
                page: page.page,
                page_size: page.page_size,
                total_items: page.total_items,
                total_pages: page.total_pages,
                has_prev: page.has_prev(),
                has_next: page.has_next(),
                view_all: page.view_all,
            },
            items: page.items.into_iter().map(CountryItem::from).collect(),
        }
    }
}

/// Result of `POST /api/countries/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: &'static str,
    pub count: usize,
    pub fetched_at: DateTime<Utc>,
}
