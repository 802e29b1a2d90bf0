//! DTOs for the country detail endpoint.

use serde::Serialize;

use crate::api::dto::countries::FlagItem;
use crate::domain::entities::{Country, CountryDetail};

/// Full record of the requested country.
#[derive(Debug, Serialize)]
pub struct CountryDetailItem {
    pub code: String,
    pub name: String,
    pub official_name: Option<String>,
    pub capital: Vec<String>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub un_member: bool,
    pub independent: bool,
    pub borders: Vec<String>,
    pub flag: FlagItem,
}

impl From<Country> for CountryDetailItem {
    fn from(country: Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            official_name: country.official_name,
            capital: country.capital,
            population: country.population,
            area: country.area,
            region: country.region,
            subregion: country.subregion,
            un_member: country.un_member,
            independent: country.independent,
            borders: country.borders,
            flag: country.flag.into(),
        }
    }
}

/// Neighbor entry; the batch call only returns name, code and flag.
#[derive(Debug, Serialize)]
pub struct NeighborItem {
    pub code: String,
    pub name: String,
    pub flag: FlagItem,
}

impl From<Country> for NeighborItem {
    fn from(country: Country) -> Self {
        Self {
            code: country.code,
            name: country.name,
            flag: country.flag.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountryDetailResponse {
    pub country: CountryDetailItem,
    pub neighbors: Vec<NeighborItem>,
}

impl From<CountryDetail> for CountryDetailResponse {
    fn from(detail: CountryDetail) -> Self {
        Self {
            country: detail.country.into(),
            neighbors: detail.neighbors.into_iter().map(NeighborItem::from).collect(),
        }
    }
}
