//! Wire shape of a REST Countries v3.1 record.

use crate::domain::entities::{Country, Flag};
use serde::Deserialize;

/// One record as returned by the provider.
///
/// Every call asks for a different field subset, so everything except
/// `cca3` and `name` is optional here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPayload {
    pub cca3: String,
    pub name: NamePayload,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub un_member: Option<bool>,
    #[serde(default)]
    pub independent: Option<bool>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Option<FlagsPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamePayload {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagsPayload {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Empty strings are treated as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CountryPayload> for Country {
    fn from(payload: CountryPayload) -> Self {
        let flags = payload.flags.unwrap_or_default();

        Country {
            code: payload.cca3,
            name: payload.name.common,
            official_name: non_blank(payload.name.official),
            population: payload.population,
            area: payload.area,
            region: non_blank(payload.region),
            subregion: non_blank(payload.subregion),
            capital: payload.capital.unwrap_or_default(),
            un_member: payload.un_member.unwrap_or(false),
            independent: payload.independent.unwrap_or(false),
            borders: payload.borders.unwrap_or_default(),
            flag: Flag {
                svg: non_blank(flags.svg),
                png: non_blank(flags.png),
                alt: non_blank(flags.alt),
            },
        }
    }
}
