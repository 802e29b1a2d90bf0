//! Country detail resolution.

use crate::domain::entities::{Country, CountryDetail};
use crate::domain::repositories::{CountrySource, SourceError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a country and its neighbors.
///
/// Resolution is two sequential provider calls: the country by code, then
/// one batch call for its `borders`. The second call is skipped when the
/// country has no borders.
pub struct DetailService<S: CountrySource + ?Sized> {
    source: Arc<S>,
}

impl<S: CountrySource + ?Sized> DetailService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Resolves the country identified by `code`.
    ///
    /// Returns `Ok(None)` without touching the provider when `code` is
    /// blank.
    ///
    /// A failed neighbor fetch does not fail the resolution: the country is
    /// returned with an empty neighbor list and the failure is logged.
    /// Neighbors are returned in `borders` order whatever order the provider
    /// used.
    ///
    /// # Errors
    ///
    /// Returns the [`SourceError`] of the country lookup.
    pub async fn resolve(&self, code: &str) -> Result<Option<CountryDetail>, SourceError> {
        let code = code.trim();
        if code.is_empty() {
            debug!("Blank country code, skipping resolution");
            return Ok(None);
        }

        let country = self.source.fetch_by_code(code).await?;

        if !country.has_borders() {
            return Ok(Some(CountryDetail::new(country, Vec::new())));
        }

        let neighbors = match self.source.fetch_by_codes(&country.borders).await {
            Ok(found) => order_by_borders(&country.borders, found),
            Err(e) => {
                warn!(
                    code = %country.code,
                    error = %e,
                    "Neighbor lookup failed, returning country without neighbors"
                );
                Vec::new()
            }
        };

        Ok(Some(CountryDetail::new(country, neighbors)))
    }
}

/// Arranges `found` in the order of `borders`, skipping codes with no match.
fn order_by_borders(borders: &[String], mut found: Vec<Country>) -> Vec<Country> {
    let mut ordered = Vec::with_capacity(borders.len());
    for code in borders {
        if let Some(pos) = found.iter().position(|c| &c.code == code) {
            ordered.push(found.swap_remove(pos));
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCountrySource, SourceCall};

    fn usa() -> Country {
        Country::new("USA", "United States").with_borders(["CAN", "MEX"])
    }

    #[tokio::test]
    async fn test_resolve_with_neighbors() {
        let mut source = MockCountrySource::new();

        source
            .expect_fetch_by_code()
            .withf(|code| code == "USA")
            .times(1)
            .returning(|_| Ok(usa()));
        source
            .expect_fetch_by_codes()
            .withf(|codes| codes == ["CAN".to_string(), "MEX".to_string()])
            .times(1)
            .returning(|_| {
                Ok(vec![
                    Country::new("MEX", "Mexico"),
                    Country::new("CAN", "Canada"),
                ])
            });

        let service = DetailService::new(Arc::new(source));

        let detail = service.resolve("USA").await.unwrap().unwrap();

        assert_eq!(detail.country.code, "USA");
        let neighbors: Vec<&str> = detail.neighbors.iter().map(|n| n.code.as_str()).collect();
        assert_eq!(neighbors, vec!["CAN", "MEX"]);
    }

    #[tokio::test]
    async fn test_resolve_without_borders_issues_one_call() {
        let mut source = MockCountrySource::new();

        source
            .expect_fetch_by_code()
            .times(1)
            .returning(|_| Ok(Country::new("AUS", "Australia")));
        source.expect_fetch_by_codes().never();

        let service = DetailService::new(Arc::new(source));

        let detail = service.resolve("AUS").await.unwrap().unwrap();

        assert!(detail.neighbors.is_empty());
    }

    #[tokio::test]
    async fn test_blank_code_is_noop() {
        let mut source = MockCountrySource::new();
        source.expect_fetch_by_code().never();
        source.expect_fetch_by_codes().never();

        let service = DetailService::new(Arc::new(source));

        assert_eq!(service.resolve("").await, Ok(None));
        assert_eq!(service.resolve("   ").await, Ok(None));
    }

    #[tokio::test]
    async fn test_country_status_failure_skips_neighbors() {
        let mut source = MockCountrySource::new();

        source.expect_fetch_by_code().times(1).returning(|_| {
            Err(SourceError::Status {
                call: SourceCall::Country,
                status: 500,
            })
        });
        source.expect_fetch_by_codes().never();

        let service = DetailService::new(Arc::new(source));

        let err = service.resolve("USA").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch country");
    }

    #[tokio::test]
    async fn test_country_transport_failure_is_verbatim() {
        let mut source = MockCountrySource::new();

        source.expect_fetch_by_code().times(1).returning(|_| {
            Err(SourceError::Transport {
                call: SourceCall::Country,
                message: "dns error".to_string(),
            })
        });

        let service = DetailService::new(Arc::new(source));

        let err = service.resolve("USA").await.unwrap_err();

        assert_eq!(err.to_string(), "dns error");
    }

    #[tokio::test]
    async fn test_neighbor_status_failure_is_not_fatal() {
        let mut source = MockCountrySource::new();

        source.expect_fetch_by_code().returning(|_| Ok(usa()));
        source.expect_fetch_by_codes().times(1).returning(|_| {
            Err(SourceError::Status {
                call: SourceCall::Neighbors,
                status: 502,
            })
        });

        let service = DetailService::new(Arc::new(source));

        let detail = service.resolve("USA").await.unwrap().unwrap();

        assert_eq!(detail.country.code, "USA");
        assert!(detail.neighbors.is_empty());
    }

    #[tokio::test]
    async fn test_neighbor_transport_failure_is_not_fatal() {
        let mut source = MockCountrySource::new();

        source.expect_fetch_by_code().returning(|_| Ok(usa()));
        source.expect_fetch_by_codes().times(1).returning(|_| {
            Err(SourceError::Transport {
                call: SourceCall::Neighbors,
                message: "connection reset".to_string(),
            })
        });

        let service = DetailService::new(Arc::new(source));

        let detail = service.resolve("USA").await.unwrap().unwrap();

        assert!(detail.neighbors.is_empty());
    }

    #[test]
    fn test_order_by_borders_skips_missing() {
        let borders = vec!["CAN".to_string(), "XXX".to_string(), "MEX".to_string()];
        let found = vec![
            Country::new("MEX", "Mexico"),
            Country::new("GTM", "Guatemala"),
            Country::new("CAN", "Canada"),
        ];

        let ordered = order_by_borders(&borders, found);

        let codes: Vec<&str> = ordered.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CAN", "MEX"]);
    }
}
