//! reqwest-backed country source.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::endpoints::Endpoints;
use super::payload::CountryPayload;
use crate::domain::entities::Country;
use crate::domain::repositories::{CountrySource, SourceCall, SourceError};

/// HTTP client for the REST Countries API.
///
/// Each trait method issues exactly one GET request. Nothing is cached or
/// retried.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    endpoints: Endpoints,
}

impl RestCountriesClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoints = Endpoints::new(base_url).context("Invalid countries API URL")?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, call: SourceCall, url: Url) -> Result<T, SourceError> {
        debug!(call = call.as_str(), %url, "Provider request");

        let result = self.send(call, url).await;
        let outcome = match &result {
            Ok(_) => "success",
            Err(SourceError::Status { .. }) => "status",
            Err(SourceError::Malformed { .. }) => "malformed",
            Err(_) => "transport",
        };
        metrics::counter!(
            "country_source_requests_total",
            "call" => call.as_str(),
            "outcome" => outcome
        )
        .increment(1);

        result
    }

    async fn send<T: DeserializeOwned>(&self, call: SourceCall, url: Url) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                call,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(call = call.as_str(), status = status.as_u16(), "Provider returned error status");
            return Err(SourceError::Status {
                call,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                SourceError::Malformed {
                    call,
                    message: e.to_string(),
                }
            } else {
                SourceError::Transport {
                    call,
                    message: e.to_string(),
                }
            }
        })
    }
}

fn into_countries(payloads: Vec<CountryPayload>) -> Vec<Country> {
    payloads.into_iter().map(Country::from).collect()
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let payloads: Vec<CountryPayload> = self
            .get_json(SourceCall::AllCountries, self.endpoints.all())
            .await?;

        Ok(into_countries(payloads))
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError> {
        let payloads: Vec<CountryPayload> = self
            .get_json(SourceCall::Country, self.endpoints.by_code(code))
            .await?;

        payloads
            .into_iter()
            .next()
            .map(Country::from)
            .ok_or_else(|| SourceError::Missing {
                code: code.to_string(),
            })
    }

    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>, SourceError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let payloads: Vec<CountryPayload> = self
            .get_json(SourceCall::Neighbors, self.endpoints.by_codes(codes))
            .await?;

        Ok(into_countries(payloads))
    }
}
