//! Source trait for country records.

use crate::domain::entities::Country;
use async_trait::async_trait;

/// The three provider calls the service issues.
///
/// Each call site has its own fixed failure message for non-success
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    /// Full list with the ranking field subset.
    AllCountries,
    /// Single record by code.
    Country,
    /// Neighbor batch by comma-joined codes.
    Neighbors,
}

impl SourceCall {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceCall::AllCountries => "all_countries",
            SourceCall::Country => "country",
            SourceCall::Neighbors => "neighbors",
        }
    }

    /// Message reported when the provider answers with a non-success status.
    pub fn failure_message(self) -> &'static str {
        match self {
            SourceCall::AllCountries => "Failed to fetch countries",
            SourceCall::Country => "Failed to fetch country",
            SourceCall::Neighbors => "Failed to fetch neighbors",
        }
    }
}

/// Errors returned by a [`CountrySource`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Provider answered with a non-success HTTP status.
    #[error("{}", .call.failure_message())]
    Status { call: SourceCall, status: u16 },

    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error("{message}")]
    Transport { call: SourceCall, message: String },

    /// Response body could not be decoded.
    #[error("{message}")]
    Malformed { call: SourceCall, message: String },

    /// Single-code lookup returned an empty array.
    #[error("No country found for code {code}")]
    Missing { code: String },
}

impl SourceError {
    pub fn call(&self) -> SourceCall {
        match self {
            SourceError::Status { call, .. }
            | SourceError::Transport { call, .. }
            | SourceError::Malformed { call, .. } => *call,
            SourceError::Missing { .. } => SourceCall::Country,
        }
    }

    /// Returns true when the provider reported the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SourceError::Status { status: 404, .. } | SourceError::Missing { .. }
        )
    }
}

/// Read-only access to country records.
///
/// # Implementations
///
/// - [`crate::infrastructure::rest_countries::RestCountriesClient`] - REST Countries v3.1
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches every country with the ranking field subset.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] tagged [`SourceCall::AllCountries`].
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;

    /// Fetches one country by code, including its `borders`.
    ///
    /// The provider answers with an array; the first element is the match.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Missing`] if the array is empty, otherwise a
    /// [`SourceError`] tagged [`SourceCall::Country`].
    async fn fetch_by_code(&self, code: &str) -> Result<Country, SourceError>;

    /// Fetches a batch of countries in one request.
    ///
    /// Result order is provider-determined and need not match `codes`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] tagged [`SourceCall::Neighbors`].
    async fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>, SourceError>;
}
