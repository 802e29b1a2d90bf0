//! URL building for the provider calls.

use url::Url;

/// Public REST Countries v3.1 base URL.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested by the full list call.
const LIST_FIELDS: &str = "name,population,region,subregion,cca3,flags,area,unMember,independent";

/// Fields requested by the neighbor batch call.
const NEIGHBOR_FIELDS: &str = "name,cca3,flags";

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid base URL: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS base URLs are allowed")]
    UnsupportedProtocol,
}

/// Builds provider URLs from a base such as `https://restcountries.com/v3.1`.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parses and checks the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::InvalidFormat`] for unparsable input or a URL
    /// that cannot carry a path, [`EndpointError::UnsupportedProtocol`] for
    /// schemes other than HTTP(S).
    pub fn new(base: &str) -> Result<Self, EndpointError> {
        let base = Url::parse(base).map_err(|e| EndpointError::InvalidFormat(e.to_string()))?;

        match base.scheme() {
            "http" | "https" => {}
            _ => return Err(EndpointError::UnsupportedProtocol),
        }

        if base.cannot_be_a_base() {
            return Err(EndpointError::InvalidFormat(
                "URL cannot carry a path".to_string(),
            ));
        }

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/all?fields=...`
    pub fn all(&self) -> Url {
        let mut url = self.join(&["all"]);
        url.set_query(Some(&format!("fields={LIST_FIELDS}")));
        url
    }

    /// `{base}/alpha/{code}`
    pub fn by_code(&self, code: &str) -> Url {
        self.join(&["alpha", code])
    }

    /// `{base}/alpha?codes=A,B&fields=...`
    pub fn by_codes(&self, codes: &[String]) -> Url {
        let mut url = self.join(&["alpha"]);
        url.set_query(Some(&format!(
            "codes={}&fields={NEIGHBOR_FIELDS}",
            codes.join(",")
        )));
        url
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
