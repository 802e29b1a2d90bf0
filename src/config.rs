//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `COUNTRIES_API_URL` - Provider base URL (default: `https://restcountries.com/v3.1`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PAGE_SIZE` - Countries per ranking page (default: 50, range: 1-500)
//! - `HTTP_TIMEOUT_SECONDS` - Provider request timeout (default: 30)
//! - `RATE_LIMIT_PER_SECOND` - Token refill interval per client IP (default: 2)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst (default: 100)
//! - `PRELOAD_CATALOG` - Load the country list at startup (default: `true`)
//!
//! ```bash
//! export COUNTRIES_API_URL="http://localhost:8080/v3.1"
//! export PAGE_SIZE=25
//! ```

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::options::DEFAULT_PAGE_SIZE;
use crate::infrastructure::rest_countries::{DEFAULT_BASE_URL, Endpoints};

/// Largest accepted `PAGE_SIZE`.
pub const MAX_PAGE_SIZE: usize = 500;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub countries_api_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub page_size: usize,
    pub http_timeout_seconds: u64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    /// When true, the server fetches the catalog right after startup
    /// instead of waiting for the first refresh.
    pub preload_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countries_api_url: DEFAULT_BASE_URL.to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            http_timeout_seconds: 30,
            rate_limit_per_second: 2,
            rate_limit_burst: 100,
            preload_catalog: true,
        }
    }
}

/// Reads `name` and parses it, falling back to `default` when unset or unparsable.
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        })
        .unwrap_or(default)
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Never fails at present; checks live in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            countries_api_url: env::var("COUNTRIES_API_URL").unwrap_or(defaults.countries_api_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            page_size: parse_var("PAGE_SIZE", defaults.page_size),
            http_timeout_seconds: parse_var("HTTP_TIMEOUT_SECONDS", defaults.http_timeout_seconds),
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            ),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),
            preload_catalog: parse_flag("PRELOAD_CATALOG", defaults.preload_catalog),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `countries_api_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `page_size` is outside 1-500
    /// - the timeout or a rate limit setting is 0
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Endpoints::new(&self.countries_api_url) {
            anyhow::bail!(
                "COUNTRIES_API_URL is invalid ({}), got '{}'",
                e,
                self.countries_api_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            anyhow::bail!(
                "PAGE_SIZE must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                self.page_size
            );
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Countries API: {}", self.countries_api_url);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Page size: {}", self.page_size);
        tracing::info!(
            "  Rate limit: {}/s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!("  Preload catalog: {}", self.preload_catalog);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
