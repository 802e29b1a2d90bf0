//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// `level` is an `EnvFilter` directive string such as `info` or
/// `world_ranks=debug,tower_http=info`. `format` is `text` or `json`.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log filter '{level}'"))?;
    let json = format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
