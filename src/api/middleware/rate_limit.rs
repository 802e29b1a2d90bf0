//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for the API.
///
/// # Limits
///
/// - **Rate**: one token every `per_second` seconds (`RATE_LIMIT_PER_SECOND`)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`)
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error when either setting is 0.
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit settings")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        assert!(layer(2, 100).is_ok());
    }

    #[test]
    fn test_zero_settings_are_rejected() {
        assert!(layer(0, 100).is_err());
        assert!(layer(2, 0).is_err());
    }
}
