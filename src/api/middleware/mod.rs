//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, CORS, and observability middleware.

pub mod cors;
pub mod rate_limit;
pub mod tracing;
