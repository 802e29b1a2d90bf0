//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`rest_countries`] - HTTP client for the REST Countries v3.1 API

pub mod rest_countries;
