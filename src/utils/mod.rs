//! Utility functions used across the application.
//!
//! - [`country_code`] - Country code validation for request paths

pub mod country_code;
