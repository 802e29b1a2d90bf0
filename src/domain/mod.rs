//! Domain layer containing country entities and the ranking logic.
//!
//! # Architecture
//!
//! - [`entities`] - Country records and resolved details
//! - [`repositories`] - The [`repositories::CountrySource`] trait and its errors
//! - [`pipeline`] - Pure filter, sort and paginate stages
//! - [`options`] - Regions, sort options and page size as one value
//! - [`generation`] - Request generation guard for stale results
//!
//! The domain layer has no dependency on HTTP, the provider client or the
//! presentation layer. Orchestration lives in [`crate::application`].
//!
//! # Data Flow
//!
//! 1. A [`repositories::CountrySource`] returns the full list
//! 2. [`pipeline::filter`] keeps matching countries
//! 3. [`pipeline::sort`] orders them by the chosen key
//! 4. [`pipeline::paginate`] cuts the requested page

pub mod entities;
pub mod generation;
pub mod options;
pub mod pipeline;
pub mod repositories;
