#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Metro coordinate estimation and hub airport proximity.
//!
//! Metro locations are estimated, not looked up: a curated centroid table
//! is tried by name, then by lead city, and finally the primary state's
//! capital stands in. The nearest FAA hub is the global minimum of
//! great-circle distances over the full airport reference set.

pub mod airports;
pub mod distance;
pub mod resolver;

use thiserror::Error;

pub use resolver::{CoordinateSource, GeoResolver, Located, NearestAirport, nearest_airport};

/// Errors that can occur while loading geographic reference data.
#[derive(Debug, Error)]
pub enum GeoError {
    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The airport reference set is unusable.
    #[error("Invalid airport data: {message}")]
    InvalidAirports {
        /// Description of what went wrong.
        message: String,
    },
}
