#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate, airport, and U.S. state reference types.
//!
//! These types back the geographic half of the screener: approximate metro
//! centroids, the state-capital fallback table, and the FAA hub airports
//! used for proximity. All reference data here is immutable and compiled
//! into the binary.

pub mod centroids;
pub mod states;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A latitude/longitude pair in decimal degrees (WGS84).
///
/// Metro coordinates are estimates (curated centroid or state capital),
/// never authoritative boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// FAA passenger hub classification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HubTier {
    /// Large hub (at least 1% of U.S. passenger boardings).
    Large,
    /// Medium hub (0.25% to 1% of boardings).
    Medium,
}

/// A hub airport from the reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// IATA code (e.g. "ATL").
    #[serde(rename = "iata")]
    pub code: String,
    /// Airport name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Hub classification.
    #[serde(rename = "hub_type")]
    pub hub_tier: HubTier,
}

impl AirportRecord {
    /// Returns the airport location as [`Coordinates`].
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_tier_parses_snake_case() {
        assert_eq!("large".parse::<HubTier>().unwrap(), HubTier::Large);
        assert_eq!(HubTier::Medium.as_ref(), "medium");
    }

    #[test]
    fn airport_serializes_with_export_field_names() {
        let airport = AirportRecord {
            code: "ATL".to_string(),
            name: "Hartsfield-Jackson Atlanta International".to_string(),
            lat: 33.6407,
            lon: -84.4277,
            hub_tier: HubTier::Large,
        };
        let json = serde_json::to_value(&airport).unwrap();
        assert_eq!(json["iata"], "ATL");
        assert_eq!(json["hub_type"], "large");
    }
}
