//! FAA hub airport reference set.
//!
//! The reference set uses the `faa_hubs.json` layout: separate lists of
//! large and medium hubs. A default copy is embedded at compile time so
//! the screener runs without a separate airport file.

use metro_screener_geography_models::{AirportRecord, HubTier};
use serde::Deserialize;

use crate::GeoError;

/// Hub list embedded at compile time.
const DEFAULT_HUBS_JSON: &str = include_str!("../faa_hubs.json");

/// A hub entry as listed in `faa_hubs.json`.
#[derive(Debug, Deserialize)]
struct HubEntry {
    iata: String,
    name: String,
    lat: f64,
    lon: f64,
}

/// The `faa_hubs.json` document.
#[derive(Debug, Deserialize)]
struct HubsDocument {
    large_hubs: Vec<HubEntry>,
    #[serde(default)]
    medium_hubs: Vec<HubEntry>,
}

/// Parses a `faa_hubs.json` document into airport records.
///
/// Large hubs come first, then medium hubs, each in file order. This order
/// decides exact distance ties.
///
/// # Errors
///
/// Returns [`GeoError::Json`] if the document is malformed, or
/// [`GeoError::InvalidAirports`] if it lists no airports or an airport has
/// out-of-range coordinates.
pub fn parse_hubs(json: &str) -> Result<Vec<AirportRecord>, GeoError> {
    let doc: HubsDocument = serde_json::from_str(json)?;

    let tiers = doc
        .large_hubs
        .into_iter()
        .map(|hub| (hub, HubTier::Large))
        .chain(
            doc.medium_hubs
                .into_iter()
                .map(|hub| (hub, HubTier::Medium)),
        );

    let mut airports = Vec::new();
    for (hub, hub_tier) in tiers {
        if !(-90.0..=90.0).contains(&hub.lat) || !(-180.0..=180.0).contains(&hub.lon) {
            return Err(GeoError::InvalidAirports {
                message: format!("{} has out-of-range coordinates", hub.iata),
            });
        }
        airports.push(AirportRecord {
            code: hub.iata,
            name: hub.name,
            lat: hub.lat,
            lon: hub.lon,
            hub_tier,
        });
    }

    if airports.is_empty() {
        return Err(GeoError::InvalidAirports {
            message: "no airports listed".to_string(),
        });
    }

    log::debug!("Parsed {} hub airports", airports.len());
    Ok(airports)
}

/// Returns the embedded default hub airports.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed (this is a compile-time
/// guarantee since the document is embedded).
#[must_use]
pub fn default_airports() -> Vec<AirportRecord> {
    parse_hubs(DEFAULT_HUBS_JSON)
        .unwrap_or_else(|e| panic!("Failed to parse embedded faa_hubs.json: {e}"))
}
