//! Coordinate fallback chain and nearest-airport search.

use metro_screener_geography_models::centroids::{METRO_CENTROIDS, MetroCentroid};
use metro_screener_geography_models::states::state_capital;
use metro_screener_geography_models::{AirportRecord, Coordinates};
use metro_screener_metro_models::{MetroRecord, round_to};
use metro_screener_normalize::lead_city;

use crate::distance::haversine_miles;

/// Which step of the fallback chain produced a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSource {
    /// The full metro name matched a curated centroid (either direction).
    CuratedName,
    /// The lead city of the metro name matched a curated centroid.
    LeadCity,
    /// The primary state's capital.
    StateCapital,
}

/// An estimated location and how it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    /// Estimated metro location.
    pub coordinates: Coordinates,
    /// Fallback step that produced it.
    pub source: CoordinateSource,
}

/// The closest hub airport to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestAirport {
    /// IATA code.
    pub code: String,
    /// Great-circle distance in miles, rounded to one decimal.
    pub distance_miles: f64,
}

/// Resolves metro locations against immutable reference tables.
///
/// Holds borrowed reference data only; every method is a pure function of
/// its inputs and the tables.
#[derive(Debug, Clone, Copy)]
pub struct GeoResolver<'a> {
    centroids: &'a [MetroCentroid],
    airports: &'a [AirportRecord],
}

impl<'a> GeoResolver<'a> {
    /// Creates a resolver over the given centroid table and airport set.
    #[must_use]
    pub const fn new(centroids: &'a [MetroCentroid], airports: &'a [AirportRecord]) -> Self {
        Self {
            centroids,
            airports,
        }
    }

    /// Creates a resolver over the built-in curated centroid table.
    #[must_use]
    pub const fn with_builtin_centroids(airports: &'a [AirportRecord]) -> Self {
        Self::new(METRO_CENTROIDS, airports)
    }

    /// Estimates a metro's location.
    ///
    /// First match wins:
    /// 1. Case-insensitive containment of the metro name in a curated
    ///    name, or of a curated name in the metro name
    /// 2. Containment of the metro's lead city in a curated name
    /// 3. The capital of `state_code`
    ///
    /// Returns `None` when nothing matches and `state_code` is missing or
    /// unrecognized. Containment is a heuristic: short curated names can
    /// claim unrelated metros (`"Columbus, GA"` matches `"Columbus"`).
    #[must_use]
    pub fn locate(&self, metro_name: &str, state_code: Option<&str>) -> Option<Located> {
        let name = metro_name.trim().to_lowercase();

        if !name.is_empty() {
            let by_name = self.centroids.iter().find(|c| {
                let known = c.name.to_lowercase();
                name.contains(&known) || known.contains(&name)
            });
            if let Some(c) = by_name {
                return Some(Located {
                    coordinates: c.coordinates,
                    source: CoordinateSource::CuratedName,
                });
            }
        }

        let city = lead_city(metro_name).to_lowercase();
        if !city.is_empty()
            && let Some(c) = self
                .centroids
                .iter()
                .find(|c| c.name.to_lowercase().contains(&city))
        {
            return Some(Located {
                coordinates: c.coordinates,
                source: CoordinateSource::LeadCity,
            });
        }

        state_code.and_then(state_capital).map(|coordinates| Located {
            coordinates,
            source: CoordinateSource::StateCapital,
        })
    }

    /// Estimates a metro's coordinates. See [`Self::locate`].
    #[must_use]
    pub fn resolve_coordinates(
        &self,
        metro_name: &str,
        state_code: Option<&str>,
    ) -> Option<Coordinates> {
        self.locate(metro_name, state_code)
            .map(|located| located.coordinates)
    }

    /// Returns `record` with its coordinates and nearest-airport fields set.
    ///
    /// Records whose location cannot be estimated come back with all three
    /// proximity fields unset.
    #[must_use]
    pub fn resolve_geography(&self, record: MetroRecord) -> MetroRecord {
        let coordinates = self.resolve_coordinates(&record.name, record.state_code.as_deref());
        let nearest = coordinates.and_then(|c| nearest_airport(c, self.airports));

        MetroRecord {
            coordinates,
            nearest_airport_code: nearest.as_ref().map(|n| n.code.clone()),
            airport_distance_miles: nearest.map(|n| n.distance_miles),
            ..record
        }
    }

    /// Applies [`Self::resolve_geography`] to every record, preserving order.
    #[must_use]
    pub fn resolve_all(&self, records: Vec<MetroRecord>) -> Vec<MetroRecord> {
        let resolved: Vec<MetroRecord> = records
            .into_iter()
            .map(|record| self.resolve_geography(record))
            .collect();

        let unresolved = resolved.iter().filter(|r| r.coordinates.is_none()).count();
        log::info!(
            "Resolved airport proximity for {} of {} metros",
            resolved.len() - unresolved,
            resolved.len()
        );
        if unresolved > 0 {
            log::warn!("{unresolved} metros have no estimated location");
        }

        resolved
    }
}

/// Finds the airport closest to `coordinates`.
///
/// Scans the whole set; on an exact tie the earlier airport wins. Returns
/// `None` for an empty set.
#[must_use]
pub fn nearest_airport(coordinates: Coordinates, airports: &[AirportRecord]) -> Option<NearestAirport> {
    let mut best: Option<(&AirportRecord, f64)> = None;

    for airport in airports {
        let distance = haversine_miles(coordinates, airport.coordinates());
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((airport, distance)),
        }
    }

    best.map(|(airport, distance)| NearestAirport {
        code: airport.code.clone(),
        distance_miles: round_to(distance, 1),
    })
}
