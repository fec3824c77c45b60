//! Great-circle distance on a spherical earth.

use metro_screener_geography_models::Coordinates;

/// Earth radius used for all distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Haversine distance between two points, in miles.
#[must_use]
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_MILES
}
