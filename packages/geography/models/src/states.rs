//! U.S. state reference table.
//!
//! Two-letter codes for the 50 states + DC and the location of each state
//! capital. The capital is the coarse fallback
//! location for metros that match no curated centroid.

use crate::Coordinates;

/// Two-letter codes for the 50 states + DC.
pub const STATE_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Returns `true` if `code` is one of [`STATE_CODES`] (case-sensitive).
#[must_use]
pub fn is_state_code(code: &str) -> bool {
    STATE_CODES.contains(&code)
}

/// Maps a two-letter state code to the location of its capital.
///
/// DC maps to the District itself. Returns `None` for unrecognized codes.
#[must_use]
pub fn state_capital(code: &str) -> Option<Coordinates> {
    let (lat, lon) = match code {
        "AL" => (32.377, -86.300),
        "AK" => (58.302, -134.420),
        "AZ" => (33.448, -112.074),
        "AR" => (34.746, -92.290),
        "CA" => (38.576, -121.494),
        "CO" => (39.739, -104.990),
        "CT" => (41.764, -72.683),
        "DE" => (39.157, -75.519),
        "DC" => (38.907, -77.037),
        "FL" => (30.438, -84.281),
        "GA" => (33.749, -84.388),
        "HI" => (21.307, -157.858),
        "ID" => (43.618, -116.215),
        "IL" => (39.798, -89.654),
        "IN" => (39.768, -86.158),
        "IA" => (41.591, -93.604),
        "KS" => (39.048, -95.678),
        "KY" => (38.187, -84.875),
        "LA" => (30.457, -91.187),
        "ME" => (44.307, -69.782),
        "MD" => (38.979, -76.490),
        "MA" => (42.358, -71.064),
        "MI" => (42.733, -84.555),
        "MN" => (44.955, -93.102),
        "MS" => (32.303, -90.182),
        "MO" => (38.579, -92.173),
        "MT" => (46.585, -112.018),
        "NE" => (40.808, -96.700),
        "NV" => (39.164, -119.766),
        "NH" => (43.206, -71.538),
        "NJ" => (40.221, -74.756),
        "NM" => (35.682, -105.940),
        "NY" => (42.653, -73.757),
        "NC" => (35.780, -78.639),
        "ND" => (46.820, -100.783),
        "OH" => (39.962, -82.999),
        "OK" => (35.492, -97.503),
        "OR" => (44.938, -123.030),
        "PA" => (40.264, -76.884),
        "RI" => (41.824, -71.412),
        "SC" => (34.000, -81.033),
        "SD" => (44.368, -100.336),
        "TN" => (36.166, -86.784),
        "TX" => (30.275, -97.740),
        "UT" => (40.777, -111.888),
        "VT" => (44.260, -72.576),
        "VA" => (37.538, -77.434),
        "WA" => (47.035, -122.905),
        "WV" => (38.336, -81.612),
        "WI" => (43.074, -89.384),
        "WY" => (41.140, -104.820),
        _ => return None,
    };
    Some(Coordinates::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_count() {
        assert_eq!(STATE_CODES.len(), 51);
    }

    #[test]
    fn every_code_has_a_capital() {
        for code in STATE_CODES {
            assert!(state_capital(code).is_some(), "no capital for {code}");
        }
    }

    #[test]
    fn capitals_are_inside_us_bounds() {
        for code in STATE_CODES {
            let c = state_capital(code).unwrap();
            assert!((18.0..72.0).contains(&c.lat), "{code} lat {}", c.lat);
            assert!((-170.0..-66.0).contains(&c.lon), "{code} lon {}", c.lon);
        }
    }

    #[test]
    fn unknown_code() {
        assert!(state_capital("XX").is_none());
        assert!(!is_state_code("XX"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(is_state_code("TX"));
        assert!(!is_state_code("tx"));
        assert!(state_capital("tx").is_none());
    }
}
