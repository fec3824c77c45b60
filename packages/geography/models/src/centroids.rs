//! Curated approximate centroids for major metro areas.
//!
//! Keys are metro names without the state suffix, matched against raw
//! metro names by case-insensitive containment. Iteration order matters:
//! the first entry that matches wins, so more specific names (e.g.
//! `Cleveland-Elyria`) are listed ahead of their shorter forms.

use crate::Coordinates;

/// A curated metro centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetroCentroid {
    /// Metro name as used for matching (no state suffix).
    pub name: &'static str,
    /// Approximate center of the metro's principal city.
    pub coordinates: Coordinates,
}

const fn centroid(name: &'static str, lat: f64, lon: f64) -> MetroCentroid {
    MetroCentroid {
        name,
        coordinates: Coordinates::new(lat, lon),
    }
}

/// Curated centroid table, in match-priority order.
pub const METRO_CENTROIDS: &[MetroCentroid] = &[
    centroid("New York-Newark-Jersey City", 40.7128, -74.0060),
    centroid("Los Angeles-Long Beach-Anaheim", 34.0522, -118.2437),
    centroid("Chicago-Naperville-Elgin", 41.8781, -87.6298),
    centroid("Dallas-Fort Worth-Arlington", 32.7767, -96.7970),
    centroid("Houston-The Woodlands-Sugar Land", 29.7604, -95.3698),
    centroid("Washington-Arlington-Alexandria", 38.9072, -77.0369),
    centroid("Miami-Fort Lauderdale-Pompano Beach", 25.7617, -80.1918),
    centroid("Philadelphia-Camden-Wilmington", 39.9526, -75.1652),
    centroid("Atlanta-Sandy Springs-Alpharetta", 33.7490, -84.3880),
    centroid("Boston-Cambridge-Newton", 42.3601, -71.0589),
    centroid("Phoenix-Mesa-Chandler", 33.4484, -112.0740),
    centroid("San Francisco-Oakland-Berkeley", 37.7749, -122.4194),
    centroid("Riverside-San Bernardino-Ontario", 33.9533, -117.3962),
    centroid("Detroit-Warren-Dearborn", 42.3314, -83.0458),
    centroid("Seattle-Tacoma-Bellevue", 47.6062, -122.3321),
    centroid("Minneapolis-St. Paul-Bloomington", 44.9778, -93.2650),
    centroid("San Diego-Chula Vista-Carlsbad", 32.7157, -117.1611),
    centroid("Tampa-St. Petersburg-Clearwater", 27.9506, -82.4572),
    centroid("Denver-Aurora-Lakewood", 39.7392, -104.9903),
    centroid("St. Louis", 38.6270, -90.1994),
    centroid("Baltimore-Columbia-Towson", 39.2904, -76.6122),
    centroid("Orlando-Kissimmee-Sanford", 28.5383, -81.3792),
    centroid("Charlotte-Concord-Gastonia", 35.2271, -80.8431),
    centroid("San Antonio-New Braunfels", 29.4241, -98.4936),
    centroid("Portland-Vancouver-Hillsboro", 45.5152, -122.6784),
    centroid("Pittsburgh", 40.4406, -79.9959),
    centroid("Sacramento-Roseville-Folsom", 38.5816, -121.4944),
    centroid("Austin-Round Rock-Georgetown", 30.2672, -97.7431),
    centroid("Las Vegas-Henderson-Paradise", 36.1699, -115.1398),
    centroid("Cincinnati", 39.1031, -84.5120),
    centroid("Kansas City", 39.0997, -94.5786),
    centroid("Columbus", 39.9612, -82.9988),
    centroid("Cleveland-Elyria", 41.4993, -81.6944),
    centroid("Indianapolis-Carmel-Anderson", 39.7684, -86.1581),
    centroid("Nashville-Davidson--Murfreesboro--Franklin", 36.1627, -86.7816),
    centroid("Jacksonville", 30.3322, -81.6557),
    centroid("Memphis", 35.1495, -90.0490),
    centroid("Oklahoma City", 35.4676, -97.5164),
    centroid("Raleigh-Cary", 35.7796, -78.6382),
    centroid("Louisville/Jefferson County", 38.2527, -85.7585),
    centroid("Richmond", 37.5407, -77.4360),
    centroid("Salt Lake City", 40.7608, -111.8910),
    centroid("Birmingham-Hoover", 33.5186, -86.8104),
    centroid("Grand Rapids-Kentwood", 42.9634, -85.6681),
    centroid("Tucson", 32.2226, -110.9747),
    centroid("Buffalo-Cheektowaga", 42.8864, -78.8784),
    centroid("Rochester", 43.1566, -77.6088),
    centroid("Tulsa", 36.1540, -95.9928),
    centroid("Urban Honolulu", 21.3069, -157.8583),
    centroid("Omaha-Council Bluffs", 41.2565, -95.9345),
    centroid("Albuquerque", 35.0844, -106.6504),
    centroid("Winter Park", 28.6000, -81.3392),
    centroid("Kissimmee", 28.2920, -81.4076),
    centroid("Cleveland", 41.4993, -81.6944),
    centroid("Akron", 41.0814, -81.5190),
    centroid("Toledo", 41.6528, -83.5379),
    centroid("Youngstown-Warren-Boardman", 41.0998, -80.6495),
    centroid("Dayton-Kettering", 39.7589, -84.1916),
    centroid("Lakeland", 28.0395, -81.9498),
    centroid("Winter Haven", 28.0225, -81.7329),
    centroid("Lakeland-Winter Haven", 28.0395, -81.9498),
    centroid("Deltona-Daytona Beach-Ormond Beach", 29.1872, -81.0487),
    centroid("Palm Bay-Melbourne-Titusville", 28.0836, -80.6081),
    centroid("Cape Coral-Fort Myers", 26.5629, -81.9495),
    centroid("North Port-Sarasota-Bradenton", 27.3364, -82.5307),
    centroid("Pensacola-Ferry Pass-Brent", 30.4213, -87.2169),
    centroid("Tallahassee", 30.4383, -84.2807),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = METRO_CENTROIDS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn names_carry_no_state_suffix() {
        for c in METRO_CENTROIDS {
            assert!(!c.name.contains(','), "{} has a state suffix", c.name);
        }
    }

    #[test]
    fn specific_cleveland_precedes_short_form() {
        let pos = |name: &str| METRO_CENTROIDS.iter().position(|c| c.name == name).unwrap();
        assert!(pos("Cleveland-Elyria") < pos("Cleveland"));
    }
}
