use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// Used for any region without a known centroid
pub const FALLBACK_CENTROID: (f64, f64) = (37.0, -95.0);

/// Approximate (lat, lon) centroids
static STATE_CENTROIDS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        ("AL", (32.8067, -86.7911)),
        ("AZ", (33.7298, -111.4312)),
        ("AR", (34.9697, -92.3731)),
        ("CA", (36.1162, -119.6816)),
        ("CO", (39.0598, -105.3111)),
        ("CT", (41.5978, -72.7554)),
        ("DC", (38.9072, -77.0369)),
        ("FL", (27.7663, -81.6860)),
        ("GA", (33.0406, -83.6431)),
        ("ID", (44.2405, -114.4788)),
        ("IL", (40.3495, -88.9861)),
        ("IN", (39.8494, -86.2583)),
        ("IA", (42.0115, -93.2105)),
        ("KS", (38.5266, -96.7265)),
        ("KY", (37.6681, -84.6701)),
        ("LA", (31.1695, -91.8678)),
        ("MD", (39.0639, -76.8021)),
        ("MI", (43.3266, -84.5361)),
        ("MN", (45.6945, -93.9002)),
        ("MO", (38.4561, -92.2884)),
        ("MS", (32.7416, -89.6787)),
        ("NC", (35.6301, -79.8064)),
        ("ND", (47.5289, -99.7840)),
        ("NE", (41.1254, -98.2681)),
        ("NH", (43.2200, -71.5505)),
        ("NJ", (40.2989, -74.5210)),
        ("NM", (34.5000, -106.2485)),
        ("NV", (38.3135, -117.0556)),
        ("NY", (42.1657, -74.9481)),
        ("OH", (40.3888, -82.7649)),
        ("OK", (35.5653, -96.9289)),
        ("OR", (44.5720, -122.0709)),
        ("PA", (40.5908, -77.2098)),
        ("SC", (33.8569, -80.9450)),
        ("SD", (44.2998, -99.4388)),
        ("TN", (35.7478, -86.6923)),
        ("TX", (31.0545, -97.5635)),
        ("UT", (40.1500, -111.8624)),
        ("VA", (37.7693, -78.1699)),
        ("VT", (44.0687, -72.6658)),
        ("WA", (47.4009, -121.4905)),
        ("WI", (44.2685, -89.6165)),
        ("WV", (38.4912, -80.9545)),
    ])
});

/// Centroid for `code`: configured override, built-in table, then fallback
pub fn centroid(code: &str, overrides: &BTreeMap<String, [f64; 2]>) -> (f64, f64) {
    if let Some([lat, lon]) = overrides
        .iter()
        .find(|(key, _)| key.trim().eq_ignore_ascii_case(code))
        .map(|(_, value)| *value)
    {
        return (lat, lon);
    }

    STATE_CENTROIDS
        .get(code)
        .copied()
        .unwrap_or(FALLBACK_CENTROID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::is_valid_region;

    #[test]
    fn test_known_centroid() {
        assert_eq!(centroid("TX", &BTreeMap::new()), (31.0545, -97.5635));
    }

    #[test]
    fn test_missing_centroid_falls_back() {
        assert!(!STATE_CENTROIDS.contains_key("AK"));
        assert_eq!(centroid("AK", &BTreeMap::new()), FALLBACK_CENTROID);
        assert_eq!(centroid("ZZ", &BTreeMap::new()), FALLBACK_CENTROID);
    }

    #[test]
    fn test_override_wins() {
        let overrides = BTreeMap::from([("ak".to_string(), [61.37, -152.40]), ("TX".to_string(), [30.0, -97.0])]);
        assert_eq!(centroid("AK", &overrides), (61.37, -152.40));
        assert_eq!(centroid("TX", &overrides), (30.0, -97.0));
    }

    #[test]
    fn test_every_builtin_centroid_is_a_valid_region() {
        for code in STATE_CENTROIDS.keys() {
            assert!(is_valid_region(code), "{} is not a region code", code);
        }
        assert_eq!(STATE_CENTROIDS.len(), 43);
    }
}
