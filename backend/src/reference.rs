//! Static reference tables for US states.
//!
//! Both tables cover the 50 states and are keyed by the full state name as it
//! appears in the dataset. Lookups are exact and case-sensitive; a name that
//! is not in a table yields `None`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Geographic position of a state's label marker.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

const STATES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

const COORDINATES: [(&str, f64, f64); 50] = [
    ("New York", 43.0000, -75.0000),
    ("Texas", 31.0000, -100.0000),
    ("California", 36.7783, -119.4179),
    ("Illinois", 40.0000, -89.0000),
    ("Pennsylvania", 41.2033, -77.1945),
    ("Nevada", 39.5000, -117.0000),
    ("Colorado", 39.1130, -105.3589),
    ("Washington", 47.7511, -120.7401),
    ("Florida", 27.9944, -81.7603),
    ("Minnesota", 46.7296, -94.6859),
    ("Montana", 46.8797, -110.3626),
    ("Tennessee", 35.5175, -86.5804),
    ("Nebraska", 41.4925, -99.9018),
    ("Alabama", 32.3182, -86.9023),
    ("Maine", 45.2538, -69.4455),
    ("Alaska", 64.2008, -149.4937),
    ("Hawaii", 20.7967, -156.3319),
    ("Wyoming", 43.0759, -107.2903),
    ("Virginia", 37.4316, -78.6569),
    ("Michigan", 44.1822, -84.5068),
    ("Missouri", 38.5739, -92.6038),
    ("Utah", 39.3200, -111.0937),
    ("Oregon", 43.8041, -120.5542),
    ("Louisiana", 30.9843, -91.9623),
    ("Idaho", 44.0682, -114.7420),
    ("Arizona", 34.0489, -111.0937),
    ("New Mexico", 34.5199, -105.8701),
    ("Georgia", 32.1656, -82.9001),
    ("South Carolina", 33.8361, -81.1637),
    ("North Carolina", 35.7596, -79.0193),
    ("Ohio", 40.4173, -82.9071),
    ("Kentucky", 37.8393, -84.2700),
    ("Mississippi", 32.3547, -89.3985),
    ("Arkansas", 35.2010, -91.8318),
    ("Oklahoma", 35.4676, -97.5164),
    ("Kansas", 39.0119, -98.4842),
    ("South Dakota", 43.9695, -99.9018),
    ("North Dakota", 47.5515, -101.0020),
    ("Iowa", 41.8780, -93.0977),
    ("Wisconsin", 44.5000, -89.5000),
    ("Indiana", 40.2672, -86.1349),
    ("West Virginia", 38.5976, -80.4549),
    ("Maryland", 39.0458, -76.6413),
    ("Delaware", 38.9108, -75.5277),
    ("New Jersey", 40.0583, -74.4057),
    ("Connecticut", 41.6032, -73.0877),
    ("Rhode Island", 41.5801, -71.4774),
    ("Massachusetts", 42.4072, -71.3824),
    ("Vermont", 44.5588, -72.5778),
    ("New Hampshire", 43.1939, -71.5724),
];

static ABBREVIATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATES.into_iter().collect());

static STATE_COORDINATES: LazyLock<HashMap<&'static str, Coordinates>> = LazyLock::new(|| {
    COORDINATES
        .into_iter()
        .map(|(name, lat, lon)| (name, Coordinates { lat, lon }))
        .collect()
});

/// Two-letter postal abbreviation for a state name.
pub fn state_abbreviation(state: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(state).copied()
}

/// Label coordinates for a state name.
pub fn state_coordinates(state: &str) -> Option<Coordinates> {
    STATE_COORDINATES.get(state).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_cover_the_same_fifty_states() {
        assert_eq!(ABBREVIATIONS.len(), 50);
        assert_eq!(STATE_COORDINATES.len(), 50);
        for name in ABBREVIATIONS.keys() {
            assert!(
                STATE_COORDINATES.contains_key(name),
                "{} has no coordinates",
                name
            );
        }
    }

    #[test]
    fn test_known_states() {
        assert_eq!(state_abbreviation("Texas"), Some("TX"));
        assert_eq!(state_abbreviation("New Hampshire"), Some("NH"));
        let maine = state_coordinates("Maine").unwrap();
        assert_eq!(maine.lat, 45.2538);
        assert_eq!(maine.lon, -69.4455);
    }

    #[test]
    fn test_unknown_state_is_none() {
        assert_eq!(state_abbreviation("Puerto Rico"), None);
        assert_eq!(state_coordinates("Puerto Rico"), None);
        assert_eq!(state_abbreviation("texas"), None);
    }
}
