use serde::Deserialize;

use super::Side;

/// A named place with its coordinates in decimal degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// Two locations in the same region and the precomputed distance between them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationPair {
    pub locations: [Location; 2],
    /// Distance in kilometres.
    #[serde(rename = "dist")]
    pub distance: f64,
}

impl LocationPair {
    pub fn names(&self) -> [&str; 2] {
        [
            self.locations[0].name.as_str(),
            self.locations[1].name.as_str(),
        ]
    }
}

/// One question: an Ohio pair against a pair abroad.
///
/// `ratio` is `ohio.distance / abroad.distance` and is the ground truth used
/// when checking answers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonRecord {
    pub ohio: LocationPair,
    pub abroad: LocationPair,
    pub ratio: f64,
}

impl ComparisonRecord {
    /// The side whose pair is closer together. A ratio of exactly 1 goes to
    /// the abroad pair.
    pub fn correct_side(&self) -> Side {
        if self.ratio < 1.0 {
            Side::Ohio
        } else {
            Side::Abroad
        }
    }

    pub fn pair(&self, side: Side) -> &LocationPair {
        match side {
            Side::Ohio => &self.ohio,
            Side::Abroad => &self.abroad,
        }
    }

    /// Location names used for disjoint sampling.
    pub fn ohio_names(&self) -> [&str; 2] {
        self.ohio.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ratio: f64) -> ComparisonRecord {
        let pair = |a: &str, b: &str, distance: f64| LocationPair {
            locations: [Location::new(a, 0.0, 0.0), Location::new(b, 1.0, 1.0)],
            distance,
        };
        ComparisonRecord {
            ohio: pair("Lima", "Findlay", 50.0),
            abroad: pair("Lyon", "Geneva", 100.0),
            ratio,
        }
    }

    #[test]
    fn ratio_below_one_means_ohio_is_closer() {
        assert_eq!(record(0.5).correct_side(), Side::Ohio);
        assert_eq!(record(0.999).correct_side(), Side::Ohio);
    }

    #[test]
    fn ratio_of_one_goes_to_abroad() {
        assert_eq!(record(1.0).correct_side(), Side::Abroad);
        assert_eq!(record(2.5).correct_side(), Side::Abroad);
    }

    #[test]
    fn deserializes_source_field_names() {
        let json = r#"{
            "ohio": {
                "locations": [
                    {"name": "Lima", "lat": 40.74, "lon": -84.1},
                    {"name": "Findlay", "lat": 41.04, "lon": -83.65}
                ],
                "dist": 50.2
            },
            "abroad": {
                "locations": [
                    {"name": "Lyon", "lat": 45.76, "lon": 4.83},
                    {"name": "Geneva", "lat": 46.2, "lon": 6.14}
                ],
                "dist": 112.7,
                "country": "FR"
            },
            "ratio": 0.445
        }"#;

        let parsed: ComparisonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ohio_names(), ["Lima", "Findlay"]);
        assert_eq!(parsed.abroad.locations[1].latitude, 46.2);
        assert_eq!(parsed.pair(Side::Abroad).distance, 112.7);
        assert_eq!(parsed.correct_side(), Side::Ohio);
    }
}
