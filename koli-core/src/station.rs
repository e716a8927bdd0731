use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Kind of terminal a station entry represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationCategory {
    BusStation,
    RailStation,
    TransitHub,
    Other,
}

/// An interurban departure station a sender can route packages through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub point: Option<GeoPoint>,
    pub category: StationCategory,
}

impl Station {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
        category: StationCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            point: None,
            category,
        }
    }

    /// Attach a coordinate to the station.
    pub fn with_point(mut self, latitude: f64, longitude: f64) -> Self {
        self.point = Some(GeoPoint::new(latitude, longitude));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_point_sets_coordinate() {
        let station = Station::new(
            "fallback/adjame",
            "Gare Routière d'Adjamé",
            "Adjamé, Abidjan",
            StationCategory::BusStation,
        )
        .with_point(5.3664, -4.0217);

        let point = station.point.unwrap();
        assert_eq!(point.latitude, 5.3664);
        assert_eq!(point.longitude, -4.0217);
    }

    #[test]
    fn test_station_category_round_trip() {
        let json = serde_json::to_string(&StationCategory::TransitHub).unwrap();
        assert_eq!(json, r#""TRANSIT_HUB""#);
        let parsed: StationCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, StationCategory::TransitHub);
    }
}
