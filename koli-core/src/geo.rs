use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point via the haversine formula,
    /// rounded to two decimals.
    pub fn distance_km(&self, other: GeoPoint) -> f64 {
        round2(self.distance_m(other) / 1000.0)
    }

    /// Great-circle distance to another point in meters, unrounded.
    ///
    /// Movement thresholds compare against this; the two-decimal rounding
    /// of `distance_km` quantizes short hops to ten-meter steps.
    pub fn distance_m(&self, other: GeoPoint) -> f64 {
        let lat_from = self.latitude.to_radians();
        let lat_to = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat_from.cos() * lat_to.cos() * (delta_lon / 2.0).sin().powi(2);
        let central_angle = 2.0 * h.sqrt().asin();

        EARTH_RADIUS_KM * central_angle * 1000.0
    }
}

/// Round a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
