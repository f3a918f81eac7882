//! Coordinates and great-circle distance
//!
//! All angles are decimal degrees. Distances are kilometres.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface (latitude, longitude in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to another coordinate (km)
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Axis-aligned lat/lng envelope (inclusive on all sides)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self { min_lat, max_lat, min_lng, max_lng }
    }

    /// Bounding envelope of mainland India plus island territories
    pub const INDIA: GeoBounds = GeoBounds::new(6.0, 37.0, 68.0, 98.0);

    /// Independent latitude and longitude bound checks.
    /// NaN components never fall inside.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lat >= self.min_lat
            && coord.lat <= self.max_lat
            && coord.lng >= self.min_lng
            && coord.lng <= self.max_lng
    }

    pub fn is_well_formed(&self) -> bool {
        self.min_lat <= self.max_lat && self.min_lng <= self.max_lng
    }
}

/// Haversine great-circle distance in kilometres
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp guards against a > 1 from rounding on antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_known_distance() {
        // Delhi to Mumbai is roughly 1150 km
        let d = haversine_km(28.6139, 77.2090, 19.0760, 72.8777);
        assert!(d > 1100.0 && d < 1200.0, "got {}", d);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let d = haversine_km(10.0, 78.0, 11.0, 78.0);
        assert_relative_eq!(d, 111.19, epsilon = 0.1);
    }

    #[test]
    fn test_haversine_zero() {
        assert_relative_eq!(haversine_km(13.0, 80.0, 13.0, 80.0), 0.0);
    }

    #[test]
    fn test_india_bounds() {
        assert!(GeoBounds::INDIA.contains(&Coordinate::new(20.0, 78.0)));
        assert!(GeoBounds::INDIA.contains(&Coordinate::new(6.0, 68.0)));
        assert!(!GeoBounds::INDIA.contains(&Coordinate::new(0.0, 0.0)));
        assert!(!GeoBounds::INDIA.contains(&Coordinate::new(37.01, 80.0)));
        assert!(!GeoBounds::INDIA.contains(&Coordinate::new(f64::NAN, 80.0)));
    }
}
