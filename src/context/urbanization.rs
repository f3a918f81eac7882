//! Urbanization lookup
//!
//! Nearest-city search against a fixed list of named cities. Each city has
//! its own containment radius; a coordinate outside every radius is Rural.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Coordinate};

/// Urbanization tier of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrbanizationLevel {
    Rural,
    Urban,
    Metropolitan,
}

impl UrbanizationLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            UrbanizationLevel::Rural => "Rural",
            UrbanizationLevel::Urban => "Urban",
            UrbanizationLevel::Metropolitan => "Metropolitan",
        }
    }
}

/// A named city with its urban footprint
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
    pub level: UrbanizationLevel,
}

impl City {
    const fn new(name: &'static str, lat: f64, lng: f64, radius_km: f64, level: UrbanizationLevel) -> Self {
        Self { name, lat, lng, radius_km, level }
    }

    fn distance_km(&self, coord: &Coordinate) -> f64 {
        haversine_km(coord.lat, coord.lng, self.lat, self.lng)
    }
}

use UrbanizationLevel::{Metropolitan, Urban};

static CITIES: &[City] = &[
    City::new("Mumbai", 19.0760, 72.8777, 40.0, Metropolitan),
    City::new("Delhi", 28.6139, 77.2090, 45.0, Metropolitan),
    City::new("Kolkata", 22.5726, 88.3639, 35.0, Metropolitan),
    City::new("Chennai", 13.0827, 80.2707, 35.0, Metropolitan),
    City::new("Bengaluru", 12.9716, 77.5946, 35.0, Metropolitan),
    City::new("Hyderabad", 17.3850, 78.4867, 35.0, Metropolitan),
    City::new("Ahmedabad", 23.0225, 72.5714, 30.0, Metropolitan),
    City::new("Pune", 18.5204, 73.8567, 30.0, Metropolitan),
    City::new("Surat", 21.1702, 72.8311, 20.0, Urban),
    City::new("Vadodara", 22.3072, 73.1812, 20.0, Urban),
    City::new("Jaipur", 26.9124, 75.7873, 25.0, Urban),
    City::new("Jodhpur", 26.2389, 73.0243, 15.0, Urban),
    City::new("Lucknow", 26.8467, 80.9462, 25.0, Urban),
    City::new("Kanpur", 26.4499, 80.3319, 20.0, Urban),
    City::new("Patna", 25.5941, 85.1376, 20.0, Urban),
    City::new("Ludhiana", 30.9010, 75.8573, 20.0, Urban),
    City::new("Chandigarh", 30.7333, 76.7794, 15.0, Urban),
    City::new("Shimla", 31.1048, 77.1734, 8.0, Urban),
    City::new("Nagpur", 21.1458, 79.0882, 20.0, Urban),
    City::new("Amravati", 20.9374, 77.7796, 12.0, Urban),
    City::new("Indore", 22.7196, 75.8577, 20.0, Urban),
    City::new("Bhopal", 23.2599, 77.4126, 20.0, Urban),
    City::new("Bhubaneswar", 20.2961, 85.8245, 15.0, Urban),
    City::new("Visakhapatnam", 17.6868, 83.2185, 20.0, Urban),
    City::new("Guwahati", 26.1445, 91.7362, 15.0, Urban),
    City::new("Mangaluru", 12.9141, 74.8560, 15.0, Urban),
    City::new("Coimbatore", 11.0168, 76.9558, 20.0, Urban),
    City::new("Madurai", 9.9252, 78.1198, 15.0, Urban),
    City::new("Kochi", 9.9312, 76.2673, 20.0, Urban),
    City::new("Thiruvananthapuram", 8.5241, 76.9366, 15.0, Urban),
];

/// Nearest listed city within `max_km`, regardless of the city's own radius
pub fn nearest_city(coord: &Coordinate, max_km: f64) -> Option<&'static City> {
    CITIES
        .iter()
        .map(|c| (c, c.distance_km(coord)))
        .filter(|(_, d)| *d <= max_km)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
}

/// Urbanization of the nearest city whose footprint contains the coordinate
pub fn urbanization_level(coord: &Coordinate) -> UrbanizationLevel {
    CITIES
        .iter()
        .map(|c| (c, c.distance_km(coord)))
        .filter(|(c, d)| *d <= c.radius_km)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c.level)
        .unwrap_or(UrbanizationLevel::Rural)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metropolitan() {
        assert_eq!(urbanization_level(&Coordinate::new(13.09, 80.27)), Metropolitan);
        assert_eq!(urbanization_level(&Coordinate::new(28.60, 77.20)), Metropolitan);
    }

    #[test]
    fn test_urban_and_rural() {
        assert_eq!(urbanization_level(&Coordinate::new(20.93, 77.75)), Urban);
        assert_eq!(urbanization_level(&Coordinate::new(24.00, 80.00)), UrbanizationLevel::Rural);
    }

    #[test]
    fn test_nearest_city() {
        let city = nearest_city(&Coordinate::new(19.20, 72.95), 50.0).map(|c| c.name);
        assert_eq!(city, Some("Mumbai"));
        assert!(nearest_city(&Coordinate::new(24.0, 80.0), 50.0).is_none());
    }
}
