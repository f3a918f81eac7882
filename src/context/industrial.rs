//! Industrial area flag
//!
//! Named industrial clusters whose effluent is known to affect shallow
//! groundwater quality, each approximated by a lat/lng bounding box.

use crate::geo::{Coordinate, GeoBounds};

/// A named industrial cluster
#[derive(Debug, Clone, Copy)]
pub struct IndustrialArea {
    pub name: &'static str,
    pub bounds: GeoBounds,
}

impl IndustrialArea {
    const fn new(name: &'static str, min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self { name, bounds: GeoBounds::new(min_lat, max_lat, min_lng, max_lng) }
    }
}

static INDUSTRIAL_AREAS: &[IndustrialArea] = &[
    IndustrialArea::new("Thane-Belapur Industrial Belt", 19.00, 19.30, 72.95, 73.15),
    IndustrialArea::new("Ankleshwar-Vapi Chemical Corridor", 20.30, 21.70, 72.80, 73.10),
    IndustrialArea::new("Delhi NCR Industrial Area", 28.35, 28.75, 76.95, 77.45),
    IndustrialArea::new("Ludhiana Industrial Cluster", 30.85, 30.95, 75.75, 75.95),
    IndustrialArea::new("Kanpur Leather Cluster", 26.35, 26.55, 80.25, 80.45),
    IndustrialArea::new("Durgapur-Asansol Industrial Belt", 23.45, 23.80, 86.90, 87.40),
    IndustrialArea::new("Jamshedpur Steel Zone", 22.70, 22.90, 86.10, 86.30),
    IndustrialArea::new("Visakhapatnam Industrial Zone", 17.60, 17.80, 83.15, 83.30),
    IndustrialArea::new("Manali-Ennore Petrochemical Zone", 13.15, 13.28, 80.25, 80.35),
    IndustrialArea::new("Vellore-Ranipet Tannery Cluster", 12.85, 12.98, 79.25, 79.40),
    IndustrialArea::new("Tiruppur Textile Cluster", 11.05, 11.15, 77.30, 77.40),
];

/// First industrial area containing the coordinate, if any
pub fn industrial_area_at(coord: &Coordinate) -> Option<&'static IndustrialArea> {
    INDUSTRIAL_AREAS.iter().find(|area| area.bounds.contains(coord))
}

pub fn is_industrial_area(coord: &Coordinate) -> bool {
    industrial_area_at(coord).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industrial_lookup() {
        let area = industrial_area_at(&Coordinate::new(21.60, 73.00));
        assert_eq!(area.map(|a| a.name), Some("Ankleshwar-Vapi Chemical Corridor"));
        assert!(is_industrial_area(&Coordinate::new(26.45, 80.33)));
        assert!(!is_industrial_area(&Coordinate::new(13.09, 80.27)));
        assert!(!is_industrial_area(&Coordinate::new(20.93, 77.75)));
    }
}
