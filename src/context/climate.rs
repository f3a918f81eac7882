//! Climate Classification
//!
//! Four-class moisture regime from fixed lat/lng boxes. Boxes are checked in
//! order Arid, Semi-Arid, Humid; anything unmatched is Sub-Humid.

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, GeoBounds};

/// Moisture regime of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateClass {
    /// Thar desert and Kutch
    Arid,
    /// Deccan rain shadow and central India
    SemiArid,
    /// Monsoon-dominated interior
    SubHumid,
    /// Western Ghats, northeast, deep south
    Humid,
}

impl ClimateClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateClass::Arid => "Arid",
            ClimateClass::SemiArid => "Semi-Arid",
            ClimateClass::SubHumid => "Sub-Humid",
            ClimateClass::Humid => "Humid",
        }
    }

    /// Arid or Semi-Arid
    pub fn is_dry(&self) -> bool {
        matches!(self, ClimateClass::Arid | ClimateClass::SemiArid)
    }
}

static ARID_BOXES: &[GeoBounds] = &[
    GeoBounds::new(24.0, 30.0, 69.0, 75.5),  // Thar
    GeoBounds::new(22.5, 24.5, 68.0, 71.5),  // Kutch
];

static SEMI_ARID_BOXES: &[GeoBounds] = &[
    GeoBounds::new(15.0, 22.0, 74.0, 79.0),  // Deccan rain shadow
    GeoBounds::new(22.0, 26.0, 74.0, 79.0),  // Central India
    GeoBounds::new(12.5, 15.0, 76.0, 79.5),  // Rayalaseema
];

static HUMID_BOXES: &[GeoBounds] = &[
    GeoBounds::new(8.0, 21.0, 72.6, 74.0),   // Western Ghats and Konkan
    GeoBounds::new(22.0, 29.5, 89.5, 97.5),  // Northeast
    GeoBounds::new(6.0, 12.5, 74.5, 78.5),   // Deep south
];

fn in_any(boxes: &[GeoBounds], coord: &Coordinate) -> bool {
    boxes.iter().any(|b| b.contains(coord))
}

/// Classify the climate of a coordinate
pub fn classify_climate(coord: &Coordinate) -> ClimateClass {
    if in_any(ARID_BOXES, coord) {
        ClimateClass::Arid
    } else if in_any(SEMI_ARID_BOXES, coord) {
        ClimateClass::SemiArid
    } else if in_any(HUMID_BOXES, coord) {
        ClimateClass::Humid
    } else {
        ClimateClass::SubHumid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_boxes() {
        assert_eq!(classify_climate(&Coordinate::new(26.9, 70.9)), ClimateClass::Arid);
        assert_eq!(classify_climate(&Coordinate::new(20.93, 77.75)), ClimateClass::SemiArid);
        assert_eq!(classify_climate(&Coordinate::new(9.96, 76.30)), ClimateClass::Humid);
        assert_eq!(classify_climate(&Coordinate::new(25.6, 91.9)), ClimateClass::Humid);
        assert_eq!(classify_climate(&Coordinate::new(25.59, 85.14)), ClimateClass::SubHumid);
    }

    #[test]
    fn test_is_dry() {
        assert!(ClimateClass::Arid.is_dry());
        assert!(ClimateClass::SemiArid.is_dry());
        assert!(!ClimateClass::Humid.is_dry());
    }
}
