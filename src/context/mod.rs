//! Geographic Context Builder
//!
//! Derives descriptive attributes of a coordinate purely from static tables.
//! No network or disk access happens here.
//!
//! ## Architecture
//! - `coastline.rs` - Curated shoreline sample points, coastal distance
//! - `elevation.rs` - Piecewise regional elevation estimate
//! - `climate.rs` - Arid / Semi-Arid / Sub-Humid / Humid boxes
//! - `urbanization.rs` - Named cities with containment radii
//! - `industrial.rs` - Named industrial bounding boxes

pub mod coastline;
pub mod elevation;
pub mod climate;
pub mod urbanization;
pub mod industrial;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

pub use climate::{classify_climate, ClimateClass};
pub use coastline::coastal_distance_km;
pub use elevation::estimate_elevation;
pub use industrial::{industrial_area_at, is_industrial_area};
pub use urbanization::{nearest_city, urbanization_level, City, UrbanizationLevel};

/// Distance from the shoreline within which terrain is Coastal
pub const COASTAL_TERRAIN_KM: f64 = 25.0;

/// Landform class of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainClass {
    Coastal,
    Plains,
    Plateau,
    Hills,
    Mountain,
}

impl TerrainClass {
    /// Terrain from coastal distance (km) and elevation (m)
    pub fn classify(coastal_distance_km: f64, elevation_m: f64) -> Self {
        if coastal_distance_km <= COASTAL_TERRAIN_KM {
            TerrainClass::Coastal
        } else if elevation_m > 1500.0 {
            TerrainClass::Mountain
        } else if elevation_m > 500.0 {
            TerrainClass::Hills
        } else if elevation_m > 300.0 {
            TerrainClass::Plateau
        } else {
            TerrainClass::Plains
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TerrainClass::Coastal => "Coastal",
            TerrainClass::Plains => "Plains",
            TerrainClass::Plateau => "Plateau",
            TerrainClass::Hills => "Hills",
            TerrainClass::Mountain => "Mountain",
        }
    }

    /// Lowercase words that, found in a zone name, mark the zone as
    /// belonging to this terrain
    pub fn name_keywords(&self) -> &'static [&'static str] {
        match self {
            TerrainClass::Coastal => &["coastal"],
            TerrainClass::Plateau => &["plateau"],
            TerrainClass::Hills => &["hill"],
            TerrainClass::Mountain => &["hill", "mountain", "himalaya"],
            TerrainClass::Plains => &[],
        }
    }
}

/// Descriptive attributes of a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicContext {
    /// Estimated elevation (m)
    pub elevation_m: f64,
    pub climate: ClimateClass,
    pub terrain: TerrainClass,
    pub urbanization: UrbanizationLevel,
    pub is_industrial: bool,
    /// Distance to the nearest shoreline sample (km)
    pub coastal_distance_km: f64,
}

impl GeographicContext {
    /// Rebuild the context with a different coastal distance, re-deriving terrain
    pub fn with_coastal_distance(mut self, coastal_distance_km: f64) -> Self {
        self.coastal_distance_km = coastal_distance_km;
        self.terrain = TerrainClass::classify(coastal_distance_km, self.elevation_m);
        self
    }

    /// One-line summary for logs and reports
    pub fn summary(&self) -> String {
        format!(
            "{:.0} m, {}, {}, {}{}, {:.1} km from coast",
            self.elevation_m,
            self.climate.display_name(),
            self.terrain.display_name(),
            self.urbanization.display_name(),
            if self.is_industrial { ", industrial" } else { "" },
            self.coastal_distance_km,
        )
    }
}

/// Build the geographic context for a coordinate
pub fn build_context(coord: &Coordinate) -> GeographicContext {
    let coastal_distance_km = coastal_distance_km(coord);
    let elevation_m = estimate_elevation(coord, coastal_distance_km);

    GeographicContext {
        elevation_m,
        climate: classify_climate(coord),
        terrain: TerrainClass::classify(coastal_distance_km, elevation_m),
        urbanization: urbanization_level(coord),
        is_industrial: is_industrial_area(coord),
        coastal_distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_thresholds() {
        assert_eq!(TerrainClass::classify(10.0, 2000.0), TerrainClass::Coastal);
        assert_eq!(TerrainClass::classify(100.0, 1600.0), TerrainClass::Mountain);
        assert_eq!(TerrainClass::classify(100.0, 1500.0), TerrainClass::Hills);
        assert_eq!(TerrainClass::classify(100.0, 500.0), TerrainClass::Plateau);
        assert_eq!(TerrainClass::classify(100.0, 300.0), TerrainClass::Plains);
    }

    #[test]
    fn test_chennai_context() {
        let ctx = build_context(&Coordinate::new(13.09, 80.27));
        assert_eq!(ctx.terrain, TerrainClass::Coastal);
        assert_eq!(ctx.urbanization, UrbanizationLevel::Metropolitan);
        assert!(ctx.coastal_distance_km <= 10.0);
        assert!(!ctx.is_industrial);
    }

    #[test]
    fn test_shimla_context() {
        let ctx = build_context(&Coordinate::new(31.10, 77.17));
        assert!(ctx.elevation_m > 1000.0);
        assert_eq!(ctx.terrain, TerrainClass::Mountain);
    }

    #[test]
    fn test_amravati_context() {
        let ctx = build_context(&Coordinate::new(20.93, 77.75));
        assert_eq!(ctx.terrain, TerrainClass::Plateau);
        assert_eq!(ctx.climate, ClimateClass::SemiArid);
    }

    #[test]
    fn test_forced_coastal_distance() {
        let ctx = build_context(&Coordinate::new(20.93, 77.75)).with_coastal_distance(3.0);
        assert_eq!(ctx.terrain, TerrainClass::Coastal);
        assert_eq!(ctx.coastal_distance_km, 3.0);
    }
}
