//! Geological zones and the versioned zone catalog

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::descriptor::AquiferDescriptor;
use super::exclusion::ExclusionRules;
use crate::error::CatalogError;
use crate::geo::{Boundary, Coordinate};

/// Physiographic setting of a zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSetting {
    #[default]
    Inland,
    /// Shoreline belt; alluvium here is penalised far from the coast
    Coastal,
}

/// A prioritized geometric zone carrying its aquifer descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeologicalZone {
    pub name: String,
    /// Strictly positive; lower is more specific
    pub priority: u32,
    pub boundary: Boundary,
    pub aquifer: AquiferDescriptor,
    #[serde(default)]
    pub setting: ZoneSetting,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub exclusions: ExclusionRules,
}

impl GeologicalZone {
    /// Mark the zone as a shoreline belt
    pub fn coastal(mut self) -> Self {
        self.setting = ZoneSetting::Coastal;
        self
    }

    pub fn is_coastal(&self) -> bool {
        self.setting == ZoneSetting::Coastal
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.boundary.contains(coord)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidZone { name: self.name.clone(), reason };
        if self.priority == 0 {
            return Err(invalid("priority must be a positive integer".to_string()));
        }
        self.boundary.validate().map_err(invalid)
    }
}

/// Ordered, read-only collection of zones.
///
/// Zones are held in ascending priority; zones of equal priority keep their
/// registration order. Deserialization goes through `ZoneCatalog::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ZoneCatalog {
    pub version: String,
    zones: Vec<GeologicalZone>,
}

/// Catalog as written in JSON, before validation and ordering
#[derive(Deserialize)]
struct RawCatalog {
    version: String,
    zones: Vec<GeologicalZone>,
}

impl TryFrom<RawCatalog> for ZoneCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        ZoneCatalog::new(&raw.version, raw.zones)
    }
}

impl ZoneCatalog {
    /// Validate and order zones
    pub fn new(version: &str, zones: Vec<GeologicalZone>) -> Result<Self, CatalogError> {
        for zone in &zones {
            zone.validate()?;
        }
        Ok(Self::ordered(version, zones))
    }

    /// Order zones without validation (compiled-in tables are covered by tests)
    pub(crate) fn ordered(version: &str, mut zones: Vec<GeologicalZone>) -> Self {
        zones.sort_by_key(|z| z.priority);
        Self { version: version.to_string(), zones }
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: ZoneCatalog = serde_json::from_str(json)
            .with_context(|| "Failed to parse zone catalog JSON")?;
        tracing::info!("Loaded zone catalog {} ({} zones)", catalog.version, catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read zone catalog: {:?}", path))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid zone catalog: {:?}", path))
    }

    pub fn zones(&self) -> &[GeologicalZone] {
        &self.zones
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeologicalZone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&GeologicalZone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Check every zone (used for compiled-in tables)
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.zones.iter().try_for_each(GeologicalZone::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback::default_descriptor;

    fn zone(name: &str, priority: u32) -> GeologicalZone {
        GeologicalZone {
            name: name.to_string(),
            priority,
            boundary: Boundary::rectangle(10.0, 20.0, 70.0, 80.0),
            aquifer: default_descriptor().clone(),
            setting: ZoneSetting::Inland,
            features: vec![],
            exclusions: ExclusionRules::none(),
        }
    }

    #[test]
    fn test_ordering_is_priority_then_registration() {
        let catalog = ZoneCatalog::new(
            "t",
            vec![zone("a", 3), zone("b", 1), zone("c", 3), zone("d", 1)],
        )
        .unwrap();
        let names: Vec<_> = catalog.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rejects_zero_priority() {
        let err = ZoneCatalog::new("t", vec![zone("bad", 0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidZone { .. }));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "version": "test-1",
            "zones": [{
                "name": "Test Coastal Alluvium",
                "priority": 1,
                "boundary": { "type": "circle", "center": { "lat": 13.0, "lng": 80.2 }, "radius_km": 20.0 },
                "aquifer": {
                    "name": "Alluvium",
                    "code": "AL",
                    "formation_type": "Unconsolidated",
                    "description": "Sand and silt.",
                    "area_coverage_pct": 1.0,
                    "weathered_zone_depth": "0-15 m",
                    "fracture_zone_depth": "0 m",
                    "yield_range": "100-800 m³/day",
                    "depth_to_water": "2-8 m bgl",
                    "geological_age": "Quaternary",
                    "states": ["Tamil Nadu"],
                    "confidence": "High",
                    "aquifer_system": "Unconfined",
                    "transmissivity": "100-1000 m²/day",
                    "specific_yield": "8-15 %",
                    "water_quality": "500-3000 μS/cm"
                },
                "exclusions": { "conditions": ["coastal distance > 12 km"] }
            }]
        }"#;

        let catalog = ZoneCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.version, "test-1");
        let zone = catalog.find("Test Coastal Alluvium").unwrap();
        assert_eq!(zone.aquifer.water_quality.max, 3000.0);
        assert_eq!(zone.exclusions.conditions.len(), 1);
        assert!(zone.features.is_empty());
        assert_eq!(zone.setting, ZoneSetting::Inland);
    }

    #[test]
    fn test_plain_deserialize_validates_and_orders() {
        let mut json = serde_json::to_value(ZoneCatalog::new("t", vec![zone("a", 1), zone("b", 2)]).unwrap()).unwrap();
        json["zones"][0]["priority"] = 3.into();

        let catalog: ZoneCatalog = serde_json::from_value(json.clone()).unwrap();
        let names: Vec<_> = catalog.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);

        json["zones"][0]["priority"] = 0.into();
        assert!(serde_json::from_value::<ZoneCatalog>(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_range() {
        let json = r#"{ "version": "x", "zones": [{
            "name": "z", "priority": 1,
            "boundary": { "type": "rectangle", "bounds": { "min_lat": 1, "max_lat": 2, "min_lng": 1, "max_lng": 2 } },
            "aquifer": { "name": "n", "code": "HR", "formation_type": "f", "description": "d",
                "area_coverage_pct": 1, "weathered_zone_depth": "deep", "fracture_zone_depth": "1-2 m",
                "yield_range": "1-2", "depth_to_water": "1-2", "geological_age": "a", "states": [],
                "confidence": "Low", "aquifer_system": "s", "transmissivity": "1-2",
                "specific_yield": "1-2", "water_quality": "1-2" }
        }]}"#;
        assert!(ZoneCatalog::from_json_str(json).is_err());
    }
}
