//! Zone Matcher
//!
//! Tests a coordinate against every zone of a catalog. Zones overlap on
//! purpose, so every containing, non-excluded zone yields a candidate and
//! the choice between them is left to the ranker.
//!
//! Confidence of a contained zone:
//! - base `1 / priority`
//! - alluvial zone, coast within 5 km: ×1.2
//! - alluvial zone of a coastal-setting zone, more than 50 km inland: ×0.3
//! - zone name matches the terrain class: ×1.15
//! - non-alluvial zone in a Metropolitan context: ×0.9
//! - clamped to [0, 1], then multiplied by the catalog discount

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{default_descriptor, proximity_descriptor, AquiferDescriptor, GeologicalZone, ZoneCatalog};
use crate::config::EngineConfig;
use crate::context::{nearest_city, GeographicContext, UrbanizationLevel};
use crate::geo::Coordinate;

const NEAR_COAST_KM: f64 = 5.0;
const INLAND_KM: f64 = 50.0;
const NEAR_COAST_ALLUVIAL_BOOST: f64 = 1.2;
const INLAND_ALLUVIAL_PENALTY: f64 = 0.3;
const TERRAIN_NAME_BOOST: f64 = 1.15;
const METRO_HARD_ROCK_PENALTY: f64 = 0.9;

/// How a candidate was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Contained in a primary-catalog zone
    Polygon,
    /// Contained in a special-catalog (extreme terrain) zone
    Geological,
    /// No zone matched; picked by the latitude/climate decision tree
    Proximity,
    /// Out of bounds, no candidates, or internal fault
    Default,
}

impl MatchType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchType::Polygon => "Polygon",
            MatchType::Geological => "Geological",
            MatchType::Proximity => "Proximity",
            MatchType::Default => "Default",
        }
    }
}

/// One zone that claims the coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch<'a> {
    pub aquifer: &'a AquiferDescriptor,
    pub zone_name: Option<&'a str>,
    /// Priority of the originating zone (None for synthesized candidates)
    pub priority: Option<u32>,
    /// In [0, 1]
    pub confidence: f64,
    pub match_type: MatchType,
    pub notes: Vec<String>,
}

impl CandidateMatch<'static> {
    /// Generic hard-rock candidate
    pub fn default_match(confidence: f64) -> Self {
        Self {
            aquifer: default_descriptor(),
            zone_name: None,
            priority: None,
            confidence,
            match_type: MatchType::Default,
            notes: vec!["No geological zone could be resolved; using the generic hard-rock aquifer".to_string()],
        }
    }
}

pub type Candidates<'a> = SmallVec<[CandidateMatch<'a>; 4]>;

/// Contextual confidence for a zone that contains the coordinate
pub fn zone_confidence(zone: &GeologicalZone, ctx: &GeographicContext) -> (f64, Vec<String>) {
    let mut confidence = 1.0 / zone.priority as f64;
    let mut notes = Vec::new();
    let name = zone.name.to_lowercase();
    let alluvial = zone.aquifer.code.is_alluvial();

    if alluvial {
        if ctx.coastal_distance_km <= NEAR_COAST_KM {
            confidence *= NEAR_COAST_ALLUVIAL_BOOST;
            notes.push(format!("Alluvium within {} km of the coast", NEAR_COAST_KM));
        } else if ctx.coastal_distance_km > INLAND_KM && zone.is_coastal() {
            confidence *= INLAND_ALLUVIAL_PENALTY;
            notes.push(format!("Coastal alluvium more than {} km inland", INLAND_KM));
        }
    }

    if ctx.terrain.name_keywords().iter().any(|k| name.contains(k)) {
        confidence *= TERRAIN_NAME_BOOST;
        notes.push(format!("Zone matches {} terrain", ctx.terrain.display_name().to_lowercase()));
    }

    if !alluvial && ctx.urbanization == UrbanizationLevel::Metropolitan {
        confidence *= METRO_HARD_ROCK_PENALTY;
        notes.push("Metropolitan area obscures hard-rock outcrop".to_string());
    }

    (confidence.clamp(0.0, 1.0), notes)
}

/// All candidates from one catalog, in catalog order
pub fn match_catalog<'a>(
    coord: &Coordinate,
    ctx: &GeographicContext,
    nearest_city: Option<&str>,
    catalog: &'a ZoneCatalog,
    match_type: MatchType,
    discount: f64,
) -> Candidates<'a> {
    let mut candidates = Candidates::new();

    for zone in catalog.iter() {
        if let Some(reason) = zone.exclusions.rejection(nearest_city, ctx) {
            tracing::debug!("Zone '{}' rejected: {}", zone.name, reason);
            continue;
        }
        if !zone.contains(coord) {
            continue;
        }

        let (confidence, mut notes) = zone_confidence(zone, ctx);
        let confidence = confidence * discount;
        if discount < 1.0 {
            notes.push("Extreme-terrain zone, confidence discounted".to_string());
        }

        tracing::debug!(
            "Zone '{}' (priority {}) matched with confidence {:.3}",
            zone.name,
            zone.priority,
            confidence
        );

        candidates.push(CandidateMatch {
            aquifer: &zone.aquifer,
            zone_name: Some(zone.name.as_str()),
            priority: Some(zone.priority),
            confidence,
            match_type,
            notes,
        });
    }

    candidates
}

/// Primary then special catalog, concatenated
pub fn match_zones<'a>(
    coord: &Coordinate,
    ctx: &GeographicContext,
    primary: &'a ZoneCatalog,
    special: &'a ZoneCatalog,
    config: &EngineConfig,
) -> Candidates<'a> {
    let city = nearest_city(coord, config.city_exclusion_radius_km).map(|c| c.name);

    let mut candidates = match_catalog(coord, ctx, city, primary, MatchType::Polygon, 1.0);
    candidates.extend(match_catalog(
        coord,
        ctx,
        city,
        special,
        MatchType::Geological,
        config.special_catalog_discount,
    ));
    candidates
}

/// Single candidate for a coordinate no zone claims
pub fn proximity_candidate(
    coord: &Coordinate,
    ctx: &GeographicContext,
    config: &EngineConfig,
) -> CandidateMatch<'static> {
    let aquifer = proximity_descriptor(coord, ctx);
    tracing::debug!("No zone matched ({:.4}, {:.4}); proximity pick {}", coord.lat, coord.lng, aquifer.code.code());
    CandidateMatch {
        aquifer,
        zone_name: None,
        priority: None,
        confidence: config.proximity_confidence,
        match_type: MatchType::Proximity,
        notes: vec!["No mapped zone contains this location; aquifer inferred from region".to_string()],
    }
}
