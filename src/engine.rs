//! Resolution Engine
//!
//! Coordinate → Context → Candidates → Ranked Candidate → Adjusted Descriptor.
//!
//! `resolve` always returns an answer. Out-of-bounds input, internal faults
//! and panics all collapse to the Default descriptor.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use serde::Serialize;

use crate::adjuster::adjust;
use crate::catalog::{default_descriptor, primary_catalog, special_catalog, AquiferDescriptor, ConfidenceLabel, ZoneCatalog};
use crate::config::EngineConfig;
use crate::context::{build_context, GeographicContext};
use crate::error::ResolveError;
use crate::geo::Coordinate;
use crate::matcher::{match_zones, proximity_candidate, MatchType};
use crate::ranking::select_best;

/// Final answer for one coordinate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AquiferResolution {
    pub descriptor: AquiferDescriptor,
    /// Numeric confidence in [0, 1]
    pub confidence: f64,
    pub match_type: MatchType,
    pub zone_name: Option<String>,
    /// None when the coordinate never reached context building
    pub context: Option<GeographicContext>,
    pub notes: Vec<String>,
}

impl AquiferResolution {
    fn default_for(config: &EngineConfig, note: &str) -> Self {
        let mut descriptor = default_descriptor().clone();
        descriptor.confidence = descriptor
            .confidence
            .min(ConfidenceLabel::from_confidence(config.default_confidence));
        Self {
            descriptor,
            confidence: config.default_confidence,
            match_type: MatchType::Default,
            zone_name: None,
            context: None,
            notes: vec![note.to_string()],
        }
    }

    pub fn is_default(&self) -> bool {
        self.match_type == MatchType::Default
    }
}

/// Resolver over a primary and a special catalog
#[derive(Debug, Clone)]
pub struct AquiferResolver<'a> {
    primary: &'a ZoneCatalog,
    special: &'a ZoneCatalog,
    config: EngineConfig,
}

impl AquiferResolver<'static> {
    /// Compiled-in catalogs with default tunables
    pub fn builtin() -> Self {
        Self::with_catalogs(primary_catalog(), special_catalog(), EngineConfig::default())
    }
}

impl<'a> AquiferResolver<'a> {
    pub fn with_catalogs(primary: &'a ZoneCatalog, special: &'a ZoneCatalog, config: EngineConfig) -> Self {
        Self { primary, special, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve, reporting out-of-bounds input and internal faults as errors
    pub fn try_resolve(&self, coord: Coordinate) -> Result<AquiferResolution, ResolveError> {
        if !coord.is_finite() || !self.config.india_bounds.contains(&coord) {
            return Err(ResolveError::OutOfBounds { lat: coord.lat, lng: coord.lng });
        }
        let ctx = build_context(&coord);
        self.resolve_in_context(coord, ctx)
    }

    /// Resolve against an already-built context (matching, ranking, adjustment)
    pub fn resolve_in_context(
        &self,
        coord: Coordinate,
        ctx: GeographicContext,
    ) -> Result<AquiferResolution, ResolveError> {
        let mut candidates = match_zones(&coord, &ctx, self.primary, self.special, &self.config);
        if candidates.is_empty() {
            candidates.push(proximity_candidate(&coord, &ctx, &self.config));
        }

        let best = select_best(candidates, &ctx, &self.config);
        if !(0.0..=1.0).contains(&best.confidence) {
            return Err(ResolveError::InternalFault(format!(
                "confidence {} out of range for '{}'",
                best.confidence, best.aquifer.name
            )));
        }

        let adjusted = adjust(best.aquifer, &ctx);
        let mut descriptor = adjusted.descriptor;
        descriptor.confidence = descriptor
            .confidence
            .min(ConfidenceLabel::from_confidence(best.confidence));

        let mut notes = best.notes;
        notes.extend(adjusted.notes);

        tracing::debug!(
            "Resolved ({:.4}, {:.4}) to {} [{}] at {:.2}",
            coord.lat,
            coord.lng,
            descriptor.code.code(),
            best.match_type.display_name(),
            best.confidence
        );

        Ok(AquiferResolution {
            descriptor,
            confidence: best.confidence,
            match_type: best.match_type,
            zone_name: best.zone_name.map(str::to_string),
            context: Some(ctx),
            notes,
        })
    }

    /// Resolve, never failing
    pub fn resolve(&self, coord: Coordinate) -> AquiferResolution {
        self.guarded(coord, || self.try_resolve(coord))
    }

    /// Run a resolution step, mapping errors and panics to Default
    fn guarded<F>(&self, coord: Coordinate, step: F) -> AquiferResolution
    where
        F: FnOnce() -> Result<AquiferResolution, ResolveError>,
    {
        match panic::catch_unwind(AssertUnwindSafe(step)) {
            Ok(Ok(resolution)) => resolution,
            Ok(Err(e @ ResolveError::OutOfBounds { .. })) => {
                tracing::debug!("{}", e);
                AquiferResolution::default_for(&self.config, "Location is outside the supported region")
            }
            Ok(Err(e)) => {
                tracing::warn!("Falling back to default aquifer: {}", e);
                AquiferResolution::default_for(&self.config, "Aquifer could not be resolved for this location")
            }
            Err(_) => {
                tracing::warn!("Falling back to default aquifer: panic during resolution of ({}, {})", coord.lat, coord.lng);
                AquiferResolution::default_for(&self.config, "Aquifer could not be resolved for this location")
            }
        }
    }

    /// Resolve a batch in parallel, preserving input order
    pub fn resolve_many(&self, coords: &[Coordinate]) -> Vec<AquiferResolution> {
        coords.par_iter().map(|c| self.resolve(*c)).collect()
    }
}

/// Adjusted descriptor for a coordinate using the compiled-in catalogs
pub fn resolve_aquifer(coord: Coordinate) -> AquiferDescriptor {
    AquiferResolver::builtin().resolve(coord).descriptor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AquiferCode;
    use approx::assert_relative_eq;

    #[test]
    fn test_try_resolve_out_of_bounds() {
        let resolver = AquiferResolver::builtin();
        assert!(matches!(
            resolver.try_resolve(Coordinate::new(0.0, 0.0)),
            Err(ResolveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            resolver.try_resolve(Coordinate::new(f64::NAN, 77.0)),
            Err(ResolveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_default_resolution() {
        let r = AquiferResolver::builtin().resolve(Coordinate::new(51.5, -0.1));
        assert!(r.is_default());
        assert!(r.context.is_none());
        assert_eq!(r.descriptor.code, AquiferCode::HardRock);
        assert_eq!(r.descriptor.confidence, ConfidenceLabel::Medium);
        assert_relative_eq!(r.confidence, 0.5);
    }

    #[test]
    fn test_proximity_when_catalogs_empty() {
        let empty = ZoneCatalog::new("empty", vec![]).unwrap();
        let resolver = AquiferResolver::with_catalogs(&empty, &empty, EngineConfig::default());
        let r = resolver.resolve(Coordinate::new(23.5, 84.0));

        assert_eq!(r.match_type, MatchType::Proximity);
        assert_eq!(r.descriptor.confidence, ConfidenceLabel::Low);
        assert!(r.zone_name.is_none());
    }

    #[test]
    fn test_resolution_notes_carry_adjustments() {
        let r = AquiferResolver::builtin().resolve(Coordinate::new(13.09, 80.27));
        assert_eq!(r.match_type, MatchType::Polygon);
        assert!(r.notes.iter().any(|n| n.contains("Urban development")));
        assert!(r.descriptor.description.contains("Urban development"));
    }

    #[test]
    fn test_out_of_range_confidence_falls_back() {
        let config = EngineConfig { special_catalog_discount: 1.5, ..EngineConfig::default() };
        let resolver = AquiferResolver::with_catalogs(primary_catalog(), special_catalog(), config);
        let shimla = Coordinate::new(31.10, 77.17);

        assert!(matches!(resolver.try_resolve(shimla), Err(ResolveError::InternalFault(_))));

        let r = resolver.resolve(shimla);
        assert_eq!(r.match_type, MatchType::Default);
        assert_eq!(r.descriptor.code, AquiferCode::HardRock);
        assert_eq!(r.descriptor.confidence, ConfidenceLabel::Medium);
        assert!(r.context.is_none());
    }

    #[test]
    fn test_panic_falls_back() {
        let resolver = AquiferResolver::builtin();
        let r = resolver.guarded(Coordinate::new(20.93, 77.75), || panic!("zone table corrupted"));

        assert!(r.is_default());
        assert_eq!(r.descriptor.code, AquiferCode::HardRock);
        assert_eq!(r.descriptor.confidence, ConfidenceLabel::Medium);
        assert_relative_eq!(r.confidence, 0.5);
    }

    #[test]
    fn test_resolve_aquifer_free_function() {
        let d = resolve_aquifer(Coordinate::new(20.93, 77.75));
        assert_eq!(d.code, AquiferCode::Basalt);
    }
}
