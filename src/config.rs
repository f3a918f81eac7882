//! Engine tunables
//!
//! Loaded once at startup. Fields missing from a config file take their
//! default values.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::geo::GeoBounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Top two candidates closer than this are a near-tie
    pub tie_epsilon: f64,
    /// Multiplier applied to every special-catalog confidence
    pub special_catalog_discount: f64,
    /// Radius of the nearest-city search used by city exclusions
    pub city_exclusion_radius_km: f64,
    /// Envelope outside which the Default descriptor is returned
    pub india_bounds: GeoBounds,
    /// Confidence of a synthesized Proximity candidate
    pub proximity_confidence: f64,
    /// Confidence of the Default descriptor
    pub default_confidence: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_epsilon: 0.05,
            special_catalog_discount: 0.9,
            city_exclusion_radius_km: 50.0,
            india_bounds: GeoBounds::INDIA,
            proximity_confidence: 0.25,
            default_confidence: 0.5,
        }
    }
}

impl EngineConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        config
            .validate()
            .with_context(|| format!("Invalid engine config: {:?}", path))?;

        tracing::info!(
            "Loaded engine config (epsilon {}, special discount {})",
            config.tie_epsilon,
            config.special_catalog_discount
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.tie_epsilon) {
            bail!("tie_epsilon must be in [0, 1), got {}", self.tie_epsilon);
        }
        if !(self.special_catalog_discount > 0.0 && self.special_catalog_discount <= 1.0) {
            bail!(
                "special_catalog_discount must be in (0, 1], got {}",
                self.special_catalog_discount
            );
        }
        if !(self.city_exclusion_radius_km >= 0.0) {
            bail!("city_exclusion_radius_km must be non-negative");
        }
        if !self.india_bounds.is_well_formed() {
            bail!("india_bounds are inverted or not finite: {:?}", self.india_bounds);
        }
        for (name, value) in [
            ("proximity_confidence", self.proximity_confidence),
            ("default_confidence", self.default_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{} must be in [0, 1], got {}", name, value);
            }
        }
        Ok(())
    }
}
