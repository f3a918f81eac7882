//! Dynamic Adjuster
//!
//! Copies the selected descriptor and applies contextual caveats. Steps run
//! in a fixed order and their multipliers compound:
//!
//! 1. Urban or Metropolitan: development caveat; Metropolitan widens EC ×1.2
//! 2. Industrial area: industrial caveat; EC ×1.3
//! 3. Within 50 km of the coast and not alluvial: salinity caveat; EC ×1.5
//! 4. Arid or Semi-Arid: recharge caveat; depth to water ×1.3
//! 5. Above 1500 m: recharge note; yield ×1.1

use crate::catalog::AquiferDescriptor;
use crate::context::{GeographicContext, UrbanizationLevel};

pub const METRO_EC_FACTOR: f64 = 1.2;
pub const INDUSTRIAL_EC_FACTOR: f64 = 1.3;
pub const SALINITY_EC_FACTOR: f64 = 1.5;
pub const DRY_CLIMATE_DTW_FACTOR: f64 = 1.3;
pub const HIGH_ELEVATION_YIELD_FACTOR: f64 = 1.1;

pub const SALINITY_COASTAL_KM: f64 = 50.0;
pub const HIGH_ELEVATION_M: f64 = 1500.0;

/// A descriptor after contextual adjustment, with the caveats applied
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedDescriptor {
    pub descriptor: AquiferDescriptor,
    pub notes: Vec<String>,
}

impl AdjustedDescriptor {
    fn caveat(&mut self, note: &str) {
        self.descriptor.append_note(note);
        self.notes.push(note.to_string());
    }
}

/// Adjust a copy of `descriptor` for `ctx`. The input is never modified.
pub fn adjust(descriptor: &AquiferDescriptor, ctx: &GeographicContext) -> AdjustedDescriptor {
    let mut out = AdjustedDescriptor { descriptor: descriptor.clone(), notes: Vec::new() };

    if ctx.urbanization != UrbanizationLevel::Rural {
        out.caveat(
            "Urban development reduces natural recharge and may affect groundwater quality through sewage and runoff.",
        );
        if ctx.urbanization == UrbanizationLevel::Metropolitan {
            out.descriptor.water_quality.widen_in_place(METRO_EC_FACTOR);
        }
    }

    if ctx.is_industrial {
        out.caveat("Industrial activity in the area may contaminate shallow groundwater.");
        out.descriptor.water_quality.widen_in_place(INDUSTRIAL_EC_FACTOR);
    }

    if ctx.coastal_distance_km < SALINITY_COASTAL_KM && !out.descriptor.code.is_alluvial() {
        out.caveat("Proximity to the coast brings a risk of saline water intrusion.");
        out.descriptor.water_quality.widen_in_place(SALINITY_EC_FACTOR);
    }

    if ctx.climate.is_dry() {
        out.caveat("Low rainfall limits recharge; water levels may fall sharply in summer.");
        out.descriptor.depth_to_water.widen_in_place(DRY_CLIMATE_DTW_FACTOR);
    }

    if ctx.elevation_m > HIGH_ELEVATION_M {
        out.caveat("High elevation favours enhanced recharge from snowmelt and springs.");
        out.descriptor.yield_range.widen_in_place(HIGH_ELEVATION_YIELD_FACTOR);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_descriptor, AquiferCode, ValueRange};
    use crate::context::{ClimateClass, TerrainClass};

    fn ctx() -> GeographicContext {
        GeographicContext {
            elevation_m: 250.0,
            climate: ClimateClass::SubHumid,
            terrain: TerrainClass::Plains,
            urbanization: UrbanizationLevel::Rural,
            is_industrial: false,
            coastal_distance_km: 200.0,
        }
    }

    fn sample() -> AquiferDescriptor {
        let mut d = default_descriptor().clone();
        d.water_quality = ValueRange::new(500.0, 2500.0, "μS/cm");
        d.depth_to_water = ValueRange::new(5.0, 15.0, "m bgl");
        d.yield_range = ValueRange::new(10.0, 100.0, "m³/day");
        d
    }

    #[test]
    fn test_rural_inland_untouched() {
        let d = sample();
        let out = adjust(&d, &ctx());
        assert_eq!(out.descriptor, d);
        assert!(out.notes.is_empty());
    }

    #[test]
    fn test_ec_multipliers_compound_in_order() {
        let mut c = ctx();
        c.urbanization = UrbanizationLevel::Metropolitan;
        c.is_industrial = true;
        c.coastal_distance_km = 20.0;

        let d = sample();
        let out = adjust(&d, &c);
        // 500 → 600 → 780 → 1170; 2500 → 3000 → 3900 → 5850
        assert_eq!(out.descriptor.water_quality, ValueRange::new(1170.0, 5850.0, "μS/cm"));
        assert_eq!(out.notes.len(), 3);
        assert_eq!(d.water_quality, ValueRange::new(500.0, 2500.0, "μS/cm"));
    }

    #[test]
    fn test_urban_caveat_without_widening() {
        let mut c = ctx();
        c.urbanization = UrbanizationLevel::Urban;
        let out = adjust(&sample(), &c);
        assert_eq!(out.notes.len(), 1);
        assert_eq!(out.descriptor.water_quality.max, 2500.0);
        assert!(out.descriptor.description.ends_with(&out.notes[0]));
    }

    #[test]
    fn test_alluvium_skips_salinity() {
        let mut c = ctx();
        c.coastal_distance_km = 5.0;
        let mut d = sample();
        d.code = AquiferCode::Alluvium;
        let out = adjust(&d, &c);
        assert!(out.notes.is_empty());
    }

    #[test]
    fn test_dry_and_high() {
        let mut c = ctx();
        c.climate = ClimateClass::SemiArid;
        c.elevation_m = 2000.0;
        let out = adjust(&sample(), &c);
        assert_eq!(out.descriptor.depth_to_water, ValueRange::new(7.0, 20.0, "m bgl"));
        assert_eq!(out.descriptor.yield_range, ValueRange::new(11.0, 110.0, "m³/day"));
        assert_eq!(out.notes.len(), 2);
    }
}
