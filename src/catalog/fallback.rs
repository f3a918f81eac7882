//! Default and Proximity descriptors
//!
//! Used when a coordinate is outside India, when nothing in either catalog
//! matches, or when resolution hits an internal fault.

use std::sync::OnceLock;

use super::aquifers::{AEOLIAN_DESERT, HARD_ROCK, HIMALAYAN_CRYSTALLINES, NORTHEAST_HILL_SEDIMENTS};
use super::descriptor::AquiferDescriptor;
use crate::context::{ClimateClass, GeographicContext};
use crate::geo::Coordinate;

/// Latitude above which an unmatched coordinate is treated as mountain terrain
pub const MOUNTAIN_LATITUDE: f64 = 30.0;

struct FallbackDescriptors {
    hard_rock: AquiferDescriptor,
    mountain: AquiferDescriptor,
    desert: AquiferDescriptor,
    northeast_hill: AquiferDescriptor,
}

fn fallbacks() -> &'static FallbackDescriptors {
    static FALLBACKS: OnceLock<FallbackDescriptors> = OnceLock::new();
    FALLBACKS.get_or_init(|| FallbackDescriptors {
        hard_rock: HARD_ROCK.to_descriptor(),
        mountain: HIMALAYAN_CRYSTALLINES.to_descriptor(),
        desert: AEOLIAN_DESERT.to_descriptor(),
        northeast_hill: NORTHEAST_HILL_SEDIMENTS.to_descriptor(),
    })
}

/// Fixed generic hard-rock descriptor (code "HR", confidence "Medium")
pub fn default_descriptor() -> &'static AquiferDescriptor {
    &fallbacks().hard_rock
}

/// Simplified decision tree for coordinates no zone claims:
/// high latitude → mountain, Arid → desert, far northeast → hill sediments,
/// otherwise widespread hard rock
pub fn proximity_descriptor(coord: &Coordinate, ctx: &GeographicContext) -> &'static AquiferDescriptor {
    let fallbacks = fallbacks();
    if coord.lat > MOUNTAIN_LATITUDE {
        &fallbacks.mountain
    } else if ctx.climate == ClimateClass::Arid {
        &fallbacks.desert
    } else if coord.lat >= 22.0 && coord.lng >= 89.5 {
        &fallbacks.northeast_hill
    } else {
        &fallbacks.hard_rock
    }
}
