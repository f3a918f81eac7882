//! Elevation Estimate
//!
//! Piecewise regional estimate in metres, checked in this order:
//! Himalayan latitude tiers, Western Ghats ridge band, Eastern Ghats band,
//! Deccan plateau, coastal strip (<50 km), Indo-Gangetic plain, default.
//!
//! The default branch adds a small undulation derived from the coordinate
//! itself, so the same coordinate always yields the same elevation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geo::{Coordinate, GeoBounds};

pub const COASTAL_STRIP_KM: f64 = 50.0;
pub const COASTAL_ELEVATION_M: f64 = 15.0;
pub const EASTERN_GHATS_ELEVATION_M: f64 = 600.0;
pub const DECCAN_ELEVATION_M: f64 = 450.0;
pub const GANGETIC_ELEVATION_M: f64 = 150.0;
pub const DEFAULT_ELEVATION_M: f64 = 250.0;
/// Half-width of the default-branch undulation
pub const DEFAULT_UNDULATION_M: f64 = 50.0;

/// Western Ghats crest as (lat, lng), south to north
static WESTERN_GHATS_CREST: &[(f64, f64)] = &[
    (8.5, 77.3),
    (10.0, 77.0),
    (12.0, 75.7),
    (15.0, 74.1),
    (18.0, 73.6),
    (21.0, 73.9),
];

/// Elevation of the crest and the lng distance over which it falls to foothills
const GHATS_CREST_M: f64 = 1100.0;
const GHATS_BAND_DEG: f64 = 0.6;
const GHATS_FALLOFF_M_PER_DEG: f64 = 1000.0;

const DECCAN: GeoBounds = GeoBounds::new(12.0, 22.0, 74.0, 80.0);
const GANGETIC: GeoBounds = GeoBounds::new(24.0, 30.5, 74.0, 88.5);

fn himalayan_tier(coord: &Coordinate) -> Option<f64> {
    let Coordinate { lat, lng } = *coord;
    if lat < 28.0 {
        return None;
    }
    if lat >= 34.0 && lng >= 75.5 {
        Some(4000.0) // Ladakh
    } else if lat >= 32.0 && lng <= 80.0 {
        Some(2500.0)
    } else if lat >= 30.5 && (75.5..=80.5).contains(&lng) {
        Some(2000.0)
    } else if lat >= 29.3 && (78.0..=81.0).contains(&lng) {
        Some(1500.0)
    } else if lng >= 88.0 {
        Some(2000.0) // Sikkim and Arunachal
    } else {
        None
    }
}

/// Crest longitude at the given latitude (linear between crest samples)
fn ghats_crest_lng(lat: f64) -> Option<f64> {
    WESTERN_GHATS_CREST.windows(2).find_map(|w| {
        let (lat0, lng0) = w[0];
        let (lat1, lng1) = w[1];
        if lat >= lat0 && lat <= lat1 {
            Some(lng0 + (lat - lat0) / (lat1 - lat0) * (lng1 - lng0))
        } else {
            None
        }
    })
}

fn western_ghats(coord: &Coordinate) -> Option<f64> {
    let crest = ghats_crest_lng(coord.lat)?;
    let d = (coord.lng - crest).abs();
    (d <= GHATS_BAND_DEG).then(|| GHATS_CREST_M - d * GHATS_FALLOFF_M_PER_DEG)
}

/// Diagonal band running from north Tamil Nadu to south Odisha
fn in_eastern_ghats(coord: &Coordinate) -> bool {
    if !(12.5..=22.0).contains(&coord.lat) {
        return false;
    }
    let axis_lng = 78.5 + (coord.lat - 12.5) * 0.6;
    (coord.lng - axis_lng).abs() <= 0.75
}

/// Deterministic undulation in [-DEFAULT_UNDULATION_M, DEFAULT_UNDULATION_M]
fn coordinate_undulation(coord: &Coordinate) -> f64 {
    // Quantise to ~10 m so tiny float differences map to the same seed
    let lat_bits = (coord.lat * 1e4).round() as i64 as u64;
    let lng_bits = (coord.lng * 1e4).round() as i64 as u64;
    let seed = lat_bits.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ lng_bits;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_range(-DEFAULT_UNDULATION_M..=DEFAULT_UNDULATION_M)
}

/// Estimate elevation (m) from position and precomputed coastal distance
pub fn estimate_elevation(coord: &Coordinate, coastal_distance_km: f64) -> f64 {
    if let Some(elevation) = himalayan_tier(coord) {
        return elevation;
    }
    if coastal_distance_km >= COASTAL_STRIP_KM {
        if let Some(elevation) = western_ghats(coord) {
            return elevation;
        }
    }
    if in_eastern_ghats(coord) && coastal_distance_km > 25.0 {
        return EASTERN_GHATS_ELEVATION_M;
    }
    if DECCAN.contains(coord) && coastal_distance_km >= COASTAL_STRIP_KM {
        return DECCAN_ELEVATION_M;
    }
    if coastal_distance_km < COASTAL_STRIP_KM {
        return COASTAL_ELEVATION_M;
    }
    if GANGETIC.contains(coord) {
        return GANGETIC_ELEVATION_M;
    }
    DEFAULT_ELEVATION_M + coordinate_undulation(coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::coastline::coastal_distance_km;
    use approx::assert_relative_eq;

    #[test]
    fn test_himalayan_tiers() {
        assert_eq!(estimate_elevation(&Coordinate::new(34.15, 77.58), 2000.0), 4000.0);
        assert_eq!(estimate_elevation(&Coordinate::new(31.10, 77.17), 1500.0), 2000.0);
        assert_eq!(estimate_elevation(&Coordinate::new(29.38, 79.45), 1200.0), 1500.0);
    }

    #[test]
    fn test_western_ghats_crest() {
        // On the crest at 18N
        assert_relative_eq!(
            estimate_elevation(&Coordinate::new(18.0, 73.6), 60.0),
            1100.0,
            epsilon = 1e-9
        );
        // 0.5 degrees east of the crest
        assert_relative_eq!(
            estimate_elevation(&Coordinate::new(18.0, 74.1), 100.0),
            600.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_plains_and_coast() {
        assert_eq!(estimate_elevation(&Coordinate::new(26.45, 80.33), 800.0), GANGETIC_ELEVATION_M);
        assert_eq!(estimate_elevation(&Coordinate::new(13.09, 80.27), 2.0), COASTAL_ELEVATION_M);
        assert_eq!(estimate_elevation(&Coordinate::new(20.93, 77.75), 450.0), DECCAN_ELEVATION_M);
    }

    #[test]
    fn test_konkan_shore_stays_low() {
        for (lat, lng) in [(14.81, 74.13), (15.49, 73.83), (12.91, 74.86)] {
            let c = Coordinate::new(lat, lng);
            let coast = coastal_distance_km(&c);
            assert!(coast < COASTAL_STRIP_KM);
            assert_eq!(estimate_elevation(&c, coast), COASTAL_ELEVATION_M);
        }
        // Same band, far enough inland for the ridge profile
        assert!(estimate_elevation(&Coordinate::new(14.81, 74.13), COASTAL_STRIP_KM) > COASTAL_ELEVATION_M);
    }

    #[test]
    fn test_default_branch_is_deterministic() {
        let c = Coordinate::new(23.5, 84.0);
        let first = estimate_elevation(&c, 300.0);
        let second = estimate_elevation(&c, 300.0);
        assert_eq!(first, second);
        assert!((first - DEFAULT_ELEVATION_M).abs() <= DEFAULT_UNDULATION_M);
    }
}
