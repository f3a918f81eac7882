//! Special zone table for extreme terrain
//!
//! High mountains, the Thar desert and the northeastern hill ranges. Matches
//! from this table are discounted relative to the primary table.

use super::aquifers::{AEOLIAN_DESERT, HIMALAYAN_CRYSTALLINES, NORTHEAST_HILL_SEDIMENTS};
use super::exclusion::ExclusionRules;
use super::primary_zones::zone;
use super::zone::{GeologicalZone, ZoneCatalog};
use crate::geo::Boundary;

pub const SPECIAL_CATALOG_VERSION: &str = "special-2024.1";

/// Shares its southern edge with the Siwalik foothill belt
static WESTERN_HIMALAYA: &[(f64, f64)] = &[
    (37.0, 73.5), (37.0, 80.5), (32.5, 79.5), (30.9, 81.0), (30.0, 81.1),
    (29.2, 80.2), (29.6, 79.2), (30.2, 78.2), (30.5, 77.4), (31.0, 76.9),
    (31.9, 76.4), (32.9, 75.3), (32.6, 74.6), (33.2, 73.5),
];

static THAR_DESERT: &[(f64, f64)] = &[
    (30.2, 73.0), (29.0, 74.3), (27.2, 74.9), (25.8, 73.8), (24.6, 71.2),
    (24.7, 70.0), (26.0, 69.5), (27.8, 70.0), (29.0, 71.0), (30.0, 72.0),
];

static NORTHEAST_HILLS: &[(f64, f64)] = &[
    (27.2, 95.5), (26.0, 95.2), (24.3, 94.3), (22.5, 93.4), (21.9, 92.6),
    (23.0, 91.2), (24.2, 91.6), (24.9, 92.6), (25.6, 93.2), (26.6, 94.3),
];

pub fn special_zones() -> Vec<GeologicalZone> {
    vec![
        zone(
            "Western Himalayan Crystallines",
            1,
            Boundary::polygon(WESTERN_HIMALAYA),
            &HIMALAYAN_CRYSTALLINES,
            &["Higher and Lesser Himalayan sequences", "Glacial and fluvio-glacial valley fills", "Spring lines"],
            ExclusionRules::none(),
        ),
        zone(
            "Sikkim Himalayan Crystallines",
            1,
            Boundary::rectangle(27.0, 28.2, 88.0, 88.95),
            &HIMALAYAN_CRYSTALLINES,
            &["Darjeeling gneiss", "Spring lines"],
            ExclusionRules::none(),
        ),
        zone(
            "Arunachal Himalayan Crystallines",
            1,
            Boundary::rectangle(27.6, 29.5, 91.5, 97.4),
            &HIMALAYAN_CRYSTALLINES,
            &["Bomdila gneiss", "Spring lines"],
            ExclusionRules::none(),
        ),
        zone(
            "Thar Desert Aeolian Sands",
            1,
            Boundary::polygon(THAR_DESERT),
            &AEOLIAN_DESERT,
            &["Longitudinal and barchan dunes", "Buried Saraswati palaeochannels", "Saline playas"],
            ExclusionRules::none(),
        ),
        zone(
            "Northeast Hill Tertiary Belt",
            2,
            Boundary::polygon(NORTHEAST_HILLS),
            &NORTHEAST_HILL_SEDIMENTS,
            &["Barail and Surma groups", "Intermontane valleys"],
            ExclusionRules::none(),
        ),
    ]
}

pub fn build_special_catalog() -> ZoneCatalog {
    ZoneCatalog::ordered(SPECIAL_CATALOG_VERSION, special_zones())
}
