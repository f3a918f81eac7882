//! Primary zone table
//!
//! Overlaps are intentional: a point on the Konkan coast can sit in both the
//! laterite and the basalt zone, and ranking decides between them.
//! Polygon vertices are (lat, lng).

use super::aquifers::*;
use super::exclusion::{ExclusionCondition, ExclusionRules};
use super::zone::{GeologicalZone, ZoneCatalog, ZoneSetting};
use super::descriptor::AquiferTemplate;
use crate::geo::Boundary;

pub const PRIMARY_CATALOG_VERSION: &str = "primary-2024.1";

pub(crate) fn zone(
    name: &str,
    priority: u32,
    boundary: Boundary,
    aquifer: &AquiferTemplate,
    features: &[&str],
    exclusions: ExclusionRules,
) -> GeologicalZone {
    GeologicalZone {
        name: name.to_string(),
        priority,
        boundary,
        aquifer: aquifer.to_descriptor(),
        setting: ZoneSetting::Inland,
        features: features.iter().map(|f| f.to_string()).collect(),
        exclusions,
    }
}

static EAST_COAST_STRIP: &[(f64, f64)] = &[
    // Seaward edge, south to north
    (8.7, 78.3), (10.3, 80.0), (13.1, 80.45), (15.8, 80.6), (16.2, 81.4),
    (17.7, 83.5), (19.8, 86.1), (21.5, 87.3), (21.6, 88.2),
    // Landward edge, north to south
    (22.1, 87.7), (21.4, 86.6), (20.3, 85.9), (19.3, 84.6), (18.1, 83.3),
    (17.2, 82.0), (16.6, 81.0), (15.8, 80.0), (14.5, 79.8), (13.3, 79.9),
    (12.3, 79.6), (10.8, 79.4), (9.9, 78.9), (8.9, 77.9),
];

static WEST_COAST_STRIP: &[(f64, f64)] = &[
    // Seaward edge, south to north
    (8.0, 77.3), (8.4, 76.8), (9.5, 76.1), (11.2, 75.6), (12.9, 74.6),
    (14.8, 73.9), (16.0, 73.3), (18.0, 72.8), (19.5, 72.6), (20.8, 72.7),
    // Landward edge, north to south
    (20.8, 73.0), (19.5, 72.95), (18.0, 73.25), (16.0, 73.7), (14.8, 74.3),
    (12.9, 75.0), (11.2, 75.95), (9.5, 76.55), (8.4, 77.2), (8.1, 77.6),
];

static INDO_GANGETIC_PLAIN: &[(f64, f64)] = &[
    (32.0, 74.6), (31.0, 76.3), (30.3, 77.1), (29.9, 77.9), (29.0, 80.0),
    (28.5, 81.5), (27.4, 84.0), (26.8, 86.0), (26.6, 88.2), (25.8, 89.6),
    (24.5, 88.8), (22.3, 88.9), (21.6, 88.0), (22.5, 87.0), (24.0, 87.0),
    (24.5, 86.0), (25.0, 84.5), (24.8, 83.0), (25.0, 82.0), (25.2, 80.5),
    (25.8, 79.0), (26.3, 78.0), (27.2, 77.2), (27.5, 76.3), (28.2, 75.0),
    (29.3, 74.0), (30.0, 73.9), (30.9, 74.0),
];

static DECCAN_TRAPS: &[(f64, f64)] = &[
    (23.5, 70.5), (23.6, 73.5), (23.3, 75.5), (23.3, 78.0), (22.8, 80.5),
    (21.8, 81.0), (20.8, 79.3), (19.8, 78.7), (18.5, 77.6), (17.0, 77.3),
    (15.9, 75.8), (15.7, 74.2), (16.8, 73.5), (18.9, 73.0), (20.2, 72.9),
    (21.2, 72.6), (22.3, 72.1), (22.2, 69.0),
];

static KERALA_MIDLANDS: &[(f64, f64)] = &[
    (8.5, 77.1), (9.5, 76.55), (11.2, 75.95), (12.5, 75.2),
    (12.6, 75.5), (11.3, 76.3), (9.6, 76.9), (8.6, 77.3),
];

static VINDHYAN_BASIN: &[(f64, f64)] = &[
    (25.5, 75.5), (26.2, 77.5), (25.3, 80.0), (25.0, 82.5), (24.3, 83.5),
    (23.8, 82.0), (23.6, 79.5), (23.2, 77.5), (24.3, 75.8),
];

static GODAVARI_GONDWANA: &[(f64, f64)] = &[
    (19.8, 78.6), (18.5, 79.8), (17.3, 80.9), (17.0, 81.5),
    (17.6, 81.6), (18.9, 80.6), (20.0, 79.6), (20.6, 79.1),
];

static CUDDAPAH_BASIN: &[(f64, f64)] = &[
    (16.5, 78.0), (16.3, 79.5), (15.0, 79.3), (13.8, 79.1),
    (13.7, 78.7), (14.7, 78.1), (15.6, 77.8),
];

static ARAVALLI_RANGE: &[(f64, f64)] = &[
    (28.3, 76.2), (27.4, 76.5), (25.8, 75.1), (24.3, 74.2), (23.8, 73.3),
    (24.5, 72.7), (25.8, 73.6), (27.2, 75.2), (28.4, 75.9),
];

static DHARWAR_BELT: &[(f64, f64)] = &[
    (16.5, 75.0), (15.2, 76.8), (13.2, 76.9), (12.6, 76.4), (14.0, 75.3), (15.4, 74.6),
];

static CHOTA_NAGPUR: &[(f64, f64)] = &[
    (24.5, 83.5), (24.6, 86.9), (23.4, 87.3), (22.2, 86.8), (22.0, 84.0), (23.0, 83.0),
];

static EASTERN_GHATS: &[(f64, f64)] = &[
    (17.2, 81.6), (18.3, 82.5), (19.5, 83.7), (20.3, 84.8),
    (20.6, 84.3), (19.8, 83.0), (18.7, 81.9), (17.6, 81.2),
];

static SIWALIK_FOOTHILLS: &[(f64, f64)] = &[
    (32.6, 74.6), (32.9, 75.3), (31.9, 76.4), (31.0, 76.9), (30.5, 77.4),
    (30.2, 78.2), (29.6, 79.2), (29.1, 80.1), (28.8, 80.1), (29.3, 79.0),
    (29.9, 77.8), (30.3, 77.0), (31.2, 76.2), (32.2, 75.2), (32.4, 74.6),
];

static SOUTHERN_GRANULITE: &[(f64, f64)] = &[
    (11.0, 77.0), (11.2, 78.7), (10.3, 79.2), (9.3, 78.6),
    (8.4, 77.8), (8.6, 77.2), (9.8, 77.2),
];

static PENINSULAR_GNEISS: &[(f64, f64)] = &[
    (18.4, 77.6), (18.9, 79.5), (17.5, 80.6), (16.4, 79.8), (14.7, 79.9),
    (13.2, 79.6), (12.2, 78.6), (11.8, 77.2), (12.7, 76.2), (14.2, 75.6),
    (15.9, 75.9), (17.0, 77.3),
];

/// Build the primary zone table in registration order
pub fn primary_zones() -> Vec<GeologicalZone> {
    vec![
        zone(
            "Chennai Coastal Alluvium",
            1,
            Boundary::circle(13.05, 80.25, 25.0),
            &COASTAL_ALLUVIUM,
            &["Adyar and Cooum river deposits", "Beach ridges", "Buried palaeochannels"],
            ExclusionRules::with_conditions(&[ExclusionCondition::coastal_distance_above(12.0)]),
        )
        .coastal(),
        zone(
            "Kochi Coastal Alluvium",
            1,
            Boundary::circle(9.97, 76.27, 20.0),
            &COASTAL_ALLUVIUM,
            &["Vembanad backwater deposits", "Barrier beaches"],
            ExclusionRules::with_conditions(&[ExclusionCondition::coastal_distance_above(10.0)]),
        )
        .coastal(),
        zone(
            "East Coast Coastal Alluvium",
            2,
            Boundary::polygon(EAST_COAST_STRIP),
            &COASTAL_ALLUVIUM,
            &["Deltaic plains of the Cauvery, Krishna, Godavari and Mahanadi", "Beach ridges"],
            ExclusionRules::with_conditions(&[ExclusionCondition::coastal_distance_above(30.0)]),
        )
        .coastal(),
        zone(
            "West Coast Coastal Alluvium",
            2,
            Boundary::polygon(WEST_COAST_STRIP),
            &COASTAL_ALLUVIUM,
            &["Konkan and Malabar coastal plains", "Estuarine deposits"],
            ExclusionRules::with_conditions(&[ExclusionCondition::coastal_distance_above(20.0)])
                .excluding_cities(&["Mumbai"]),
        )
        .coastal(),
        zone(
            "Brahmaputra Valley Alluvium",
            2,
            Boundary::rectangle(25.8, 27.6, 89.8, 95.8),
            &BRAHMAPUTRA_ALLUVIUM,
            &["Brahmaputra flood plain", "Piedmont fans"],
            ExclusionRules::none(),
        ),
        zone(
            "Deccan Trap Basalt",
            2,
            Boundary::polygon(DECCAN_TRAPS),
            &DECCAN_BASALT,
            &["Vesicular and massive basalt flows", "Red bole horizons", "Dyke swarms"],
            ExclusionRules::none(),
        ),
        zone(
            "Kerala Laterite Plateau",
            2,
            Boundary::polygon(KERALA_MIDLANDS),
            &LATERITE,
            &["Midland laterite mesas", "Valley fills"],
            ExclusionRules::none(),
        ),
        zone(
            "Nilgiri Charnockite Hills",
            2,
            Boundary::circle(11.4, 76.7, 45.0),
            &CHARNOCKITE,
            &["Nilgiri massif", "Steep escarpments"],
            ExclusionRules::none(),
        ),
        zone(
            "Meghalaya Plateau Gneiss",
            2,
            Boundary::rectangle(25.1, 25.8, 89.8, 92.8),
            &GNEISS,
            &["Shillong plateau", "Cherrapunji sandstone cap"],
            ExclusionRules::none(),
        ),
        zone(
            "Indo-Gangetic Alluvial Plain",
            3,
            Boundary::polygon(INDO_GANGETIC_PLAIN),
            &GANGETIC_ALLUVIUM,
            &["Bhabar and Tarai belts", "Older and newer alluvium", "Deep confined aquifers"],
            ExclusionRules::none(),
        ),
        zone(
            "Konkan Laterite",
            3,
            Boundary::rectangle(15.5, 18.0, 73.0, 73.9),
            &LATERITE,
            &["Laterite plateaus over basalt"],
            ExclusionRules::none(),
        ),
        zone(
            "Malwa Plateau Basalt",
            3,
            Boundary::rectangle(22.0, 24.5, 74.5, 78.5),
            &DECCAN_BASALT,
            &["Northern Deccan Trap outliers", "Black cotton soil cover"],
            ExclusionRules::none(),
        ),
        zone(
            "Vindhyan Sandstone",
            3,
            Boundary::polygon(VINDHYAN_BASIN),
            &VINDHYAN_SANDSTONE,
            &["Kaimur and Rewa sandstone", "Scarp faces"],
            ExclusionRules::none(),
        ),
        zone(
            "Bundelkhand Granite",
            3,
            Boundary::rectangle(24.5, 25.8, 78.2, 80.3),
            &GRANITE,
            &["Granite tors", "Quartz reefs"],
            ExclusionRules::none(),
        ),
        zone(
            "Godavari Gondwana Sandstone",
            3,
            Boundary::polygon(GODAVARI_GONDWANA),
            &GONDWANA_SANDSTONE,
            &["Kamthi and Barakar formations", "Coal-bearing strata"],
            ExclusionRules::none(),
        ),
        zone(
            "Cuddapah Limestone Basin",
            3,
            Boundary::polygon(CUDDAPAH_BASIN),
            &CUDDAPAH_LIMESTONE,
            &["Vempalle dolomite", "Narji limestone"],
            ExclusionRules::none(),
        ),
        zone(
            "Aravalli Schist Hills",
            3,
            Boundary::polygon(ARAVALLI_RANGE),
            &SCHIST,
            &["Aravalli ridges", "Delhi Supergroup quartzite"],
            ExclusionRules::none(),
        ),
        zone(
            "Dharwar Schist Belt",
            3,
            Boundary::polygon(DHARWAR_BELT),
            &SCHIST,
            &["Chitradurga and Shimoga greenstone belts"],
            ExclusionRules::none(),
        ),
        zone(
            "Chota Nagpur Granite Plateau",
            3,
            Boundary::polygon(CHOTA_NAGPUR),
            &GRANITE,
            &["Ranchi and Hazaribagh plateaus", "Pediplains"],
            ExclusionRules::none(),
        ),
        zone(
            "Eastern Ghats Khondalite Hills",
            3,
            Boundary::polygon(EASTERN_GHATS),
            &KHONDALITE,
            &["Araku and Koraput highlands"],
            ExclusionRules::none(),
        ),
        zone(
            "Siwalik Foothill Sandstone",
            3,
            Boundary::polygon(SIWALIK_FOOTHILLS),
            &SIWALIK_SANDSTONE,
            &["Bhabar boulder beds", "Dun valleys"],
            ExclusionRules::none(),
        ),
        zone(
            "Southern Granulite Charnockite",
            4,
            Boundary::polygon(SOUTHERN_GRANULITE),
            &CHARNOCKITE,
            &["Palani and Anamalai hills", "Shear zones"],
            ExclusionRules::none(),
        ),
        zone(
            "Peninsular Gneissic Complex",
            4,
            Boundary::polygon(PENINSULAR_GNEISS),
            &GNEISS,
            &["Sheet-jointed inselbergs", "Pediment plains"],
            ExclusionRules::none(),
        ),
        zone(
            "Mewar Banded Gneissic Complex",
            4,
            Boundary::rectangle(24.0, 26.0, 73.5, 75.5),
            &BANDED_GNEISSIC_COMPLEX,
            &["Migmatite and amphibolite bands"],
            ExclusionRules::none(),
        ),
    ]
}

pub fn build_primary_catalog() -> ZoneCatalog {
    ZoneCatalog::ordered(PRIMARY_CATALOG_VERSION, primary_zones())
}
