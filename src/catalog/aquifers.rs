//! Principal aquifer reference data
//!
//! Typical hydrogeological parameters per principal aquifer type. Values are
//! representative regional ranges, not site measurements.

use super::descriptor::{AquiferCode, AquiferTemplate, ConfidenceLabel};

pub static COASTAL_ALLUVIUM: AquiferTemplate = AquiferTemplate {
    name: "Alluvium (Coastal)",
    code: AquiferCode::Alluvium,
    formation_type: "Unconsolidated - fluvio-marine",
    description: "Sand, silt and clay laid down by rivers and the sea along the coastal plain. Shallow unconfined aquifers with good primary porosity.",
    area_coverage_pct: 3.5,
    weathered_zone_depth: (0.0, 15.0, "m"),
    fracture_zone_depth: (0.0, 0.0, "m"),
    yield_range: (100.0, 800.0, "m³/day"),
    depth_to_water: (2.0, 8.0, "m bgl"),
    geological_age: "Quaternary",
    states: &["Tamil Nadu", "Andhra Pradesh", "Odisha", "West Bengal", "Kerala", "Karnataka", "Goa", "Maharashtra", "Gujarat"],
    confidence: ConfidenceLabel::High,
    aquifer_system: "Unconfined to semi-confined",
    transmissivity: (100.0, 1000.0, "m²/day"),
    specific_yield: (8.0, 15.0, "%"),
    water_quality: (500.0, 3000.0, "μS/cm"),
};

pub static GANGETIC_ALLUVIUM: AquiferTemplate = AquiferTemplate {
    name: "Alluvium (Indo-Gangetic)",
    code: AquiferCode::Alluvium,
    formation_type: "Unconsolidated - fluvial",
    description: "Thick multi-layered sand and gravel aquifers of the Indo-Gangetic plain separated by clay lenses. Among the most productive aquifers in the country.",
    area_coverage_pct: 30.0,
    weathered_zone_depth: (0.0, 20.0, "m"),
    fracture_zone_depth: (0.0, 0.0, "m"),
    yield_range: (500.0, 3000.0, "m³/day"),
    depth_to_water: (3.0, 15.0, "m bgl"),
    geological_age: "Quaternary",
    states: &["Punjab", "Haryana", "Delhi", "Uttar Pradesh", "Bihar", "West Bengal"],
    confidence: ConfidenceLabel::High,
    aquifer_system: "Multi-layered, unconfined to confined",
    transmissivity: (500.0, 5000.0, "m²/day"),
    specific_yield: (10.0, 20.0, "%"),
    water_quality: (300.0, 1500.0, "μS/cm"),
};

pub static BRAHMAPUTRA_ALLUVIUM: AquiferTemplate = AquiferTemplate {
    name: "Alluvium (Brahmaputra Valley)",
    code: AquiferCode::Alluvium,
    formation_type: "Unconsolidated - fluvial",
    description: "Coarse sand and gravel of the Brahmaputra valley fill with a shallow water table and abundant recharge.",
    area_coverage_pct: 1.8,
    weathered_zone_depth: (0.0, 10.0, "m"),
    fracture_zone_depth: (0.0, 0.0, "m"),
    yield_range: (400.0, 2500.0, "m³/day"),
    depth_to_water: (2.0, 8.0, "m bgl"),
    geological_age: "Quaternary",
    states: &["Assam"],
    confidence: ConfidenceLabel::High,
    aquifer_system: "Unconfined to semi-confined",
    transmissivity: (300.0, 3000.0, "m²/day"),
    specific_yield: (10.0, 18.0, "%"),
    water_quality: (100.0, 800.0, "μS/cm"),
};

pub static DECCAN_BASALT: AquiferTemplate = AquiferTemplate {
    name: "Basalt (Deccan Traps)",
    code: AquiferCode::Basalt,
    formation_type: "Consolidated - volcanic",
    description: "Horizontal lava flows of the Deccan Traps. Groundwater occurs in the weathered mantle, vesicular units and inter-flow fractures.",
    area_coverage_pct: 16.5,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 60.0, "m"),
    yield_range: (20.0, 150.0, "m³/day"),
    depth_to_water: (5.0, 20.0, "m bgl"),
    geological_age: "Upper Cretaceous to Lower Eocene",
    states: &["Maharashtra", "Madhya Pradesh", "Gujarat", "Karnataka", "Telangana"],
    confidence: ConfidenceLabel::High,
    aquifer_system: "Unconfined to semi-confined (weathered and fractured)",
    transmissivity: (10.0, 100.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (400.0, 1500.0, "μS/cm"),
};

pub static LATERITE: AquiferTemplate = AquiferTemplate {
    name: "Laterite",
    code: AquiferCode::Laterite,
    formation_type: "Consolidated - residual",
    description: "Porous iron-rich laterite capping over crystalline or basaltic rock. Good storage but quick drainage after the monsoon.",
    area_coverage_pct: 1.2,
    weathered_zone_depth: (5.0, 25.0, "m"),
    fracture_zone_depth: (15.0, 40.0, "m"),
    yield_range: (50.0, 300.0, "m³/day"),
    depth_to_water: (3.0, 15.0, "m bgl"),
    geological_age: "Tertiary to Quaternary",
    states: &["Kerala", "Goa", "Maharashtra", "Karnataka", "Odisha"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined",
    transmissivity: (20.0, 150.0, "m²/day"),
    specific_yield: (2.0, 5.0, "%"),
    water_quality: (50.0, 500.0, "μS/cm"),
};

pub static VINDHYAN_SANDSTONE: AquiferTemplate = AquiferTemplate {
    name: "Sandstone (Vindhyan)",
    code: AquiferCode::Sandstone,
    formation_type: "Consolidated - sedimentary",
    description: "Compact Vindhyan sandstone with shale partings. Yields depend on bedding-plane openings and joints.",
    area_coverage_pct: 8.8,
    weathered_zone_depth: (5.0, 15.0, "m"),
    fracture_zone_depth: (15.0, 80.0, "m"),
    yield_range: (30.0, 250.0, "m³/day"),
    depth_to_water: (5.0, 25.0, "m bgl"),
    geological_age: "Proterozoic",
    states: &["Madhya Pradesh", "Rajasthan", "Uttar Pradesh", "Bihar"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined to semi-confined",
    transmissivity: (10.0, 150.0, "m²/day"),
    specific_yield: (1.0, 4.0, "%"),
    water_quality: (300.0, 1500.0, "μS/cm"),
};

pub static GONDWANA_SANDSTONE: AquiferTemplate = AquiferTemplate {
    name: "Sandstone (Gondwana)",
    code: AquiferCode::Sandstone,
    formation_type: "Consolidated - sedimentary",
    description: "Friable Gondwana sandstone in rift basins, often with confined layers beneath shale.",
    area_coverage_pct: 3.0,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 100.0, "m"),
    yield_range: (50.0, 400.0, "m³/day"),
    depth_to_water: (5.0, 20.0, "m bgl"),
    geological_age: "Permian to Cretaceous",
    states: &["Telangana", "Chhattisgarh", "Odisha", "Jharkhand", "Maharashtra"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Semi-confined to confined",
    transmissivity: (20.0, 300.0, "m²/day"),
    specific_yield: (2.0, 8.0, "%"),
    water_quality: (200.0, 1200.0, "μS/cm"),
};

pub static SIWALIK_SANDSTONE: AquiferTemplate = AquiferTemplate {
    name: "Sandstone (Siwalik)",
    code: AquiferCode::Sandstone,
    formation_type: "Semi-consolidated - molasse",
    description: "Soft sandstone, clay and boulder beds of the Himalayan foothills. Deep water table on ridges, springs along valleys.",
    area_coverage_pct: 1.2,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 100.0, "m"),
    yield_range: (50.0, 500.0, "m³/day"),
    depth_to_water: (10.0, 60.0, "m bgl"),
    geological_age: "Miocene to Pleistocene",
    states: &["Jammu and Kashmir", "Himachal Pradesh", "Punjab", "Uttarakhand"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined to semi-confined",
    transmissivity: (20.0, 400.0, "m²/day"),
    specific_yield: (3.0, 10.0, "%"),
    water_quality: (200.0, 800.0, "μS/cm"),
};

pub static CUDDAPAH_LIMESTONE: AquiferTemplate = AquiferTemplate {
    name: "Limestone (Cuddapah)",
    code: AquiferCode::Limestone,
    formation_type: "Consolidated - carbonate",
    description: "Cuddapah limestone and shale. Solution cavities give high but erratic yields.",
    area_coverage_pct: 1.5,
    weathered_zone_depth: (5.0, 15.0, "m"),
    fracture_zone_depth: (15.0, 60.0, "m"),
    yield_range: (20.0, 300.0, "m³/day"),
    depth_to_water: (5.0, 25.0, "m bgl"),
    geological_age: "Proterozoic",
    states: &["Andhra Pradesh", "Telangana", "Karnataka"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (karstic)",
    transmissivity: (5.0, 200.0, "m²/day"),
    specific_yield: (1.0, 5.0, "%"),
    water_quality: (500.0, 2500.0, "μS/cm"),
};

pub static SCHIST: AquiferTemplate = AquiferTemplate {
    name: "Schist",
    code: AquiferCode::Schist,
    formation_type: "Consolidated - metamorphic",
    description: "Foliated schist and phyllite. Groundwater is confined to the weathered zone and foliation-parallel fractures.",
    area_coverage_pct: 5.5,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 60.0, "m"),
    yield_range: (10.0, 100.0, "m³/day"),
    depth_to_water: (8.0, 30.0, "m bgl"),
    geological_age: "Archaean to Proterozoic",
    states: &["Rajasthan", "Karnataka", "Gujarat", "Haryana"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 60.0, "m²/day"),
    specific_yield: (1.0, 2.0, "%"),
    water_quality: (500.0, 3000.0, "μS/cm"),
};

pub static GNEISS: AquiferTemplate = AquiferTemplate {
    name: "Gneiss (Peninsular Gneissic Complex)",
    code: AquiferCode::Gneiss,
    formation_type: "Consolidated - crystalline",
    description: "Granitic gneiss of the peninsular shield. A thick weathered mantle over sparse, deep fractures.",
    area_coverage_pct: 14.0,
    weathered_zone_depth: (5.0, 25.0, "m"),
    fracture_zone_depth: (20.0, 80.0, "m"),
    yield_range: (15.0, 150.0, "m³/day"),
    depth_to_water: (8.0, 30.0, "m bgl"),
    geological_age: "Archaean",
    states: &["Karnataka", "Telangana", "Tamil Nadu", "Andhra Pradesh", "Meghalaya"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 80.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (400.0, 2500.0, "μS/cm"),
};

pub static GRANITE: AquiferTemplate = AquiferTemplate {
    name: "Granite",
    code: AquiferCode::Granite,
    formation_type: "Consolidated - intrusive",
    description: "Massive granite with sheet joints. Productive only where fractures are intersected.",
    area_coverage_pct: 10.0,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 70.0, "m"),
    yield_range: (15.0, 120.0, "m³/day"),
    depth_to_water: (6.0, 25.0, "m bgl"),
    geological_age: "Archaean to Proterozoic",
    states: &["Jharkhand", "Uttar Pradesh", "Madhya Pradesh", "Karnataka", "Rajasthan"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 70.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (300.0, 1800.0, "μS/cm"),
};

pub static KHONDALITE: AquiferTemplate = AquiferTemplate {
    name: "Khondalite",
    code: AquiferCode::Khondalite,
    formation_type: "Consolidated - metamorphic",
    description: "Garnet-sillimanite gneiss of the Eastern Ghats with a deep clayey weathered profile.",
    area_coverage_pct: 1.3,
    weathered_zone_depth: (5.0, 30.0, "m"),
    fracture_zone_depth: (25.0, 70.0, "m"),
    yield_range: (20.0, 100.0, "m³/day"),
    depth_to_water: (5.0, 20.0, "m bgl"),
    geological_age: "Archaean",
    states: &["Odisha", "Andhra Pradesh"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 50.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (300.0, 1500.0, "μS/cm"),
};

pub static CHARNOCKITE: AquiferTemplate = AquiferTemplate {
    name: "Charnockite",
    code: AquiferCode::Charnockite,
    formation_type: "Consolidated - crystalline",
    description: "Hard, poorly weathered charnockite of the southern granulite terrain. Low storage, fracture-controlled yields.",
    area_coverage_pct: 2.5,
    weathered_zone_depth: (3.0, 15.0, "m"),
    fracture_zone_depth: (15.0, 60.0, "m"),
    yield_range: (10.0, 80.0, "m³/day"),
    depth_to_water: (5.0, 20.0, "m bgl"),
    geological_age: "Archaean",
    states: &["Tamil Nadu", "Kerala", "Andhra Pradesh", "Karnataka"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (fractured)",
    transmissivity: (3.0, 40.0, "m²/day"),
    specific_yield: (1.0, 2.0, "%"),
    water_quality: (300.0, 2000.0, "μS/cm"),
};

pub static BANDED_GNEISSIC_COMPLEX: AquiferTemplate = AquiferTemplate {
    name: "Banded Gneissic Complex",
    code: AquiferCode::BandedGneissicComplex,
    formation_type: "Consolidated - metamorphic",
    description: "Banded gneiss and migmatite of the Aravalli craton. Thin weathered zone in a dry climate.",
    area_coverage_pct: 7.0,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 60.0, "m"),
    yield_range: (10.0, 100.0, "m³/day"),
    depth_to_water: (10.0, 35.0, "m bgl"),
    geological_age: "Archaean",
    states: &["Rajasthan", "Gujarat"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 50.0, "m²/day"),
    specific_yield: (1.0, 2.0, "%"),
    water_quality: (800.0, 4000.0, "μS/cm"),
};

pub static HIMALAYAN_CRYSTALLINES: AquiferTemplate = AquiferTemplate {
    name: "Himalayan Crystallines",
    code: AquiferCode::HimalayanCrystalline,
    formation_type: "Consolidated - metamorphic (fractured)",
    description: "Fractured gneiss, schist and quartzite of the Himalaya. Groundwater emerges mainly as springs along fractures and slope breaks.",
    area_coverage_pct: 4.0,
    weathered_zone_depth: (2.0, 10.0, "m"),
    fracture_zone_depth: (10.0, 50.0, "m"),
    yield_range: (10.0, 100.0, "m³/day"),
    depth_to_water: (5.0, 40.0, "m bgl"),
    geological_age: "Precambrian to Tertiary",
    states: &["Jammu and Kashmir", "Ladakh", "Himachal Pradesh", "Uttarakhand", "Sikkim", "Arunachal Pradesh"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Spring-fed fractured rock",
    transmissivity: (1.0, 50.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (50.0, 500.0, "μS/cm"),
};

pub static AEOLIAN_DESERT: AquiferTemplate = AquiferTemplate {
    name: "Aeolian Desert Sands",
    code: AquiferCode::AeolianDesert,
    formation_type: "Unconsolidated - aeolian",
    description: "Wind-blown sand over older alluvium and bedrock. Deep, patchy water table with high natural salinity.",
    area_coverage_pct: 3.0,
    weathered_zone_depth: (0.0, 20.0, "m"),
    fracture_zone_depth: (0.0, 0.0, "m"),
    yield_range: (20.0, 200.0, "m³/day"),
    depth_to_water: (30.0, 100.0, "m bgl"),
    geological_age: "Quaternary",
    states: &["Rajasthan", "Gujarat"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (deep and patchy)",
    transmissivity: (10.0, 200.0, "m²/day"),
    specific_yield: (5.0, 12.0, "%"),
    water_quality: (2000.0, 8000.0, "μS/cm"),
};

pub static NORTHEAST_HILL_SEDIMENTS: AquiferTemplate = AquiferTemplate {
    name: "Northeast Hill Tertiary Sediments",
    code: AquiferCode::NortheastHillSediments,
    formation_type: "Semi-consolidated - sedimentary",
    description: "Folded Tertiary sandstone and shale of the northeastern hill ranges. Springs and shallow valley-fill aquifers.",
    area_coverage_pct: 2.0,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (15.0, 60.0, "m"),
    yield_range: (20.0, 200.0, "m³/day"),
    depth_to_water: (3.0, 20.0, "m bgl"),
    geological_age: "Tertiary",
    states: &["Nagaland", "Manipur", "Mizoram", "Tripura", "Meghalaya", "Arunachal Pradesh"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Spring-fed and semi-confined",
    transmissivity: (5.0, 100.0, "m²/day"),
    specific_yield: (2.0, 6.0, "%"),
    water_quality: (50.0, 400.0, "μS/cm"),
};

/// Generic hard-rock descriptor used whenever nothing better is known
pub static HARD_ROCK: AquiferTemplate = AquiferTemplate {
    name: "Hard Rock (Undifferentiated)",
    code: AquiferCode::HardRock,
    formation_type: "Consolidated - crystalline",
    description: "Undifferentiated crystalline basement. Groundwater is restricted to the weathered mantle and fracture zones; a site survey is recommended.",
    area_coverage_pct: 65.0,
    weathered_zone_depth: (5.0, 20.0, "m"),
    fracture_zone_depth: (20.0, 60.0, "m"),
    yield_range: (10.0, 100.0, "m³/day"),
    depth_to_water: (5.0, 25.0, "m bgl"),
    geological_age: "Archaean to Proterozoic",
    states: &["Multiple states"],
    confidence: ConfidenceLabel::Medium,
    aquifer_system: "Unconfined (weathered and fractured)",
    transmissivity: (5.0, 50.0, "m²/day"),
    specific_yield: (1.0, 3.0, "%"),
    water_quality: (300.0, 2000.0, "μS/cm"),
};
