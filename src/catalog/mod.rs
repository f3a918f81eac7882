//! Zone Catalog
//!
//! Static reference data: prioritized geological zones, each carrying an
//! aquifer descriptor, plus the fixed Default and Proximity descriptors.
//! The compiled-in catalogs are built once on first use and never mutated.
//!
//! ## Architecture
//! - `descriptor.rs` - AquiferDescriptor, AquiferCode, ConfidenceLabel
//! - `range.rs` - Structured (min, max, unit) ranges
//! - `exclusion.rs` - Excluded cities and context conditions
//! - `zone.rs` - GeologicalZone and versioned ZoneCatalog
//! - `aquifers.rs` - Principal aquifer parameter tables
//! - `primary_zones.rs` / `special_zones.rs` - Zone geometry tables
//! - `fallback.rs` - Default and Proximity descriptors

pub mod descriptor;
pub mod range;
pub mod exclusion;
pub mod zone;
pub mod aquifers;
pub mod primary_zones;
pub mod special_zones;
pub mod fallback;

use std::sync::OnceLock;

pub use descriptor::{AquiferCode, AquiferDescriptor, AquiferTemplate, ConfidenceLabel};
pub use exclusion::{ExclusionCondition, ExclusionRules};
pub use fallback::{default_descriptor, proximity_descriptor};
pub use range::ValueRange;
pub use zone::{GeologicalZone, ZoneCatalog, ZoneSetting};

/// Compiled-in primary catalog
pub fn primary_catalog() -> &'static ZoneCatalog {
    static PRIMARY: OnceLock<ZoneCatalog> = OnceLock::new();
    PRIMARY.get_or_init(primary_zones::build_primary_catalog)
}

/// Compiled-in special catalog (extreme terrain)
pub fn special_catalog() -> &'static ZoneCatalog {
    static SPECIAL: OnceLock<ZoneCatalog> = OnceLock::new();
    SPECIAL.get_or_init(special_zones::build_special_catalog)
}
