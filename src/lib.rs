//! Aquifer Resolver Rust Implementation
//!
//! Resolves the principal aquifer underlying a coordinate in India from a
//! static catalog of overlapping, prioritized geological zones.
//!
//! Module structure:
//! - `geo/`: Coordinates, India envelope, boundary shapes
//! - `context/`: Geographic Context Builder (elevation, climate, terrain, urbanization)
//! - `catalog/`: Aquifer descriptors and the primary/special zone catalogs
//! - `matcher`: Zone Matcher
//! - `ranking`: Candidate Ranker and ordered tie-break rules
//! - `adjuster`: Dynamic Adjuster (contextual caveats, range widening)
//! - `engine`: Resolution Engine
//! - `report/`: Markdown and JSON formatters
//!
//! Resolution is pure and synchronous: no I/O, no shared mutable state.

pub mod geo;
pub mod context;
pub mod catalog;
pub mod matcher;
pub mod ranking;
pub mod adjuster;
pub mod engine;
pub mod config;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use geo::{Boundary, Coordinate, GeoBounds};
pub use context::{build_context, GeographicContext};
pub use catalog::{AquiferCode, AquiferDescriptor, ConfidenceLabel, GeologicalZone, ValueRange, ZoneCatalog, ZoneSetting};
pub use matcher::{CandidateMatch, MatchType};
pub use adjuster::{adjust, AdjustedDescriptor};
pub use engine::{resolve_aquifer, AquiferResolution, AquiferResolver};
pub use config::EngineConfig;
pub use error::{CatalogError, ResolveError};
