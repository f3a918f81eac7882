//! Geometry primitives for aquifer resolution
//!
//! - `coordinate.rs` - Coordinate type, India envelope, haversine distance
//! - `boundary.rs` - Zone boundary shapes and containment tests

pub mod coordinate;
pub mod boundary;

pub use coordinate::{Coordinate, GeoBounds, haversine_km, EARTH_RADIUS_KM};
pub use boundary::{Boundary, point_in_polygon};
