//! Error types
//!
//! `ResolveError` covers the only two conditions the resolution engine
//! recognises. Neither escapes `AquiferResolver::resolve`; both collapse to
//! the Default descriptor there.
//!
//! `CatalogError` is raised while parsing or validating catalog data, which
//! only happens at startup.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    /// Coordinate outside the India envelope, or not a finite number
    #[error("coordinate ({lat}, {lng}) is outside the supported region")]
    OutOfBounds { lat: f64, lng: f64 },

    /// Something inside matching, ranking or adjustment went wrong
    #[error("internal computation fault: {0}")]
    InternalFault(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("invalid range '{0}': expected 'min-max unit'")]
    InvalidRange(String),

    #[error("invalid exclusion condition '{0}'")]
    InvalidCondition(String),

    #[error("zone '{name}': {reason}")]
    InvalidZone { name: String, reason: String },
}
