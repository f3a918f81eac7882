//! JSON output
//!
//! Descriptor ranges serialize as `"min-max unit"` strings; the context is
//! null for out-of-bounds coordinates.

use serde_json::{json, Value};

use crate::engine::AquiferResolution;

/// JSON formatter for resolutions
pub struct JsonFormatter;

impl JsonFormatter {
    /// Resolution as a JSON value
    pub fn to_value(resolution: &AquiferResolution) -> Value {
        json!({
            "aquifer": resolution.descriptor,
            "confidence": (resolution.confidence * 100.0).round() / 100.0,
            "match_type": resolution.match_type,
            "zone": resolution.zone_name,
            "context": resolution.context,
            "notes": resolution.notes,
        })
    }

    /// Format resolution as pretty-printed JSON
    pub fn format(resolution: &AquiferResolution) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::to_value(resolution))
    }

    /// Format a batch as compact JSON (no whitespace)
    pub fn format_batch_compact(resolutions: &[AquiferResolution]) -> Result<String, serde_json::Error> {
        let values: Vec<Value> = resolutions.iter().map(Self::to_value).collect();
        serde_json::to_string(&values)
    }
}
