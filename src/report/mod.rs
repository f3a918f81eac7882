//! Presentation formatters for resolutions
//!
//! Ranges are rendered as `"min-max unit"` text here and nowhere earlier.

pub mod markdown;
pub mod json;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
