//! Structured numeric ranges
//!
//! Depth, yield and water-quality ranges are kept as `(min, max, unit)` and
//! only rendered to `"min-max unit"` text at the presentation boundary.
//! Catalog files may still write them as text; parsing happens once at load.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl ValueRange {
    pub fn new(min: f64, max: f64, unit: &str) -> Self {
        Self { min, max, unit: unit.to_string() }
    }

    /// Multiply both bounds by `factor` and round to the nearest integer.
    /// The unit is kept.
    pub fn widen(&self, factor: f64) -> Self {
        Self {
            min: (self.min * factor).round(),
            max: (self.max * factor).round(),
            unit: self.unit.clone(),
        }
    }

    pub fn widen_in_place(&mut self, factor: f64) {
        *self = self.widen(factor);
    }

    /// Both bounds of `self` are at least those of `other`
    pub fn dominates(&self, other: &ValueRange) -> bool {
        self.min >= other.min && self.max >= other.max
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = if self.min == self.max {
            format_number(self.min)
        } else {
            format!("{}-{}", format_number(self.min), format_number(self.max))
        };
        if self.unit.is_empty() {
            write!(f, "{}", span)
        } else {
            write!(f, "{} {}", span, self.unit)
        }
    }
}

/// Split a leading unsigned decimal number off `s`
fn take_number(s: &str) -> Option<(f64, &str)> {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let value = s[..end].parse::<f64>().ok()?;
    Some((value, &s[end..]))
}

impl FromStr for ValueRange {
    type Err = CatalogError;

    /// Accepts `"min-max unit"`, `"min-maxunit"`, `"min - max"` and a single
    /// value `"n unit"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidRange(s.to_string());
        let text = s.trim();

        let (min, rest) = take_number(text).ok_or_else(invalid)?;
        let rest = rest.trim_start();
        let (max, rest) = match rest.strip_prefix('-') {
            Some(after_dash) => take_number(after_dash.trim_start()).ok_or_else(invalid)?,
            None => (min, rest),
        };
        if max < min {
            return Err(invalid());
        }

        Ok(ValueRange::new(min, max, rest.trim()))
    }
}

impl Serialize for ValueRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_unit() {
        let r: ValueRange = "500-2500 μS/cm".parse().unwrap();
        assert_eq!(r, ValueRange::new(500.0, 2500.0, "μS/cm"));

        let r: ValueRange = "5-15m bgl".parse().unwrap();
        assert_eq!(r, ValueRange::new(5.0, 15.0, "m bgl"));

        let r: ValueRange = "0.5 - 3".parse().unwrap();
        assert_eq!(r, ValueRange::new(0.5, 3.0, ""));
    }

    #[test]
    fn test_parse_single_value() {
        let r: ValueRange = "20 m".parse().unwrap();
        assert_eq!(r, ValueRange::new(20.0, 20.0, "m"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("deep".parse::<ValueRange>().is_err());
        assert!("30-10 m".parse::<ValueRange>().is_err());
        assert!("10- m".parse::<ValueRange>().is_err());
    }

    #[test]
    fn test_widen_rounds() {
        let ec = ValueRange::new(500.0, 2500.0, "μS/cm").widen(1.3);
        assert_eq!(ec, ValueRange::new(650.0, 3250.0, "μS/cm"));

        let dtw = ValueRange::new(5.0, 15.0, "m bgl").widen(1.3);
        // 6.5 rounds away from zero, 19.5 likewise
        assert_eq!(dtw, ValueRange::new(7.0, 20.0, "m bgl"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueRange::new(650.0, 3250.0, "μS/cm").to_string(), "650-3250 μS/cm");
        assert_eq!(ValueRange::new(1.5, 3.0, "%").to_string(), "1.5-3 %");
        assert_eq!(ValueRange::new(0.0, 0.0, "m").to_string(), "0 m");
    }

    #[test]
    fn test_serde_as_text() {
        let r = ValueRange::new(10.0, 100.0, "m³/day");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"10-100 m³/day\"");
        let back: ValueRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
