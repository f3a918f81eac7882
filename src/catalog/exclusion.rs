//! Zone exclusion rules
//!
//! A zone can reject a coordinate that lies inside its boundary, either
//! because the nearest city is on its excluded list or because a context
//! condition holds (e.g. `coastal distance > 12 km`).

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::context::GeographicContext;
use crate::error::CatalogError;

/// Context quantity a condition tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMetric {
    CoastalDistanceKm,
    ElevationM,
}

impl ContextMetric {
    fn read(&self, ctx: &GeographicContext) -> f64 {
        match self {
            ContextMetric::CoastalDistanceKm => ctx.coastal_distance_km,
            ContextMetric::ElevationM => ctx.elevation_m,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContextMetric::CoastalDistanceKm => "coastal distance",
            ContextMetric::ElevationM => "elevation",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            ContextMetric::CoastalDistanceKm => "km",
            ContextMetric::ElevationM => "m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

/// `metric op threshold`, true means the zone is rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionCondition {
    pub metric: ContextMetric,
    pub comparison: Comparison,
    pub threshold: f64,
}

impl ExclusionCondition {
    pub fn coastal_distance_above(km: f64) -> Self {
        Self { metric: ContextMetric::CoastalDistanceKm, comparison: Comparison::GreaterThan, threshold: km }
    }

    pub fn coastal_distance_below(km: f64) -> Self {
        Self { metric: ContextMetric::CoastalDistanceKm, comparison: Comparison::LessThan, threshold: km }
    }

    pub fn elevation_above(m: f64) -> Self {
        Self { metric: ContextMetric::ElevationM, comparison: Comparison::GreaterThan, threshold: m }
    }

    pub fn evaluate(&self, ctx: &GeographicContext) -> bool {
        let value = self.metric.read(ctx);
        match self.comparison {
            Comparison::GreaterThan => value > self.threshold,
            Comparison::LessThan => value < self.threshold,
        }
    }
}

impl fmt::Display for ExclusionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.comparison {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
        };
        write!(f, "{} {} {} {}", self.metric.label(), op, self.threshold, self.metric.unit())
    }
}

impl FromStr for ExclusionCondition {
    type Err = CatalogError;

    /// Parses `"coastal distance > 12 km"`, `"coastal_distance>12"`,
    /// `"elevation < 300 m"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidCondition(s.to_string());

        let (lhs, comparison, rhs) = if let Some((l, r)) = s.split_once('>') {
            (l, Comparison::GreaterThan, r)
        } else if let Some((l, r)) = s.split_once('<') {
            (l, Comparison::LessThan, r)
        } else {
            return Err(invalid());
        };

        let name = lhs.trim().to_lowercase().replace(['_', '-'], " ");
        let metric = match name.as_str() {
            "coastal distance" | "coastal distance km" | "distance to coast" => ContextMetric::CoastalDistanceKm,
            "elevation" | "elevation m" => ContextMetric::ElevationM,
            _ => return Err(invalid()),
        };

        let rhs = rhs.trim();
        let number_end = rhs
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rhs.len());
        let threshold: f64 = rhs[..number_end].parse().map_err(|_| invalid())?;
        let unit = rhs[number_end..].trim();
        if !unit.is_empty() && unit != metric.unit() {
            return Err(invalid());
        }

        Ok(Self { metric, comparison, threshold })
    }
}

impl Serialize for ExclusionCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExclusionCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// All exclusion rules of one zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRules {
    #[serde(default)]
    pub excluded_cities: FxHashSet<String>,
    #[serde(default)]
    pub conditions: Vec<ExclusionCondition>,
}

impl ExclusionRules {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_conditions(conditions: &[ExclusionCondition]) -> Self {
        Self { excluded_cities: FxHashSet::default(), conditions: conditions.to_vec() }
    }

    pub fn excluding_cities(mut self, cities: &[&str]) -> Self {
        self.excluded_cities.extend(cities.iter().map(|c| c.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.excluded_cities.is_empty() && self.conditions.is_empty()
    }

    /// Reason the zone is rejected, if any
    pub fn rejection(&self, nearest_city: Option<&str>, ctx: &GeographicContext) -> Option<String> {
        if let Some(city) = nearest_city.filter(|c| self.excluded_cities.contains(*c)) {
            return Some(format!("excluded near {}", city));
        }
        self.conditions
            .iter()
            .find(|c| c.evaluate(ctx))
            .map(|c| format!("excluded where {}", c))
    }
}
