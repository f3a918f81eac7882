//! Aquifer Descriptor types
//!
//! The descriptor is what the presentation layer renders verbatim, so every
//! text field holds final, user-presentable wording.

use serde::{Deserialize, Serialize};

use super::range::ValueRange;

/// Principal aquifer codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AquiferCode {
    #[serde(rename = "AL")]
    Alluvium,
    #[serde(rename = "LT")]
    Laterite,
    #[serde(rename = "BS")]
    Basalt,
    #[serde(rename = "ST")]
    Sandstone,
    #[serde(rename = "LS")]
    Limestone,
    #[serde(rename = "SC")]
    Schist,
    #[serde(rename = "GN")]
    Gneiss,
    #[serde(rename = "GR")]
    Granite,
    #[serde(rename = "KH")]
    Khondalite,
    #[serde(rename = "CK")]
    Charnockite,
    #[serde(rename = "BG")]
    BandedGneissicComplex,
    #[serde(rename = "HM")]
    HimalayanCrystalline,
    #[serde(rename = "NH")]
    NortheastHillSediments,
    #[serde(rename = "DS")]
    AeolianDesert,
    /// Undifferentiated hard rock, used for the Default descriptor
    #[serde(rename = "HR")]
    HardRock,
}

impl AquiferCode {
    pub fn code(&self) -> &'static str {
        match self {
            AquiferCode::Alluvium => "AL",
            AquiferCode::Laterite => "LT",
            AquiferCode::Basalt => "BS",
            AquiferCode::Sandstone => "ST",
            AquiferCode::Limestone => "LS",
            AquiferCode::Schist => "SC",
            AquiferCode::Gneiss => "GN",
            AquiferCode::Granite => "GR",
            AquiferCode::Khondalite => "KH",
            AquiferCode::Charnockite => "CK",
            AquiferCode::BandedGneissicComplex => "BG",
            AquiferCode::HimalayanCrystalline => "HM",
            AquiferCode::NortheastHillSediments => "NH",
            AquiferCode::AeolianDesert => "DS",
            AquiferCode::HardRock => "HR",
        }
    }

    pub fn is_alluvial(&self) -> bool {
        matches!(self, AquiferCode::Alluvium)
    }

    /// Hill or mountain aquifers (fractured rock fed by springs)
    pub fn is_hill_or_mountain(&self) -> bool {
        matches!(self, AquiferCode::HimalayanCrystalline | AquiferCode::NortheastHillSediments)
    }

    pub fn is_desert(&self) -> bool {
        matches!(self, AquiferCode::AeolianDesert)
    }

    /// Himalayan-type codes
    pub fn is_himalayan(&self) -> bool {
        matches!(self, AquiferCode::HimalayanCrystalline)
    }
}

/// Qualitative confidence of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    Low,
    Medium,
    High,
}

impl ConfidenceLabel {
    /// Label implied by a numeric confidence in [0, 1]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            ConfidenceLabel::High
        } else if confidence >= 0.3 {
            ConfidenceLabel::Medium
        } else {
            ConfidenceLabel::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::Medium => "Medium",
            ConfidenceLabel::High => "High",
        }
    }
}

/// Hydrogeological description of a principal aquifer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquiferDescriptor {
    pub name: String,
    pub code: AquiferCode,
    pub formation_type: String,
    pub description: String,
    /// Share of India's area underlain by this aquifer (%)
    pub area_coverage_pct: f64,
    pub weathered_zone_depth: ValueRange,
    pub fracture_zone_depth: ValueRange,
    pub yield_range: ValueRange,
    pub depth_to_water: ValueRange,
    pub geological_age: String,
    pub states: Vec<String>,
    pub confidence: ConfidenceLabel,
    pub aquifer_system: String,
    pub transmissivity: ValueRange,
    pub specific_yield: ValueRange,
    /// Electrical conductivity range
    pub water_quality: ValueRange,
}

impl AquiferDescriptor {
    /// Append a sentence to the description
    pub fn append_note(&mut self, note: &str) {
        if !self.description.is_empty() && !self.description.ends_with(' ') {
            self.description.push(' ');
        }
        self.description.push_str(note);
    }
}

/// Compile-time description of an aquifer, turned into an owned
/// `AquiferDescriptor` when the catalog is built
pub struct AquiferTemplate {
    pub name: &'static str,
    pub code: AquiferCode,
    pub formation_type: &'static str,
    pub description: &'static str,
    pub area_coverage_pct: f64,
    pub weathered_zone_depth: (f64, f64, &'static str),
    pub fracture_zone_depth: (f64, f64, &'static str),
    pub yield_range: (f64, f64, &'static str),
    pub depth_to_water: (f64, f64, &'static str),
    pub geological_age: &'static str,
    pub states: &'static [&'static str],
    pub confidence: ConfidenceLabel,
    pub aquifer_system: &'static str,
    pub transmissivity: (f64, f64, &'static str),
    pub specific_yield: (f64, f64, &'static str),
    pub water_quality: (f64, f64, &'static str),
}

fn range((min, max, unit): (f64, f64, &'static str)) -> ValueRange {
    ValueRange::new(min, max, unit)
}

impl AquiferTemplate {
    pub fn to_descriptor(&self) -> AquiferDescriptor {
        AquiferDescriptor {
            name: self.name.to_string(),
            code: self.code,
            formation_type: self.formation_type.to_string(),
            description: self.description.to_string(),
            area_coverage_pct: self.area_coverage_pct,
            weathered_zone_depth: range(self.weathered_zone_depth),
            fracture_zone_depth: range(self.fracture_zone_depth),
            yield_range: range(self.yield_range),
            depth_to_water: range(self.depth_to_water),
            geological_age: self.geological_age.to_string(),
            states: self.states.iter().map(|s| s.to_string()).collect(),
            confidence: self.confidence,
            aquifer_system: self.aquifer_system.to_string(),
            transmissivity: range(self.transmissivity),
            specific_yield: range(self.specific_yield),
            water_quality: range(self.water_quality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_serde_matches_code() {
        for code in [AquiferCode::Alluvium, AquiferCode::Basalt, AquiferCode::HardRock] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.code()));
        }
    }

    #[test]
    fn test_confidence_label_bands() {
        assert_eq!(ConfidenceLabel::from_confidence(1.0), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_confidence(0.5), ConfidenceLabel::Medium);
        assert_eq!(ConfidenceLabel::from_confidence(0.25), ConfidenceLabel::Low);
        assert!(ConfidenceLabel::Low < ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::High.min(ConfidenceLabel::Medium), ConfidenceLabel::Medium);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(AquiferCode::Alluvium.is_alluvial());
        assert!(AquiferCode::HimalayanCrystalline.is_hill_or_mountain());
        assert!(AquiferCode::NortheastHillSediments.is_hill_or_mountain());
        assert!(AquiferCode::AeolianDesert.is_desert());
        assert!(!AquiferCode::Basalt.is_alluvial());
    }
}
