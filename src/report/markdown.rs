//! Markdown output: heading, confidence line, parameter table and notes

use crate::engine::AquiferResolution;
use crate::geo::Coordinate;

/// Markdown formatter for resolutions
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format one resolution as a markdown section
    pub fn format(coord: &Coordinate, resolution: &AquiferResolution) -> String {
        let d = &resolution.descriptor;
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("## {} ({})\n\n", d.name, d.code.code()));
        md.push_str(&format!("**Location:** {:.4}, {:.4}  \n", coord.lat, coord.lng));
        md.push_str(&format!(
            "**Confidence:** {} ({:.2}, {} match)  \n",
            d.confidence.display_text(),
            resolution.confidence,
            resolution.match_type.display_name()
        ));
        if let Some(zone) = &resolution.zone_name {
            md.push_str(&format!("**Zone:** {}  \n", zone));
        }
        if let Some(ctx) = &resolution.context {
            md.push_str(&format!("**Setting:** {}  \n", ctx.summary()));
        }
        md.push('\n');

        md.push_str(&format!("{}\n\n", d.description));

        md.push_str("| Parameter | Value |\n|---|---|\n");
        let rows = [
            ("Formation", d.formation_type.clone()),
            ("Geological age", d.geological_age.clone()),
            ("Aquifer system", d.aquifer_system.clone()),
            ("Weathered zone", d.weathered_zone_depth.to_string()),
            ("Fracture zone", d.fracture_zone_depth.to_string()),
            ("Yield", d.yield_range.to_string()),
            ("Depth to water", d.depth_to_water.to_string()),
            ("Transmissivity", d.transmissivity.to_string()),
            ("Specific yield", d.specific_yield.to_string()),
            ("Water quality (EC)", d.water_quality.to_string()),
        ];
        for (label, value) in rows {
            md.push_str(&format!("| {} | {} |\n", label, value));
        }
        md.push('\n');

        if !resolution.notes.is_empty() {
            md.push_str("### Notes\n\n");
            for note in &resolution.notes {
                md.push_str(&format!("- {}\n", note));
            }
            md.push('\n');
        }

        md
    }
}
