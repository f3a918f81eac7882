//! Candidate Ranker / Tie-Breaker
//!
//! Candidates are sorted by confidence, highest first, with catalog order as
//! the stable secondary key. When the top two are within epsilon of each
//! other the rules in `TIE_BREAK_RULES` are tried in order; the first rule
//! that applies to the context and finds a contender wins.

use crate::config::EngineConfig;
use crate::context::{ClimateClass, GeographicContext, TerrainClass};
use crate::matcher::{CandidateMatch, Candidates};

/// Ordered (predicate, selector) pair
pub struct TieBreakRule {
    pub name: &'static str,
    /// Does the rule apply to this location
    pub applies: fn(&GeographicContext) -> bool,
    /// Index of the preferred contender, if any
    pub select: fn(&[CandidateMatch<'_>]) -> Option<usize>,
}

fn first_where(contenders: &[CandidateMatch<'_>], pred: impl Fn(&CandidateMatch<'_>) -> bool) -> Option<usize> {
    contenders.iter().position(pred)
}

fn alluvial_above_07(c: &[CandidateMatch<'_>]) -> Option<usize> {
    first_where(c, |m| m.aquifer.code.is_alluvial() && m.confidence > 0.7)
}

fn alluvial_above_05(c: &[CandidateMatch<'_>]) -> Option<usize> {
    first_where(c, |m| m.aquifer.code.is_alluvial() && m.confidence > 0.5)
}

fn any_alluvial(c: &[CandidateMatch<'_>]) -> Option<usize> {
    first_where(c, |m| m.aquifer.code.is_alluvial())
}

fn hill_or_mountain(c: &[CandidateMatch<'_>]) -> Option<usize> {
    first_where(c, |m| m.aquifer.code.is_hill_or_mountain())
}

fn desert(c: &[CandidateMatch<'_>]) -> Option<usize> {
    first_where(c, |m| m.aquifer.code.is_desert())
}

/// Lowest zone priority among contenders above 0.6, first on ties
fn most_specific_zone(c: &[CandidateMatch<'_>]) -> Option<usize> {
    c.iter()
        .enumerate()
        .filter(|(_, m)| m.confidence > 0.6)
        .filter_map(|(i, m)| m.priority.map(|p| (i, p)))
        .min_by_key(|&(i, p)| (p, i))
        .map(|(i, _)| i)
}

pub const TIE_BREAK_RULES: &[TieBreakRule] = &[
    TieBreakRule {
        name: "shoreline alluvium",
        applies: |ctx| ctx.coastal_distance_km <= 5.0,
        select: alluvial_above_07,
    },
    TieBreakRule {
        name: "high-elevation hill aquifer",
        applies: |ctx| ctx.elevation_m > 1000.0,
        select: hill_or_mountain,
    },
    TieBreakRule {
        name: "inland arid desert aquifer",
        applies: |ctx| ctx.climate == ClimateClass::Arid && ctx.coastal_distance_km > 50.0,
        select: desert,
    },
    TieBreakRule {
        name: "coastal-terrain alluvium",
        applies: |ctx| ctx.terrain == TerrainClass::Coastal && ctx.coastal_distance_km <= 10.0,
        select: any_alluvial,
    },
    TieBreakRule {
        name: "most specific zone",
        applies: |_| true,
        select: most_specific_zone,
    },
    TieBreakRule {
        name: "near-coast alluvium",
        applies: |ctx| ctx.coastal_distance_km <= 10.0,
        select: alluvial_above_05,
    },
    TieBreakRule {
        name: "upland hill aquifer",
        applies: |ctx| ctx.elevation_m > 700.0,
        select: hill_or_mountain,
    },
    TieBreakRule {
        name: "arid desert aquifer",
        applies: |ctx| ctx.climate == ClimateClass::Arid && ctx.coastal_distance_km > 25.0,
        select: desert,
    },
    TieBreakRule {
        name: "coastal-belt alluvium",
        applies: |ctx| ctx.terrain == TerrainClass::Coastal && ctx.coastal_distance_km <= 20.0,
        select: any_alluvial,
    },
];

/// Index into `sorted` chosen by the first rule that fires, with its name
pub fn break_tie(sorted: &[CandidateMatch<'_>], ctx: &GeographicContext, epsilon: f64) -> Option<(usize, &'static str)> {
    let top = sorted.first()?.confidence;
    let contenders = sorted.iter().take_while(|c| top - c.confidence < epsilon).count();
    if contenders < 2 {
        return None;
    }

    TIE_BREAK_RULES.iter().find_map(|rule| {
        if !(rule.applies)(ctx) {
            return None;
        }
        (rule.select)(&sorted[..contenders]).map(|i| (i, rule.name))
    })
}

/// Pick one candidate. Empty input yields the Default candidate.
pub fn select_best<'a>(
    mut candidates: Candidates<'a>,
    ctx: &GeographicContext,
    config: &EngineConfig,
) -> CandidateMatch<'a> {
    if candidates.is_empty() {
        return CandidateMatch::default_match(config.default_confidence);
    }

    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let index = match break_tie(&candidates, ctx, config.tie_epsilon) {
        Some((index, rule)) => {
            tracing::debug!(
                "Near-tie resolved by '{}' rule: {}",
                rule,
                candidates[index].zone_name.unwrap_or(candidates[index].aquifer.name.as_str())
            );
            candidates[index]
                .notes
                .push(format!("Chosen over a near-equal zone by {} preference", rule));
            index
        }
        None => 0,
    };

    candidates.remove(index)
}
