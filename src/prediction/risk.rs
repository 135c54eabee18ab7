//! Risk scoring against background levels
//!
//! `risk = clamp(predicted / (baseline + 1) · 25, 0, 100)`, one decimal.
//! `Average` is the rounded mean of the five already-rounded scores.

use crate::config::defaults::{RISK_DENOMINATOR_OFFSET, RISK_MAX, RISK_SCALE};
use crate::types::{MetalMap, RiskScores};

use super::round_half_up;

/// Score a single concentration against its baseline.
pub fn risk_score(predicted: f64, baseline: f64) -> f64 {
    let raw = predicted / (baseline + RISK_DENOMINATOR_OFFSET) * RISK_SCALE;
    round_half_up(raw.clamp(0.0, RISK_MAX), 1)
}

/// Score every metal and aggregate.
pub fn risk_scores(values: &MetalMap, baseline: &MetalMap) -> RiskScores {
    let per_metal = MetalMap::from_fn(|metal| risk_score(values[metal], baseline[metal]));
    RiskScores {
        average: round_half_up(per_metal.mean(), 1),
        per_metal,
    }
}
