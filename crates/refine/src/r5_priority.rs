//! R5 — Priority scoring.
//!
//! Every surviving refinement starts at the Medium baseline. Applicable
//! Priority-kind special interactions raise the score to at least their
//! declared value (a floor, not a sum); structural adjustments are
//! additive and evaluated independently. Thresholds and increments are
//! fixed constants of the design, not configuration.
//!
//! Pruned duplicates are not scored; they keep the baseline, and their
//! priority carries no meaning.

use crate::bundle::RefinementBundle;
use crate::r3_constraints;
use std::collections::BTreeSet;
use ucca_core::{AbstractUcca, Priority, RefinedUcca, SpecialInteractionKind, UccaType};

/// Medium baseline every refinement starts from.
pub const BASE_SCORE: u32 = 5;
/// Scores at or above this classify High.
pub const HIGH_THRESHOLD: u32 = 8;
/// Scores at or above this (and below High) classify Medium.
pub const MEDIUM_THRESHOLD: u32 = 5;
/// Distinct-controller count above which the score gets a bump.
const MANY_CONTROLLERS: usize = 3;

/// Classify a numeric score.
pub fn classify(score: u32) -> Priority {
    if score >= HIGH_THRESHOLD {
        Priority::High
    } else if score >= MEDIUM_THRESHOLD {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Score every non-pruned refinement in place.
pub fn score_all(refined: &mut [RefinedUcca], ucca: &AbstractUcca, bundle: &RefinementBundle) {
    for r in refined.iter_mut() {
        if r.is_pruned {
            continue;
        }
        let score = score_one(r, ucca, bundle);
        r.priority_score = score;
        r.priority = classify(score);
    }
}

fn score_one(r: &RefinedUcca, ucca: &AbstractUcca, bundle: &RefinementBundle) -> u32 {
    let mut score = BASE_SCORE;

    // Priority interactions act as floors.
    for interaction in &bundle.config.special_interactions {
        if interaction.kind != SpecialInteractionKind::Priority {
            continue;
        }
        if !interaction.applies_to.matches(ucca.ucca_type) {
            continue;
        }
        if let Some(floor) = interaction.priority {
            if r3_constraints::is_applicable(&r.assignments, interaction) {
                score = score.max(floor);
            }
        }
    }

    let distinct_controllers: BTreeSet<&str> = r
        .assignments
        .iter()
        .map(|a| a.controller_id.as_str())
        .collect();
    if distinct_controllers.len() > MANY_CONTROLLERS {
        score += 1;
    }
    if ucca.hazard_ids.len() > 1 {
        score += 1;
    }
    if ucca.ucca_type == UccaType::Temporal {
        score += 1;
    }

    score
}
