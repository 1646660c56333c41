//! R3 — Constraint filtering.
//!
//! Rejects candidate assignment sets that violate authority declarations
//! or special interaction rules:
//!
//! 1. Every `performed = true` assignment needs an affirmative authority
//!    declaration, unless `include_partial_authority` tolerates gaps.
//! 2. No applicable Prohibited interaction may match a performed
//!    assignment.
//! 3. Every applicable Mandatory interaction must be satisfied.
//!
//! An interaction applies when its `applies_to` class matches the UCCA's
//! type and its controller/action sets intersect the candidate. Empty
//! controller/action lists act as wildcards. Free-text constraints on an
//! authority relationship are accepted as always satisfied; a constraint
//! expression language is a deliberate extension point, not an oversight.

use crate::bundle::RefinementBundle;
use crate::r2_combinations::Candidate;
use ucca_core::{AbstractUcca, SpecialInteraction, SpecialInteractionKind};

/// Filter candidates down to those consistent with authority and special
/// interaction rules. Rejected candidates are absent from the output
/// entirely (not pruned-but-retained; that is the deduplicator's domain).
pub fn filter(
    ucca: &AbstractUcca,
    candidates: Vec<Candidate>,
    bundle: &RefinementBundle,
) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| admits(ucca, candidate, bundle))
        .collect()
}

fn admits(ucca: &AbstractUcca, candidate: &Candidate, bundle: &RefinementBundle) -> bool {
    if !authority_sound(candidate, bundle) {
        return false;
    }
    for interaction in &bundle.config.special_interactions {
        if !interaction.applies_to.matches(ucca.ucca_type) {
            continue;
        }
        match interaction.kind {
            SpecialInteractionKind::Prohibited => {
                if violates_prohibited(candidate, interaction) {
                    return false;
                }
            }
            SpecialInteractionKind::Mandatory => {
                if is_applicable(candidate, interaction)
                    && !satisfies_mandatory(candidate, interaction)
                {
                    return false;
                }
            }
            // Priority interactions never reject; the scorer consumes them.
            SpecialInteractionKind::Priority => {}
        }
    }
    true
}

/// Every performed assignment has an affirmative authority declaration.
/// In partial-authority mode a MISSING declaration is tolerated; an
/// explicit denial (`has_authority = false`) always rejects.
fn authority_sound(candidate: &Candidate, bundle: &RefinementBundle) -> bool {
    candidate.iter().all(|assignment| {
        if !assignment.performed {
            return true;
        }
        match bundle
            .authority
            .lookup(&assignment.controller_id, &assignment.control_action_id)
        {
            Some(rel) => rel.has_authority,
            None => bundle.config.include_partial_authority,
        }
    })
}

fn controller_matches(interaction: &SpecialInteraction, controller_id: &str) -> bool {
    interaction.controller_ids.is_empty()
        || interaction.controller_ids.iter().any(|c| c == controller_id)
}

fn action_matches(interaction: &SpecialInteraction, control_action_id: &str) -> bool {
    interaction.control_action_ids.is_empty()
        || interaction
            .control_action_ids
            .iter()
            .any(|a| a == control_action_id)
}

/// A Prohibited interaction is violated when some performed assignment
/// falls inside both its controller set and its action set.
fn violates_prohibited(candidate: &Candidate, interaction: &SpecialInteraction) -> bool {
    candidate.iter().any(|assignment| {
        assignment.performed
            && controller_matches(interaction, &assignment.controller_id)
            && action_matches(interaction, &assignment.control_action_id)
    })
}

/// An interaction touches the candidate: shares a controller or an action
/// with any of its assignments. Also used by the priority scorer.
pub(crate) fn is_applicable(candidate: &Candidate, interaction: &SpecialInteraction) -> bool {
    candidate.iter().any(|assignment| {
        controller_matches(interaction, &assignment.controller_id)
            || action_matches(interaction, &assignment.control_action_id)
    })
}

/// A Mandatory interaction is satisfied when each of its listed actions is
/// performed by some controller in its controller set. With an empty action
/// list, some performed assignment inside the controller set suffices.
fn satisfies_mandatory(candidate: &Candidate, interaction: &SpecialInteraction) -> bool {
    if interaction.control_action_ids.is_empty() {
        return candidate.iter().any(|assignment| {
            assignment.performed && controller_matches(interaction, &assignment.controller_id)
        });
    }
    interaction.control_action_ids.iter().all(|action_id| {
        candidate.iter().any(|assignment| {
            assignment.performed
                && assignment.control_action_id == *action_id
                && controller_matches(interaction, &assignment.controller_id)
        })
    })
}
