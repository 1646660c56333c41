//! R2 — Combination generation.
//!
//! Expands the requirement list into candidate controller-to-action
//! assignment sets.
//!
//! Team-level (2a) refinement enumerates the FULL cross-product of
//! authorized-controller choices across all requirements, one choice
//! dimension per requirement. The cross-product is driven by a lazy
//! mixed-radix iterator so the per-UCCA candidate limit short-circuits
//! generation without materializing the whole product.
//!
//! Controller-specific (2b) refinement fixes the controller set to the
//! abstract UCCA's own `involved_controller_ids` and produces a single
//! candidate: for each requirement, one assignment per involved controller
//! holding authority over the action. Multiple controllers performing the
//! same required action is valid (a genuine unsafe-redundancy scenario);
//! negated requirements assert `performed = false`, vacuously skipping
//! controllers that could never perform the action.

use crate::bundle::RefinementBundle;
use crate::error::RefineError;
use ucca_core::{AbstractUcca, AbstractionLevel, ActionRequirement, ControllerAssignment};

/// One candidate refinement: an assignment set.
pub type Candidate = Vec<ControllerAssignment>;

/// Lazy mixed-radix counter over the per-requirement choice sets.
/// Yields one index vector per cross-product element.
struct CombinationIter {
    radices: Vec<usize>,
    indices: Vec<usize>,
    done: bool,
}

impl CombinationIter {
    fn new(radices: Vec<usize>) -> Self {
        let done = radices.is_empty() || radices.iter().any(|&r| r == 0);
        let indices = vec![0; radices.len()];
        CombinationIter {
            radices,
            indices,
            done,
        }
    }
}

impl Iterator for CombinationIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        // Increment rightmost-first; exhaustion of the leftmost digit ends
        // the iteration.
        let mut dim = self.radices.len();
        loop {
            if dim == 0 {
                self.done = true;
                break;
            }
            dim -= 1;
            self.indices[dim] += 1;
            if self.indices[dim] < self.radices[dim] {
                break;
            }
            self.indices[dim] = 0;
        }
        Some(current)
    }
}

/// Generate candidate assignment sets for one abstract UCCA.
pub fn generate(
    ucca: &AbstractUcca,
    requirements: &[ActionRequirement],
    bundle: &RefinementBundle,
) -> Result<Vec<Candidate>, RefineError> {
    if requirements.is_empty() {
        return Ok(Vec::new());
    }
    match ucca.abstraction_level {
        AbstractionLevel::TeamLevel => generate_team_level(ucca, requirements, bundle),
        AbstractionLevel::ControllerSpecific => {
            Ok(generate_controller_specific(ucca, requirements, bundle))
        }
    }
}

fn generate_team_level(
    ucca: &AbstractUcca,
    requirements: &[ActionRequirement],
    bundle: &RefinementBundle,
) -> Result<Vec<Candidate>, RefineError> {
    // One choice dimension per requirement with at least one eligible
    // controller. Negated requirements with no authority holder are
    // vacuous and contribute no dimension; required ones with no eligible
    // controller make the whole product empty.
    let mut dims: Vec<&ActionRequirement> = Vec::new();
    let mut choices: Vec<Vec<String>> = Vec::new();
    for req in requirements {
        let mut authorized: Vec<String> = bundle
            .authority
            .authorized_controllers(&req.control_action_id)
            .into_iter()
            .map(str::to_owned)
            .collect();
        if authorized.is_empty() && req.required && bundle.config.include_partial_authority {
            // Partial-authority mode: any known controller may stand in.
            authorized = bundle
                .controller_ids()
                .into_iter()
                .map(str::to_owned)
                .collect();
        }
        if authorized.is_empty() {
            if req.required {
                return Ok(Vec::new());
            }
            continue;
        }
        dims.push(req);
        choices.push(authorized);
    }
    if dims.is_empty() {
        return Ok(Vec::new());
    }

    let limit = bundle.config.max_combinations;
    let radices: Vec<usize> = choices.iter().map(Vec::len).collect();
    let mut candidates = Vec::new();
    for index_vec in CombinationIter::new(radices) {
        if candidates.len() >= limit {
            return Err(RefineError::CombinationLimitExceeded {
                abstract_ucca_id: ucca.id.clone(),
                limit,
            });
        }
        let assignments: Candidate = index_vec
            .iter()
            .enumerate()
            .map(|(dim, &choice)| ControllerAssignment {
                controller_id: choices[dim][choice].clone(),
                control_action_id: dims[dim].control_action_id.clone(),
                performed: dims[dim].required,
            })
            .collect();
        candidates.push(assignments);
    }
    Ok(candidates)
}

fn generate_controller_specific(
    ucca: &AbstractUcca,
    requirements: &[ActionRequirement],
    bundle: &RefinementBundle,
) -> Vec<Candidate> {
    let mut assignments: Candidate = Vec::new();
    for req in requirements {
        for controller_id in &ucca.involved_controller_ids {
            if bundle
                .authority
                .has_authority(controller_id, &req.control_action_id)
            {
                assignments.push(ControllerAssignment {
                    controller_id: controller_id.clone(),
                    control_action_id: req.control_action_id.clone(),
                    performed: req.required,
                });
            }
        }
    }
    if assignments.is_empty() {
        Vec::new()
    } else {
        vec![assignments]
    }
}
