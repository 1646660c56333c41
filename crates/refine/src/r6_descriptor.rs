//! R6 — Descriptor and code synthesis.
//!
//! Builds the `RefinedUcca` record for one surviving assignment set:
//! a derived identifier code, a human-readable description, and the
//! carried-over abstract fields. Codes take the form
//! `"<parent-code>-R-<ABB>-<ABB>..."` with one three-letter uppercase
//! abbreviation per distinct participating controller, in encounter
//! order. Descriptions group assignments by control action, render
//! "provide(s)" / "do(es) not provide" clauses, join the groups with
//! " while ", and append the abstract UCCA's context.

use crate::bundle::RefinementBundle;
use crate::r2_combinations::Candidate;
use crate::r5_priority::BASE_SCORE;
use ucca_core::{AbstractUcca, Priority, RefinedUcca};

/// Build the refined record for one assignment set. `ordinal` is 1-based
/// in generation order and becomes part of the derived id.
pub fn build_refined(
    ucca: &AbstractUcca,
    ordinal: usize,
    assignments: Candidate,
    bundle: &RefinementBundle,
) -> RefinedUcca {
    let involved = distinct_controllers(&assignments);
    RefinedUcca {
        id: format!("{}-r{}", ucca.id, ordinal),
        code: derive_code(ucca, &involved, bundle),
        description: describe(ucca, &assignments, bundle),
        context: ucca.context.clone(),
        hazard_ids: ucca.hazard_ids.clone(),
        ucca_type: ucca.ucca_type,
        involved_controller_ids: involved,
        parent_abstract_ucca_id: ucca.id.clone(),
        assignments,
        priority: Priority::Medium,
        priority_score: BASE_SCORE,
        is_pruned: false,
        prune_reason: None,
        temporal_relationship: ucca.temporal_relationship.clone(),
    }
}

/// Distinct controller ids in encounter order.
fn distinct_controllers(assignments: &Candidate) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for a in assignments {
        if !out.contains(&a.controller_id) {
            out.push(a.controller_id.clone());
        }
    }
    out
}

fn abbreviate(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}

fn derive_code(ucca: &AbstractUcca, involved: &[String], bundle: &RefinementBundle) -> String {
    let mut code = format!("{}-R", ucca.code);
    for controller_id in involved {
        code.push('-');
        code.push_str(&abbreviate(bundle.controller_name(controller_id)));
    }
    code
}

/// Join names with "and": "C1", "C1 and C2", "C1 and C2 and C3".
fn join_names(names: &[String]) -> String {
    names.join(" and ")
}

fn describe(ucca: &AbstractUcca, assignments: &Candidate, bundle: &RefinementBundle) -> String {
    // Group by control action, preserving encounter order of actions.
    let mut action_order: Vec<&str> = Vec::new();
    for a in assignments {
        if !action_order.contains(&a.control_action_id.as_str()) {
            action_order.push(&a.control_action_id);
        }
    }

    let mut groups: Vec<String> = Vec::new();
    for action_id in action_order {
        let action_name = bundle.action_name(action_id);
        let performers: Vec<String> = assignments
            .iter()
            .filter(|a| a.control_action_id == action_id && a.performed)
            .map(|a| bundle.controller_name(&a.controller_id).to_owned())
            .collect();
        let withholders: Vec<String> = assignments
            .iter()
            .filter(|a| a.control_action_id == action_id && !a.performed)
            .map(|a| bundle.controller_name(&a.controller_id).to_owned())
            .collect();
        if !performers.is_empty() {
            let verb = if performers.len() == 1 {
                "provides"
            } else {
                "provide"
            };
            groups.push(format!("{} {} {}", join_names(&performers), verb, action_name));
        }
        if !withholders.is_empty() {
            let verb = if withholders.len() == 1 {
                "does not provide"
            } else {
                "do not provide"
            };
            groups.push(format!(
                "{} {} {}",
                join_names(&withholders),
                verb,
                action_name
            ));
        }
    }

    let mut description = groups.join(" while ");
    if !ucca.context.is_empty() {
        description.push(' ');
        description.push_str(&ucca.context);
    }
    description
}
