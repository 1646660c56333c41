//! R1 — Action requirement derivation.
//!
//! Parses the abstract pattern and resolves its names against the known
//! control actions, producing the ordered requirement list the generator
//! consumes: negated terms first, then bare required terms, then the
//! members of the first `any of {...}` clause. Unresolvable names drop
//! silently (the pattern under-generates rather than fails); `any of`
//! members must additionally belong to the UCCA's relevant-action set.

use crate::bundle::RefinementBundle;
use ucca_core::{parser, AbstractUcca, ActionRequirement, PatternTerm};

/// Derive the ordered requirement list for one abstract UCCA.
pub fn derive_requirements(ucca: &AbstractUcca, bundle: &RefinementBundle) -> Vec<ActionRequirement> {
    let pattern = parser::parse(&ucca.abstract_pattern);

    let mut requirements: Vec<ActionRequirement> = Vec::new();
    // Deduplicate on (action, polarity) so a name appearing both bare and
    // inside the set clause emits a single requirement.
    let push = |req: ActionRequirement, out: &mut Vec<ActionRequirement>| {
        let duplicate = out
            .iter()
            .any(|r| r.control_action_id == req.control_action_id && r.required == req.required);
        if !duplicate {
            out.push(req);
        }
    };

    // Negated terms.
    for term in &pattern.terms {
        if let PatternTerm::Negate(name) = term {
            if let Some(action_id) = bundle.resolve_action(name) {
                push(
                    ActionRequirement {
                        control_action_id: action_id.to_owned(),
                        required: false,
                        is_from_set: false,
                    },
                    &mut requirements,
                );
            }
        }
    }

    // Bare required terms.
    for term in &pattern.terms {
        if let PatternTerm::Require(name) = term {
            if let Some(action_id) = bundle.resolve_action(name) {
                push(
                    ActionRequirement {
                        control_action_id: action_id.to_owned(),
                        required: true,
                        is_from_set: false,
                    },
                    &mut requirements,
                );
            }
        }
    }

    // Members of the first `any of` clause, narrowed to relevant actions.
    if let Some(PatternTerm::AnyOf(names)) = pattern
        .terms
        .iter()
        .find(|t| matches!(t, PatternTerm::AnyOf(_)))
    {
        for name in names {
            if let Some(action_id) = bundle.resolve_action(name) {
                if ucca.relevant_actions.iter().any(|a| a == action_id) {
                    push(
                        ActionRequirement {
                            control_action_id: action_id.to_owned(),
                            required: true,
                            is_from_set: true,
                        },
                        &mut requirements,
                    );
                }
            }
        }
    }

    requirements
}
