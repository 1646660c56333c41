//! R4 — Equivalence deduplication.
//!
//! Two refinements are equivalent when their assignment sets are identical
//! after replacing each controller with its interchangeable-group id. The
//! canonical signature is the sorted, `|`-joined list of
//! `"<canonical>:<action>:<performed>"` entries.
//!
//! The first occurrence of a signature (in generation order) stays
//! unpruned; later occurrences are flagged `is_pruned` with a fixed audit
//! reason but retained in the output, preserving traceability for review.
//! Hiding pruned items is a caller-level presentation decision.

use std::collections::BTreeSet;
use ucca_core::{ControllerAssignment, InterchangeabilityIndex, RefinedUcca};

/// Audit reason recorded on every pruned duplicate.
pub const EQUIVALENT_PRUNE_REASON: &str =
    "equivalent to an earlier refinement under controller interchangeability";

/// Canonical signature of an assignment set under interchangeability.
pub fn signature(
    assignments: &[ControllerAssignment],
    interchangeability: &InterchangeabilityIndex,
) -> String {
    let mut entries: Vec<String> = assignments
        .iter()
        .map(|a| {
            format!(
                "{}:{}:{}",
                interchangeability.canonical_id(&a.controller_id),
                a.control_action_id,
                a.performed
            )
        })
        .collect();
    entries.sort();
    entries.join("|")
}

/// Flag every refinement whose signature was already seen earlier in the
/// list. Returns the number of pruned items.
pub fn mark_duplicates(
    refined: &mut [RefinedUcca],
    interchangeability: &InterchangeabilityIndex,
) -> usize {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut pruned = 0;
    for r in refined.iter_mut() {
        let sig = signature(&r.assignments, interchangeability);
        if seen.contains(&sig) {
            r.is_pruned = true;
            r.prune_reason = Some(EQUIVALENT_PRUNE_REASON.to_owned());
            pruned += 1;
        } else {
            seen.insert(sig);
        }
    }
    pruned
}
