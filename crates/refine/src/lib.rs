//! ucca-refine: the UCCA refinement pipeline.
//!
//! Expands abstract unsafe-combination patterns into concrete
//! controller-bound refinements in six stages, each a separate module
//! producing plain data:
//!
//! - R1 requirement derivation (pattern parse + name resolution)
//! - R2 combination generation (team-level cross-product or
//!   controller-specific assignment)
//! - R3 constraint filtering (authority + special interactions)
//! - R4 equivalence deduplication (interchangeability signatures)
//! - R5 priority scoring
//! - R6 descriptor/code synthesis
//!
//! [`refine_abstract_uccas`] orchestrates the stages per abstract UCCA and
//! aggregates hierarchies and findings into a [`RefinementReport`]. The
//! whole pipeline is pure and synchronous: no I/O, no shared mutable
//! state, deterministic output for identical input.

pub mod bundle;
pub mod error;
pub mod r1_requirements;
pub mod r2_combinations;
pub mod r3_constraints;
pub mod r4_equivalence;
pub mod r5_priority;
pub mod r6_descriptor;
pub mod report;

pub use bundle::{RefinementBundle, RefinementConfig};
pub use error::RefineError;
pub use r4_equivalence::EQUIVALENT_PRUNE_REASON;
pub use report::{Finding, FindingSeverity, RefinementReport};

use std::sync::atomic::{AtomicBool, Ordering};
use ucca_core::{AbstractUcca, Priority, UccaHierarchy};

/// Refine a batch of abstract UCCAs. The sole batch entry point.
pub fn refine_abstract_uccas(
    uccas: &[AbstractUcca],
    bundle: &RefinementBundle,
) -> RefinementReport {
    let cancel = AtomicBool::new(false);
    refine_abstract_uccas_cancellable(uccas, bundle, &cancel)
}

/// Batch refinement with cooperative cancellation. The flag is checked
/// between abstract UCCAs, never mid-combination; a set flag stops the
/// remaining work and marks the report cancelled.
pub fn refine_abstract_uccas_cancellable(
    uccas: &[AbstractUcca],
    bundle: &RefinementBundle,
    cancel: &AtomicBool,
) -> RefinementReport {
    let mut report = RefinementReport::new();

    for overlap in bundle.interchangeability.overlaps() {
        report.warn(
            "config",
            format!(
                "controller {} is listed in multiple interchangeable groups ({}); the last group wins",
                overlap.controller_id,
                overlap.group_ids.join(", ")
            ),
            None,
        );
    }

    for ucca in uccas {
        if cancel.load(Ordering::Relaxed) {
            report.cancelled = true;
            break;
        }
        match refine_one(ucca, bundle) {
            Ok(hierarchy) => {
                if hierarchy.refined_uccas.is_empty() {
                    report.warn(
                        "assemble",
                        format!("no refinements generated for abstract UCCA {}", ucca.id),
                        Some(ucca.id.clone()),
                    );
                }
                report.uccas_refined += 1;
                report.hierarchies.push(hierarchy);
            }
            Err(err) => {
                report.error("generate", err.to_string(), Some(ucca.id.clone()));
                report.uccas_failed += 1;
            }
        }
    }

    report
}

/// Refine a single abstract UCCA through the full pipeline.
///
/// Zero requirements or zero candidates assemble an empty hierarchy (a
/// legitimate "no valid refinement" outcome, not an error). The only
/// error is [`RefineError::CombinationLimitExceeded`], scoped to this
/// UCCA alone.
pub fn refine_one(
    ucca: &AbstractUcca,
    bundle: &RefinementBundle,
) -> Result<UccaHierarchy, RefineError> {
    let requirements = r1_requirements::derive_requirements(ucca, bundle);
    let candidates = r2_combinations::generate(ucca, &requirements, bundle)?;
    let kept = r3_constraints::filter(ucca, candidates, bundle);

    let mut refined: Vec<ucca_core::RefinedUcca> = kept
        .into_iter()
        .enumerate()
        .map(|(i, assignments)| r6_descriptor::build_refined(ucca, i + 1, assignments, bundle))
        .collect();

    let pruned_count = r4_equivalence::mark_duplicates(&mut refined, &bundle.interchangeability);
    r5_priority::score_all(&mut refined, ucca, bundle);

    let high_priority_count = refined
        .iter()
        .filter(|r| !r.is_pruned && r.priority == Priority::High)
        .count();

    Ok(UccaHierarchy {
        abstract_ucca: ucca.clone(),
        total_refined: refined.len(),
        pruned_count,
        high_priority_count,
        refined_uccas: refined,
    })
}
