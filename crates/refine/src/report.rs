//! RefinementReport — aggregated output of a batch refinement run.
//!
//! Collects one `UccaHierarchy` per successfully refined abstract UCCA
//! plus notable findings: configuration warnings, empty-result notices,
//! and per-UCCA failures. The report is the batch entry point's return
//! value; single-UCCA callers use `refine_one` directly.

use serde::Serialize;
use ucca_core::UccaHierarchy;

/// Severity level for a refinement finding.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FindingSeverity {
    Info,
    Warning,
    Error,
}

/// A notable finding from a refinement run.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Pipeline stage or subsystem that produced the finding.
    pub stage: String,
    pub severity: FindingSeverity,
    pub message: String,
    pub abstract_ucca_id: Option<String>,
}

/// Aggregated result of refining a batch of abstract UCCAs.
#[derive(Debug, Clone, Serialize)]
pub struct RefinementReport {
    pub hierarchies: Vec<UccaHierarchy>,
    /// Abstract UCCAs refined to a hierarchy (including empty ones).
    pub uccas_refined: usize,
    /// Abstract UCCAs that failed with an engine error.
    pub uccas_failed: usize,
    /// Whether the batch stopped early on a cancellation request.
    pub cancelled: bool,
    pub findings: Vec<Finding>,
}

impl RefinementReport {
    pub fn new() -> Self {
        RefinementReport {
            hierarchies: Vec::new(),
            uccas_refined: 0,
            uccas_failed: 0,
            cancelled: false,
            findings: Vec::new(),
        }
    }

    pub fn warn(&mut self, stage: &str, message: String, abstract_ucca_id: Option<String>) {
        self.findings.push(Finding {
            stage: stage.to_owned(),
            severity: FindingSeverity::Warning,
            message,
            abstract_ucca_id,
        });
    }

    pub fn error(&mut self, stage: &str, message: String, abstract_ucca_id: Option<String>) {
        self.findings.push(Finding {
            stage: stage.to_owned(),
            severity: FindingSeverity::Error,
            message,
            abstract_ucca_id,
        });
    }
}

impl Default for RefinementReport {
    fn default() -> Self {
        RefinementReport::new()
    }
}
