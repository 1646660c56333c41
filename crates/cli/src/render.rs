//! Text rendering for refinement reports.
//!
//! Pruned refinements are hidden when the configuration sets
//! `prune_equivalent` -- a presentation decision; the engine always
//! retains them in the report.

use ucca_core::Priority;
use ucca_refine::{FindingSeverity, RefinementBundle, RefinementReport};

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "HIGH",
        Priority::Medium => "MEDIUM",
        Priority::Low => "LOW",
    }
}

/// Render a report as a human-readable summary.
pub fn render_report(report: &RefinementReport, bundle: &RefinementBundle) -> String {
    let mut out = String::new();

    for hierarchy in &report.hierarchies {
        let abstract_ucca = &hierarchy.abstract_ucca;
        out.push_str(&format!(
            "{} ({}): {} refinement(s), {} pruned, {} high priority\n",
            abstract_ucca.code,
            abstract_ucca.id,
            hierarchy.total_refined,
            hierarchy.pruned_count,
            hierarchy.high_priority_count
        ));
        for refined in &hierarchy.refined_uccas {
            if refined.is_pruned && bundle.config.prune_equivalent {
                continue;
            }
            let marker = if refined.is_pruned { " [pruned]" } else { "" };
            out.push_str(&format!(
                "  {} [{} {}]{}: {}\n",
                refined.code,
                priority_label(refined.priority),
                refined.priority_score,
                marker,
                refined.description
            ));
        }
    }

    if !report.findings.is_empty() {
        out.push_str("findings:\n");
        for finding in &report.findings {
            let severity = match finding.severity {
                FindingSeverity::Info => "info",
                FindingSeverity::Warning => "warning",
                FindingSeverity::Error => "error",
            };
            out.push_str(&format!(
                "  {} [{}]: {}\n",
                severity, finding.stage, finding.message
            ));
        }
    }

    out.push_str(&format!(
        "{} refined, {} failed{}\n",
        report.uccas_refined,
        report.uccas_failed,
        if report.cancelled { ", cancelled" } else { "" }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels() {
        assert_eq!(priority_label(Priority::High), "HIGH");
        assert_eq!(priority_label(Priority::Medium), "MEDIUM");
        assert_eq!(priority_label(Priority::Low), "LOW");
    }

    #[test]
    fn empty_report_renders_summary_line() {
        let bundle = RefinementBundle::build(Default::default(), Vec::new(), Vec::new());
        let report = RefinementReport::new();
        let text = render_report(&report, &bundle);
        assert_eq!(text, "0 refined, 0 failed\n");
    }
}
