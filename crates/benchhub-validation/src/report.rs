// Aggregated validation results

use crate::finding::{Finding, Severity};
use std::fmt::Write;

/// Findings for one validation run, split by severity.
///
/// Both collections are append-only: findings are never removed or
/// deduplicated, and each keeps the order in which the checks produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of documents that went through validation
    pub documents: usize,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    WarningsOnly,
    Failed,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Clean => "All benchmarks are valid!",
            Verdict::WarningsOnly => "No errors found, but there are warnings to address.",
            Verdict::Failed => "Validation failed with errors that must be fixed.",
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding in the collection matching its severity
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    /// Append another report, keeping its findings after ours
    pub fn merge(&mut self, other: ValidationReport) {
        self.documents += other.documents;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Errors first, then warnings
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn verdict(&self) -> Verdict {
        if self.has_errors() {
            Verdict::Failed
        } else if self.warnings.is_empty() {
            Verdict::Clean
        } else {
            Verdict::WarningsOnly
        }
    }

    /// Plain-text summary: counts, then every message, then the verdict.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Benchmark validation results");
        let _ = writeln!(out, "Files validated: {}", self.documents);
        let _ = writeln!(out, "Errors: {}", self.error_count());
        let _ = writeln!(out, "Warnings: {}", self.warning_count());

        for (title, findings) in [("Errors:", &self.errors), ("Warnings:", &self.warnings)] {
            if findings.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{title}");
            for finding in findings {
                let _ = writeln!(out, "  {finding}");
            }
        }

        let _ = writeln!(out, "\n{}", self.verdict().message());
        out
    }
}

impl FromIterator<ValidationReport> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationReport>>(iter: I) -> Self {
        let mut report = ValidationReport::new();
        for item in iter {
            report.merge(item);
        }
        report
    }
}
