//! The generation-pass hook.

use crate::config::{BuildConfig, DEFAULT_CONFIG_FILE};
use crate::discovery::discover_documents;
use benchhub_validation::{
    Finding, RuleSet, Schema, SchemaError, Severity, SiteConfig, ValidationReport, validate_file,
    validate_source,
};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] SchemaError),

    #[error("Benchmark validation failed with {count} errors")]
    ValidationFailed {
        count: usize,
        report: ValidationReport,
    },
}

/// Validates the benchmark collection as part of a site build.
#[derive(Debug, Clone)]
pub struct BuildHook {
    schema: Schema,
    rules: RuleSet,
    config: BuildConfig,
}

impl BuildHook {
    pub fn new(schema: Schema, config: BuildConfig) -> Self {
        let rules = config.rules.unwrap_or_default();
        Self {
            schema,
            rules,
            config,
        }
    }

    /// Load the schema and rule toggles from `site_root/_config.yml`.
    ///
    /// Rules set explicitly on `config` take precedence over the site's.
    pub fn from_site(site_root: &Path, config: BuildConfig) -> Result<Self, BuildError> {
        let site = SiteConfig::load(&site_root.join(DEFAULT_CONFIG_FILE))?;
        let rules = config.rules.unwrap_or(site.rules);
        Ok(Self {
            schema: site.schema,
            rules,
            config,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate every document of the collection.
    ///
    /// Returns the full report, or [`BuildError::ValidationFailed`] when the
    /// build is in production mode and at least one error was found.
    pub fn generate(&self, site_root: &Path) -> Result<ValidationReport, BuildError> {
        let documents = discover_documents(site_root, &self.config.collection_dir);
        let mut report = ValidationReport::new();

        for relative in &documents {
            let id = relative.display().to_string();
            info!(document = %id, "Validating benchmark");
            let doc_report = validate_file(&self.schema, &self.rules, &site_root.join(relative), &id);
            log_findings(&doc_report);
            report.merge(doc_report);
        }

        if !report.is_clean() {
            report_results(&report);
        }

        if report.has_errors() && self.config.mode.is_production() {
            return Err(BuildError::ValidationFailed {
                count: report.error_count(),
                report,
            });
        }
        Ok(report)
    }

    /// Quick check run when a single document is (re)loaded during
    /// development. Does nothing in production builds, where
    /// [`generate`](Self::generate) covers the whole collection.
    pub fn on_document_loaded(&self, id: &str, source: &str) -> Option<ValidationReport> {
        if self.config.mode.is_production() {
            return None;
        }
        let report = validate_source(&self.schema, &self.rules, id, source);
        log_findings(&report);
        Some(report)
    }
}

fn log_findings(report: &ValidationReport) {
    for finding in report.findings() {
        log_finding(finding);
    }
}

fn log_finding(finding: &Finding) {
    match finding.severity {
        Severity::Error => error!(
            document = %finding.document,
            code = %finding.code,
            "Benchmark validation error: {}",
            finding.message
        ),
        Severity::Warning => warn!(
            document = %finding.document,
            code = %finding.code,
            "Benchmark validation warning: {}",
            finding.message
        ),
    }
}

fn report_results(report: &ValidationReport) {
    for line in report.render_summary().lines().filter(|l| !l.is_empty()) {
        info!("{}", line);
    }
}
