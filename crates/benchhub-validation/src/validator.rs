// Benchmark document validation engine

use crate::checks::{category, content, fields, links};
use crate::document::Document;
use crate::finding::{Finding, FindingKind};
use crate::report::ValidationReport;
use crate::rules::RuleSet;
use crate::schema::Schema;
use std::path::Path;

/// Validation context tracks the document under validation and collects its
/// findings.
pub struct ValidationContext<'a> {
    document: &'a str,
    report: ValidationReport,
}

impl<'a> ValidationContext<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            report: ValidationReport {
                documents: 1,
                ..ValidationReport::default()
            },
        }
    }

    /// Record a finding for the current document
    pub fn add(&mut self, kind: FindingKind) {
        self.report.push(Finding::new(self.document, kind));
    }

    pub fn into_report(self) -> ValidationReport {
        self.report
    }
}

/// Validates one parsed document against `schema`.
///
/// This is a pure function of its inputs: validating the same document twice
/// yields identical reports.
pub fn validate_document(schema: &Schema, rules: &RuleSet, doc: &Document) -> ValidationReport {
    tracing::debug!(document = %doc.path, "validating benchmark");

    let mut ctx = ValidationContext::new(&doc.path);

    fields::check_required_fields(schema, &doc.front_matter, &mut ctx);
    fields::check_field_types(schema, &doc.front_matter, &mut ctx);
    category::check_category(doc, &mut ctx);

    if !doc.body.is_empty() {
        content::check_sections(&doc.body, &mut ctx);
        content::check_code_blocks(&doc.body, &mut ctx);
        if rules.heading_hierarchy {
            content::check_heading_hierarchy(&doc.body, &mut ctx);
        }
    }

    if rules.external_links {
        links::check_external_links(doc, &mut ctx);
    }

    ctx.into_report()
}

/// Parse and validate raw document text.
///
/// A document whose front matter cannot be extracted yields a single error
/// and no further checks.
pub fn validate_source(
    schema: &Schema,
    rules: &RuleSet,
    path: &str,
    source: &str,
) -> ValidationReport {
    match Document::parse(path, source) {
        Ok(doc) => validate_document(schema, rules, &doc),
        Err(err) => {
            tracing::debug!(document = %path, error = %err, "document has no usable front matter");
            let mut ctx = ValidationContext::new(path);
            ctx.add(FindingKind::MalformedDocument {
                reason: err.to_string(),
            });
            ctx.into_report()
        }
    }
}

/// Read, parse and validate a file, reporting findings under `id`.
///
/// Read failures become an error finding.
pub fn validate_file(schema: &Schema, rules: &RuleSet, path: &Path, id: &str) -> ValidationReport {
    match std::fs::read_to_string(path) {
        Ok(source) => validate_source(schema, rules, id, &source),
        Err(err) => {
            tracing::debug!(document = %id, error = %err, "failed to read document");
            let mut ctx = ValidationContext::new(id);
            ctx.add(FindingKind::UnreadableDocument {
                reason: err.to_string(),
            });
            ctx.into_report()
        }
    }
}
