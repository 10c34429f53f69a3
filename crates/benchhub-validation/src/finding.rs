// Validation findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks a production build
    Error,
    /// Advisory only
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

/// Structured finding kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FindingKind {
    /// A required field is absent, null or the empty string
    MissingRequiredField { field: String },

    /// Value does not have the declared type
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    /// Textual value that is not a calendar date
    InvalidDate { field: String, value: String },

    /// Value is not an absolute http(s) URL
    InvalidUrl {
        field: String,
        value: String,
        /// The value parsed as a URL but its scheme is not http or https
        wrong_scheme: bool,
    },

    /// Value not in the field's enum list
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// `min_nodes` is greater than `max_nodes`
    NodeRangeInconsistent { min_nodes: String, max_nodes: String },

    /// The document has no usable front matter
    MalformedDocument { reason: String },

    /// The document could not be read at all
    UnreadableDocument { reason: String },

    /// Category-recommended fields are absent
    MissingRecommendedFields { category: String, fields: Vec<String> },

    /// Parallel computing benchmark without a usable `parallel_models` list
    MissingParallelModels,

    /// Entries outside a fixed allow-list
    UnknownEntries { list: AllowList, entries: Vec<String> },

    /// Recommended section headings not found in the body
    MissingSections { sections: Vec<String> },

    /// Fenced code blocks opened without a language tag
    UntaggedCodeBlocks { count: usize },

    /// A heading nested more than one level below its predecessor
    HeadingSkip {
        title: String,
        level: usize,
        previous_level: usize,
    },

    /// A link that does not look like a well-formed http(s) URL
    SuspectLink { url: String, parsed: bool },
}

/// The fixed allow-lists consulted by category checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowList {
    ParallelModels,
    Interconnects,
    Rankings,
}

impl AllowList {
    fn description(&self) -> &'static str {
        match self {
            AllowList::ParallelModels => "parallel models",
            AllowList::Interconnects => "interconnect types",
            AllowList::Rankings => "HPC rankings",
        }
    }
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::MissingRequiredField { .. }
            | FindingKind::TypeMismatch { .. }
            | FindingKind::InvalidDate { .. }
            | FindingKind::InvalidUrl { .. }
            | FindingKind::InvalidEnumValue { .. }
            | FindingKind::NodeRangeInconsistent { .. }
            | FindingKind::MalformedDocument { .. }
            | FindingKind::UnreadableDocument { .. } => Severity::Error,
            FindingKind::MissingRecommendedFields { .. }
            | FindingKind::MissingParallelModels
            | FindingKind::UnknownEntries { .. }
            | FindingKind::MissingSections { .. }
            | FindingKind::UntaggedCodeBlocks { .. }
            | FindingKind::HeadingSkip { .. }
            | FindingKind::SuspectLink { .. } => Severity::Warning,
        }
    }

    /// Stable code for this finding kind
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::MissingRequiredField { .. } => "BH-1-1",
            FindingKind::TypeMismatch { .. } => "BH-1-2",
            FindingKind::InvalidDate { .. } => "BH-1-3",
            FindingKind::InvalidUrl { .. } => "BH-1-4",
            FindingKind::InvalidEnumValue { .. } => "BH-1-5",
            FindingKind::NodeRangeInconsistent { .. } => "BH-1-6",
            FindingKind::MalformedDocument { .. } => "BH-1-7",
            FindingKind::UnreadableDocument { .. } => "BH-1-8",
            FindingKind::MissingRecommendedFields { .. } => "BH-2-1",
            FindingKind::MissingParallelModels => "BH-2-2",
            FindingKind::UnknownEntries { .. } => "BH-2-3",
            FindingKind::MissingSections { .. } => "BH-2-4",
            FindingKind::UntaggedCodeBlocks { .. } => "BH-2-5",
            FindingKind::HeadingSkip { .. } => "BH-2-6",
            FindingKind::SuspectLink { .. } => "BH-2-7",
        }
    }

    /// Format a human-readable message from this finding kind
    pub fn message(&self) -> String {
        match self {
            FindingKind::MissingRequiredField { field } => {
                format!("Missing required field: {}", field)
            }
            FindingKind::TypeMismatch {
                field,
                expected,
                got,
            } => format!("Field '{}' must be {}, got {}", field, article(expected), got),
            FindingKind::InvalidDate { field, value } => {
                format!("Field '{}' must be a valid date, got '{}'", field, value)
            }
            FindingKind::InvalidUrl {
                field,
                value,
                wrong_scheme: true,
            } => format!(
                "Field '{}' must be a valid HTTP/HTTPS URL, got '{}'",
                field, value
            ),
            FindingKind::InvalidUrl {
                field,
                value,
                wrong_scheme: false,
            } => format!("Field '{}' must be a valid URL, got '{}'", field, value),
            FindingKind::InvalidEnumValue {
                field,
                value,
                allowed,
            } => format!(
                "Field '{}' must be one of {}, got '{}'",
                field,
                allowed.join(", "),
                value
            ),
            FindingKind::NodeRangeInconsistent {
                min_nodes,
                max_nodes,
            } => format!(
                "min_nodes ({}) cannot be greater than max_nodes ({})",
                min_nodes, max_nodes
            ),
            FindingKind::MalformedDocument { reason } => reason.clone(),
            FindingKind::UnreadableDocument { reason } => {
                format!("Failed to read file: {}", reason)
            }
            FindingKind::MissingRecommendedFields { category, fields } => format!(
                "{} benchmarks should specify: {}",
                category_label(category),
                fields.join(", ")
            ),
            FindingKind::MissingParallelModels => {
                "Parallel computing benchmarks should specify 'parallel_models' (e.g., OpenMP, MPI, CUDA)"
                    .to_string()
            }
            FindingKind::UnknownEntries { list, entries } => {
                format!("Unknown {}: {}", list.description(), entries.join(", "))
            }
            FindingKind::MissingSections { sections } => {
                format!("Missing recommended sections: {}", sections.join(", "))
            }
            FindingKind::UntaggedCodeBlocks { count } => format!(
                "Found {} code block(s) without language specification",
                count
            ),
            FindingKind::HeadingSkip {
                title,
                level,
                previous_level,
            } => format!(
                "Heading hierarchy skip detected: '{}' (h{}) follows h{}",
                title, level, previous_level
            ),
            FindingKind::SuspectLink { url, parsed: true } => {
                format!("Potentially invalid URL format: {}", url)
            }
            FindingKind::SuspectLink { url, parsed: false } => {
                format!("Invalid URL format: {}", url)
            }
        }
    }
}

fn article(type_name: &str) -> String {
    match type_name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {}", type_name),
        _ => format!("a {}", type_name),
    }
}

fn category_label(category: &str) -> String {
    match category {
        "hpc" => "HPC".to_string(),
        other => other.to_string(),
    }
}

/// A finding attached to the document that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Document identifier (its path as given to the validator)
    pub document: String,
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(document: impl Into<String>, kind: FindingKind) -> Self {
        Self {
            document: document.into(),
            severity: kind.severity(),
            code: kind.code().to_string(),
            message: kind.message(),
            kind,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            self.severity.label(),
            self.document,
            self.message
        )
    }
}
