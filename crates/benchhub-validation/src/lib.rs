//! # benchhub-validation
//!
//! Schema-driven validation of Research Benchmark Hub documents.
//!
//! A benchmark page is a Markdown file with YAML front matter. This crate
//! checks the front matter against a [`Schema`] (required fields, declared
//! field types, enum allow-lists), applies category-specific recommendations
//! for `hpc` and `parallel-computing` pages, and inspects the Markdown body
//! for missing sections, untagged code blocks, heading-level skips and
//! malformed links.
//!
//! Validation never fails: problems are collected as [`Finding`]s in a
//! [`ValidationReport`]. Whether errors should stop a build is up to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use benchhub_validation::{RuleSet, Schema, validate_source};
//!
//! let schema = Schema::from_yaml_str("required_fields: [title]").unwrap();
//! let report = validate_source(
//!     &schema,
//!     &RuleSet::default(),
//!     "_benchmarks/hpl.md",
//!     "---\ncategory: hpc\n---\n",
//! );
//! assert_eq!(report.error_count(), 1);
//! ```

pub mod checks;
pub mod document;
pub mod error;
pub mod finding;
pub mod report;
pub mod rules;
pub mod schema;
pub mod validator;
pub mod value;

pub use document::Document;
pub use error::{DocumentError, SchemaError, SchemaResult};
pub use finding::{AllowList, Finding, FindingKind, Severity};
pub use report::{ValidationReport, Verdict};
pub use rules::{Rule, RuleSet};
pub use schema::{FieldType, Schema, SiteConfig};
pub use validator::{ValidationContext, validate_document, validate_file, validate_source};
pub use value::{FrontMatter, FrontMatterValue};
