// Error types for schema loading and document acquisition

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the validation schema or site config.
///
/// These are fatal to the caller (there is nothing to validate against) but
/// never raised by the validator itself.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] yaml_rust2::ScanError),

    /// A schema section has the wrong shape (e.g. `required_fields` is not a list)
    #[error("Invalid schema structure: {message}")]
    InvalidStructure { message: String },
}

/// Result type for schema loading operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Reasons a document could not be turned into front matter plus body.
///
/// The validator converts every variant into a single document-level error
/// finding; none of them abort a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("Missing or invalid front matter")]
    MissingFrontMatter,

    #[error("Invalid YAML front matter: {0}")]
    InvalidYaml(String),

    #[error("Missing or invalid front matter: expected a mapping, got {0}")]
    NotAMapping(&'static str),
}
