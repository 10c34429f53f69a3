//! Validation schema and site configuration loading.
//!
//! The schema lives under the `benchmark_schema` key of the site's
//! `_config.yml`:
//!
//! ```yaml
//! benchmark_schema:
//!   required_fields: [title, category]
//!   field_types:
//!     title: string
//!     category: enum
//!   enums:
//!     category: [hpc, parallel-computing, cloud]
//! ```
//!
//! A missing schema is not an error: every section defaults to empty and only
//! the category and content checks remain active.

use crate::error::{SchemaError, SchemaResult};
use crate::rules::RuleSet;
use crate::value::FrontMatterValue;
use indexmap::IndexMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use yaml_rust2::{Yaml, YamlLoader};

/// Site config key holding the schema
pub const SCHEMA_KEY: &str = "benchmark_schema";

/// Site config key holding rule toggles
pub const RULES_KEY: &str = "benchmark_validation";

/// The declared type of a front-matter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Array,
    Integer,
    Boolean,
    Date,
    Url,
    Enum,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Array => "array",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Url => "url",
            FieldType::Enum => "enum",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "array" => Ok(FieldType::Array),
            "integer" => Ok(FieldType::Integer),
            "boolean" => Ok(FieldType::Boolean),
            "date" => Ok(FieldType::Date),
            "url" => Ok(FieldType::Url),
            "enum" => Ok(FieldType::Enum),
            other => Err(format!("Unknown field type: {}", other)),
        }
    }
}

/// Rules enforced on every benchmark document. Read-only during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub required_fields: Vec<String>,
    pub field_types: IndexMap<String, FieldType>,
    pub enums: IndexMap<String, Vec<FrontMatterValue>>,
}

impl Schema {
    /// Parse a bare schema document (the contents of `benchmark_schema`).
    pub fn from_yaml_str(source: &str) -> SchemaResult<Self> {
        let docs = YamlLoader::load_from_str(source)?;
        match docs.first() {
            Some(yaml) => Self::from_yaml(yaml),
            None => Ok(Self::default()),
        }
    }

    /// Build a schema from an already parsed YAML node.
    pub fn from_yaml(yaml: &Yaml) -> SchemaResult<Self> {
        if yaml.is_null() || yaml.is_badvalue() {
            return Ok(Self::default());
        }
        if yaml.as_hash().is_none() {
            return Err(SchemaError::InvalidStructure {
                message: format!("'{}' must be a mapping", SCHEMA_KEY),
            });
        }

        Ok(Self {
            required_fields: parse_required_fields(&yaml["required_fields"])?,
            field_types: parse_field_types(&yaml["field_types"])?,
            enums: parse_enums(&yaml["enums"])?,
        })
    }

    /// Declared type for `field`, if any
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.field_types.get(field).copied()
    }

    /// Permitted values for an enum-typed field, if registered
    pub fn enum_values(&self, field: &str) -> Option<&[FrontMatterValue]> {
        self.enums.get(field).map(Vec::as_slice)
    }
}

fn parse_required_fields(yaml: &Yaml) -> SchemaResult<Vec<String>> {
    if yaml.is_null() || yaml.is_badvalue() {
        return Ok(Vec::new());
    }
    let items = yaml.as_vec().ok_or_else(|| SchemaError::InvalidStructure {
        message: "'required_fields' must be an array".to_string(),
    })?;

    items
        .iter()
        .map(|item| {
            scalar_to_string(item).ok_or_else(|| SchemaError::InvalidStructure {
                message: "'required_fields' entries must be scalars".to_string(),
            })
        })
        .collect()
}

fn parse_field_types(yaml: &Yaml) -> SchemaResult<IndexMap<String, FieldType>> {
    let mut field_types = IndexMap::new();
    if yaml.is_null() || yaml.is_badvalue() {
        return Ok(field_types);
    }
    let entries = yaml.as_hash().ok_or_else(|| SchemaError::InvalidStructure {
        message: "'field_types' must be a mapping".to_string(),
    })?;

    for (key, value) in entries {
        let Some(field) = scalar_to_string(key) else {
            continue;
        };
        let type_name = value.as_str().ok_or_else(|| SchemaError::InvalidStructure {
            message: format!("Type of field '{}' must be a string", field),
        })?;
        match type_name.parse::<FieldType>() {
            Ok(field_type) => {
                field_types.insert(field, field_type);
            }
            Err(_) => {
                tracing::warn!(
                    field = %field,
                    declared = %type_name,
                    "ignoring unknown field type in schema"
                );
            }
        }
    }

    Ok(field_types)
}

fn parse_enums(yaml: &Yaml) -> SchemaResult<IndexMap<String, Vec<FrontMatterValue>>> {
    let mut enums = IndexMap::new();
    if yaml.is_null() || yaml.is_badvalue() {
        return Ok(enums);
    }
    let entries = yaml.as_hash().ok_or_else(|| SchemaError::InvalidStructure {
        message: "'enums' must be a mapping".to_string(),
    })?;

    for (key, value) in entries {
        let Some(field) = scalar_to_string(key) else {
            continue;
        };
        let items = value.as_vec().ok_or_else(|| SchemaError::InvalidStructure {
            message: format!("Enum values for field '{}' must be an array", field),
        })?;
        enums.insert(field, items.iter().map(FrontMatterValue::from_yaml).collect());
    }

    Ok(enums)
}

fn scalar_to_string(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(n) => Some(n.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The parts of a Jekyll-style `_config.yml` this crate cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub schema: Schema,
    pub rules: RuleSet,
}

impl SiteConfig {
    /// Read and parse a site config file.
    pub fn load(path: &Path) -> SchemaResult<Self> {
        if !path.exists() {
            return Err(SchemaError::NotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    pub fn from_yaml_str(source: &str) -> SchemaResult<Self> {
        let docs = YamlLoader::load_from_str(source)?;
        let Some(root) = docs.first() else {
            return Ok(Self::default());
        };
        if root.is_null() {
            return Ok(Self::default());
        }
        if root.as_hash().is_none() {
            return Err(SchemaError::InvalidStructure {
                message: "site configuration must be a mapping".to_string(),
            });
        }

        Ok(Self {
            schema: Schema::from_yaml(&root[SCHEMA_KEY])?,
            rules: RuleSet::from_yaml(&root[RULES_KEY])?,
        })
    }
}
