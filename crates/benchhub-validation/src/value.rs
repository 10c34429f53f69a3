//! Tagged front-matter values.
//!
//! Front matter arrives as YAML whose shape is only known at runtime. Every
//! check in this crate matches exhaustively on [`FrontMatterValue`] instead
//! of probing the dynamic type of a value.

use indexmap::IndexMap;
use std::fmt;
use yaml_rust2::Yaml;

/// An ordered front-matter mapping. Key order follows the source document.
pub type FrontMatter = IndexMap<String, FrontMatterValue>;

/// A single front-matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatterValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<FrontMatterValue>),
    Mapping(FrontMatter),
}

impl FrontMatterValue {
    /// Convert a parsed YAML node.
    ///
    /// Mapping keys that are scalars are stringified; keys that are themselves
    /// collections are dropped. Aliases and bad values become `Null`.
    pub fn from_yaml(yaml: &Yaml) -> Self {
        match yaml {
            Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => FrontMatterValue::Null,
            Yaml::Boolean(b) => FrontMatterValue::Bool(*b),
            Yaml::Integer(n) => FrontMatterValue::Integer(*n),
            Yaml::Real(_) => yaml
                .as_f64()
                .map_or(FrontMatterValue::Null, FrontMatterValue::Float),
            Yaml::String(s) => FrontMatterValue::String(s.clone()),
            Yaml::Array(items) => {
                FrontMatterValue::Sequence(items.iter().map(FrontMatterValue::from_yaml).collect())
            }
            Yaml::Hash(entries) => {
                let mut map = FrontMatter::new();
                for (key, value) in entries {
                    if let Some(key) = yaml_key_to_string(key) {
                        map.insert(key, FrontMatterValue::from_yaml(value));
                    }
                }
                FrontMatterValue::Mapping(map)
            }
        }
    }

    /// The type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FrontMatterValue::Null => "null",
            FrontMatterValue::Bool(_) => "boolean",
            FrontMatterValue::Integer(_) => "integer",
            FrontMatterValue::Float(_) => "float",
            FrontMatterValue::String(_) => "string",
            FrontMatterValue::Sequence(_) => "array",
            FrontMatterValue::Mapping(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FrontMatterValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontMatterValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[FrontMatterValue]> {
        match self {
            FrontMatterValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view used for range comparisons. Booleans are not numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FrontMatterValue::Integer(n) => Some(*n as f64),
            FrontMatterValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

fn yaml_key_to_string(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(n) => Some(n.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        Yaml::Null => Some("null".to_string()),
        _ => None,
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterValue::Null => Ok(()),
            FrontMatterValue::Bool(b) => write!(f, "{}", b),
            FrontMatterValue::Integer(n) => write!(f, "{}", n),
            FrontMatterValue::Float(x) => write!(f, "{}", x),
            FrontMatterValue::String(s) => f.write_str(s),
            FrontMatterValue::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            FrontMatterValue::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(s: &str) -> Self {
        FrontMatterValue::String(s.to_string())
    }
}

impl From<String> for FrontMatterValue {
    fn from(s: String) -> Self {
        FrontMatterValue::String(s)
    }
}

impl From<i64> for FrontMatterValue {
    fn from(n: i64) -> Self {
        FrontMatterValue::Integer(n)
    }
}

impl From<bool> for FrontMatterValue {
    fn from(b: bool) -> Self {
        FrontMatterValue::Bool(b)
    }
}

impl<T: Into<FrontMatterValue>> From<Vec<T>> for FrontMatterValue {
    fn from(items: Vec<T>) -> Self {
        FrontMatterValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}
