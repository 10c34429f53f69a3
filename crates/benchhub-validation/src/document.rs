//! Benchmark documents: YAML front matter followed by a Markdown body.

use crate::error::DocumentError;
use crate::value::{FrontMatter, FrontMatterValue};
use yaml_rust2::YamlLoader;

/// A parsed benchmark document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier used in findings, usually the path relative to the site
    pub path: String,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    pub fn new(path: impl Into<String>, front_matter: FrontMatter, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            front_matter,
            body: body.into(),
        }
    }

    /// Split `source` into front matter and body and parse the front matter.
    ///
    /// The document must open with a `---` line; the next `---` line closes
    /// the block. An empty block is an empty mapping.
    pub fn parse(path: impl Into<String>, source: &str) -> Result<Self, DocumentError> {
        let (yaml, body) = split_front_matter(source).ok_or(DocumentError::MissingFrontMatter)?;
        let front_matter = parse_front_matter(yaml)?;
        Ok(Self::new(path, front_matter, body))
    }

    pub fn get(&self, field: &str) -> Option<&FrontMatterValue> {
        self.front_matter.get(field)
    }

    /// `category` when it is a string
    pub fn category(&self) -> Option<&str> {
        self.get("category").and_then(FrontMatterValue::as_str)
    }
}

/// Locate the front-matter block. Returns the YAML text and the body.
pub fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let (first, rest) = split_line(source)?;
    if !is_delimiter(first) {
        return None;
    }

    let mut offset = 0;
    let mut remaining = rest;
    while let Some((line, after)) = split_line(remaining) {
        if is_delimiter(line) {
            return Some((&rest[..offset], after));
        }
        offset += remaining.len() - after.len();
        remaining = after;
    }
    None
}

/// Split off the first line. The returned line excludes its terminator.
fn split_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    match s.find('\n') {
        Some(i) => Some((&s[..i], &s[i + 1..])),
        None => Some((s, "")),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

fn parse_front_matter(yaml: &str) -> Result<FrontMatter, DocumentError> {
    let docs =
        YamlLoader::load_from_str(yaml).map_err(|e| DocumentError::InvalidYaml(e.to_string()))?;
    match docs.first().map(FrontMatterValue::from_yaml) {
        None | Some(FrontMatterValue::Null) => Ok(FrontMatter::new()),
        Some(FrontMatterValue::Mapping(map)) => Ok(map),
        Some(other) => Err(DocumentError::NotAMapping(other.type_name())),
    }
}
