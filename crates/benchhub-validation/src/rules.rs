//! Optional rules.
//!
//! Every check runs by default. The heading-hierarchy and external-link
//! checks can be switched off by name, either from the command line or from
//! the `benchmark_validation` section of the site config:
//!
//! ```yaml
//! benchmark_validation:
//!   heading_hierarchy: false
//! ```

use crate::error::{SchemaError, SchemaResult};
use std::fmt;
use std::str::FromStr;
use yaml_rust2::Yaml;

/// A check that can be turned off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Warn when a heading skips a level (`##` followed by `####`)
    HeadingHierarchy,
    /// Warn on malformed absolute links in the body or `official_website`
    ExternalLinks,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::HeadingHierarchy, Rule::ExternalLinks];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::HeadingHierarchy => "heading-hierarchy",
            Rule::ExternalLinks => "external-links",
        }
    }

    fn config_key(&self) -> &'static str {
        match self {
            Rule::HeadingHierarchy => "heading_hierarchy",
            Rule::ExternalLinks => "external_links",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s || rule.config_key() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Rule::ALL.iter().map(Rule::name).collect();
                format!("Unknown rule: {} (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Which optional rules are active for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub heading_hierarchy: bool,
    pub external_links: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            heading_hierarchy: true,
            external_links: true,
        }
    }
}

impl RuleSet {
    pub fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::HeadingHierarchy => self.heading_hierarchy,
            Rule::ExternalLinks => self.external_links,
        }
    }

    pub fn set(&mut self, rule: Rule, enabled: bool) {
        match rule {
            Rule::HeadingHierarchy => self.heading_hierarchy = enabled,
            Rule::ExternalLinks => self.external_links = enabled,
        }
    }

    /// Returns a copy with `rules` switched off
    pub fn without(mut self, rules: &[Rule]) -> Self {
        for rule in rules {
            self.set(*rule, false);
        }
        self
    }

    /// Parse the `benchmark_validation` config section. Absent keys keep
    /// their default.
    pub fn from_yaml(yaml: &Yaml) -> SchemaResult<Self> {
        let mut rules = Self::default();
        if yaml.is_null() || yaml.is_badvalue() {
            return Ok(rules);
        }
        if yaml.as_hash().is_none() {
            return Err(SchemaError::InvalidStructure {
                message: "'benchmark_validation' must be a mapping".to_string(),
            });
        }

        for rule in Rule::ALL {
            let value = &yaml[rule.config_key()];
            if value.is_badvalue() {
                continue;
            }
            let enabled = value.as_bool().ok_or_else(|| SchemaError::InvalidStructure {
                message: format!("'{}' must be a boolean", rule.config_key()),
            })?;
            rules.set(rule, enabled);
        }

        Ok(rules)
    }
}
