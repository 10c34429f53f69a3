//! Build adapter configuration.

use benchhub_validation::RuleSet;
use std::path::PathBuf;

/// Collection directory, relative to the site root
pub const DEFAULT_COLLECTION_DIR: &str = "_benchmarks";

/// Site configuration file, relative to the site root
pub const DEFAULT_CONFIG_FILE: &str = "_config.yml";

/// Whether validation errors should abort the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Errors are reported, the build continues
    #[default]
    Development,
    /// Any error aborts the build
    Production,
}

impl BuildMode {
    /// Interpret a `JEKYLL_ENV`-style value. Only `production` selects
    /// production mode.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == BuildMode::Production
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub mode: BuildMode,
    /// Rule toggles. `None` uses the ones from the site config.
    pub rules: Option<RuleSet>,
    pub collection_dir: PathBuf,
}

impl BuildConfig {
    pub fn new(mode: BuildMode) -> Self {
        Self {
            mode,
            rules: None,
            collection_dir: PathBuf::from(DEFAULT_COLLECTION_DIR),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_collection_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.collection_dir = dir.into();
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(BuildMode::default())
    }
}
