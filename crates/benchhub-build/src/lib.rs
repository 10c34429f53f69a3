//! # benchhub-build
//!
//! Build-time integration for benchmark validation.
//!
//! During site generation every document in the benchmarks collection is
//! validated with the shared rule set from `benchhub-validation`. Findings are
//! logged through `tracing` as they are produced. In a production build any
//! error aborts the build; in development builds errors are only reported.
//!
//! The production flag is passed in explicitly through [`BuildConfig`];
//! nothing in this crate reads the environment.
//!
//! ```rust,no_run
//! use benchhub_build::{BuildConfig, BuildHook, BuildMode};
//! use std::path::Path;
//!
//! let mode = BuildMode::from_env_value(std::env::var("JEKYLL_ENV").ok().as_deref());
//! let site = Path::new(".");
//! let hook = BuildHook::from_site(site, BuildConfig::new(mode)).unwrap();
//! hook.generate(site).unwrap();
//! ```

mod config;
mod discovery;
mod hook;

pub use config::{BuildConfig, BuildMode, DEFAULT_COLLECTION_DIR, DEFAULT_CONFIG_FILE};
pub use discovery::discover_documents;
pub use hook::{BuildError, BuildHook};
