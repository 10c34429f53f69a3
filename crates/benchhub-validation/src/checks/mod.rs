//! Individual validation checks.
//!
//! Each submodule inspects a disjoint concern and only appends findings to the
//! [`ValidationContext`](crate::validator::ValidationContext).

pub(crate) mod category;
pub(crate) mod content;
pub(crate) mod fields;
pub mod formats;
pub(crate) mod links;

pub use category::{HPC_RANKINGS, INTERCONNECTS, PARALLEL_MODELS};
pub use content::REQUIRED_SECTIONS;
pub use links::extract_urls;
