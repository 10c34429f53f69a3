//! Category-specific recommendations.
//!
//! Only `parallel-computing` and `hpc` documents have extra rules. Any other
//! category, or none at all, is left alone.

use crate::document::Document;
use crate::finding::{AllowList, FindingKind};
use crate::validator::ValidationContext;
use crate::value::FrontMatterValue;

pub const PARALLEL_MODELS: &[&str] = &[
    "OpenMP",
    "MPI",
    "CUDA",
    "OpenCL",
    "Pthreads",
    "TBB",
    "Cilk",
    "Chapel",
    "UPC",
    "Coarray Fortran",
];

pub const INTERCONNECTS: &[&str] = &[
    "InfiniBand",
    "Ethernet",
    "Omni-Path",
    "Cray Aries",
    "Cray Gemini",
    "Myrinet",
];

pub const HPC_RANKINGS: &[&str] = &[
    "Top500",
    "Green500",
    "HPCG",
    "Graph500",
    "HPL-AI",
    "MLPerf HPC",
];

const HPC_RECOMMENDED_FIELDS: &[&str] = &["min_nodes", "memory_requirements"];

pub(crate) fn check_category(doc: &Document, ctx: &mut ValidationContext) {
    match doc.category() {
        Some("parallel-computing") => check_parallel_computing(doc, ctx),
        Some("hpc") => check_hpc(doc, ctx),
        _ => {}
    }
}

fn check_parallel_computing(doc: &Document, ctx: &mut ValidationContext) {
    let models = doc.get("parallel_models");
    match models.and_then(FrontMatterValue::as_sequence) {
        Some(items) if !items.is_empty() => {}
        _ => ctx.add(FindingKind::MissingParallelModels),
    }

    if let Some(models) = models {
        check_allow_list(models, PARALLEL_MODELS, AllowList::ParallelModels, ctx);
    }
}

fn check_hpc(doc: &Document, ctx: &mut ValidationContext) {
    let missing: Vec<String> = HPC_RECOMMENDED_FIELDS
        .iter()
        .filter(|field| doc.get(field).is_none_or(FrontMatterValue::is_null))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        ctx.add(FindingKind::MissingRecommendedFields {
            category: "hpc".to_string(),
            fields: missing,
        });
    }

    if let (Some(min), Some(max)) = (doc.get("min_nodes"), doc.get("max_nodes"))
        && let (Some(min_value), Some(max_value)) = (min.as_f64(), max.as_f64())
        && min_value > max_value
    {
        ctx.add(FindingKind::NodeRangeInconsistent {
            min_nodes: min.to_string(),
            max_nodes: max.to_string(),
        });
    }

    if let Some(interconnect) = doc.get("interconnect") {
        check_allow_list(interconnect, INTERCONNECTS, AllowList::Interconnects, ctx);
    }
    if let Some(rankings) = doc.get("rankings_used") {
        check_allow_list(rankings, HPC_RANKINGS, AllowList::Rankings, ctx);
    }
}

/// Warn with the entries of `value` that are not in `allowed`.
///
/// Order and duplicates follow the document. Non-sequence values are not
/// inspected.
fn check_allow_list(
    value: &FrontMatterValue,
    allowed: &[&str],
    list: AllowList,
    ctx: &mut ValidationContext,
) {
    let Some(items) = value.as_sequence() else {
        return;
    };
    let unknown: Vec<String> = items
        .iter()
        .filter(|item| !item.as_str().is_some_and(|s| allowed.contains(&s)))
        .map(ToString::to_string)
        .collect();
    if !unknown.is_empty() {
        ctx.add(FindingKind::UnknownEntries {
            list,
            entries: unknown,
        });
    }
}
