//! Benchmark collection discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Find every Markdown document under `site_root/collection_dir`.
///
/// Returned paths are relative to `site_root` (e.g. `_benchmarks/hpc/hpl.md`)
/// and sorted for deterministic ordering. Hidden entries are skipped. A
/// missing collection directory yields an empty list.
pub fn discover_documents(site_root: &Path, collection_dir: &Path) -> Vec<PathBuf> {
    let root = site_root.join(collection_dir);
    let mut documents = Vec::new();
    if !root.is_dir() {
        debug!(?root, "benchmark collection not found");
        return documents;
    }

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry in benchmark collection");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(site_root) {
            debug!(?relative, "discovered benchmark document");
            documents.push(relative.to_path_buf());
        }
    }

    documents.sort();
    documents
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}
