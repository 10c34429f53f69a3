use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

/// Expand glob patterns into a list of file paths
///
/// Patterns without glob characters (*, ?, [) are taken as literal paths and
/// kept even when they don't exist, so the validator reports them as
/// unreadable. Matches of each pattern are sorted; a path matched by several
/// patterns is listed once, at its first position.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let paths = glob::glob(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

            let mut matches = Vec::new();
            for path in paths {
                let path =
                    path.with_context(|| format!("Failed to read glob match for: {}", pattern))?;
                if path.is_file() {
                    matches.push(path);
                }
            }

            if matches.is_empty() {
                tracing::warn!("No files matched pattern: {}", pattern);
            }

            matches.sort();
            for path in matches {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        } else {
            let path = PathBuf::from(pattern);
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
