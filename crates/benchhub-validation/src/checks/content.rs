//! Markdown body structure checks.

use crate::finding::FindingKind;
use crate::validator::ValidationContext;
use regex::Regex;
use std::sync::LazyLock;

/// Section titles every benchmark page is expected to carry, in page order.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Vue d'ensemble",
    "Prérequis",
    "Installation",
    "Configuration",
    "Utilisation",
    "Métriques et Performance",
    "Ressources",
];

static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#+)\s+(.+)$").expect("Invalid regex pattern for headings")
});

/// Warn about every required section title with no `#` or `##` heading.
pub(crate) fn check_sections(body: &str, ctx: &mut ValidationContext) {
    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|title| {
            !body.contains(&format!("## {}", title)) && !body.contains(&format!("# {}", title))
        })
        .map(|title| title.to_string())
        .collect();

    if !missing.is_empty() {
        ctx.add(FindingKind::MissingSections { sections: missing });
    }
}

/// Warn with the number of fenced code blocks opened without a language tag.
pub(crate) fn check_code_blocks(body: &str, ctx: &mut ValidationContext) {
    let count = count_untagged_fences(body);
    if count > 0 {
        ctx.add(FindingKind::UntaggedCodeBlocks { count });
    }
}

fn count_untagged_fences(body: &str) -> usize {
    // Backtick count of the open fence; a closing fence must be at least as long
    let mut open_fence: Option<usize> = None;
    let mut count = 0;
    for line in body.lines() {
        let trimmed = line.trim_start();
        let info = trimmed.trim_start_matches('`');
        let ticks = trimmed.len() - info.len();
        if ticks < 3 {
            continue;
        }
        let info = info.trim();
        match open_fence {
            Some(opening) => {
                if info.is_empty() && ticks >= opening {
                    open_fence = None;
                }
            }
            None => {
                open_fence = Some(ticks);
                if info.is_empty() {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Warn whenever a heading is nested more than one level below the heading
/// directly before it. Only the previous heading's level is remembered.
pub(crate) fn check_heading_hierarchy(body: &str, ctx: &mut ValidationContext) {
    let mut previous_level = 0;
    for captures in HEADING_PATTERN.captures_iter(body) {
        let level = captures[1].len();
        let title = captures[2].trim();

        if previous_level > 0 && level > previous_level + 1 {
            ctx.add(FindingKind::HeadingSkip {
                title: title.to_string(),
                level,
                previous_level,
            });
        }
        previous_level = level;
    }
}
