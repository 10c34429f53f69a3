//! Offline format check for external links.
//!
//! Links are only parsed, never fetched.

use super::formats::{UrlCheck, check_http_url};
use crate::document::Document;
use crate::finding::FindingKind;
use crate::validator::ValidationContext;
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").expect("Invalid regex pattern for URLs"));

/// Absolute http(s) URLs mentioned in the body, in order of appearance
pub fn extract_urls(body: &str) -> impl Iterator<Item = &str> {
    URL_PATTERN.find_iter(body).map(|m| m.as_str())
}

pub(crate) fn check_external_links(doc: &Document, ctx: &mut ValidationContext) {
    if let Some(website) = doc.get("official_website").and_then(|v| v.as_str()) {
        check_link(website, ctx);
    }
    for url in extract_urls(&doc.body) {
        check_link(url, ctx);
    }
}

fn check_link(url: &str, ctx: &mut ValidationContext) {
    let parsed = match check_http_url(url) {
        UrlCheck::Valid => return,
        UrlCheck::WrongScheme => true,
        UrlCheck::Unparseable => false,
    };
    ctx.add(FindingKind::SuspectLink {
        url: url.to_string(),
        parsed,
    });
}
