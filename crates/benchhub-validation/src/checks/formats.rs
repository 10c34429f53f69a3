//! Date and URL literal parsing shared by the type checks and the link scan.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

/// Date-only layouts, tried in order.
///
/// Day-first numeric layouts are accepted after the ISO ones, so `03/04/2024`
/// is the 3rd of April.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a calendar date in any of the common layouts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.date_naive());
    }
    // `2024-03-15 10:00:00 +01:00` is how Jekyll writes `date:` fields
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %:z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.date_naive());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    // Year-month only: the first of the month
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()
}

/// Result of checking a candidate http(s) URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlCheck {
    Valid,
    /// Parsed as an absolute URL but the scheme is not http or https
    WrongScheme,
    /// Not an absolute URL at all
    Unparseable,
}

pub fn check_http_url(value: &str) -> UrlCheck {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => UrlCheck::Valid,
        Ok(_) => UrlCheck::WrongScheme,
        Err(_) => UrlCheck::Unparseable,
    }
}
