//! Date display rules for the rendered document.
//!
//! ISO `YYYY-MM-DD` and `YYYY-MM` values format as abbreviated "Mon YYYY";
//! anything unparseable passes through verbatim. Degrade, don't fail — a
//! half-typed date in a live preview is normal.

use chrono::NaiveDate;

const RANGE_SEPARATOR: &str = " – ";

/// Formats one date value for display. Empty in, empty out.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "start – end", with "Present" in place of the end date while `current` is
/// set. `None` when there is nothing to show.
pub fn date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let left = format_date(start);
    let right = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    match (left.is_empty(), right.is_empty()) {
        (true, true) => None,
        (false, true) => Some(left),
        (true, false) => Some(right),
        (false, false) => Some(format!("{left}{RANGE_SEPARATOR}{right}")),
    }
}
