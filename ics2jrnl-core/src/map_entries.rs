//! Maps parsed calendar components to journal entries.

use crate::entry::Entry;
use crate::parse_calendar::Component;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// The fixed `DTSTART` input pattern. The trailing `Z` is matched as a
/// literal character: the wall-clock value is kept as-is, with no conversion
/// out of UTC.
const DTSTART_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Maps each component to at most one entry, preserving component order.
///
/// A component missing `DTSTART` or `SUMMARY` is silently dropped. A present
/// but malformed `DTSTART` is an error that aborts the whole conversion —
/// there is no per-entry recovery.
pub fn map_components(components: &[Component]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for component in components {
        let Some(dtstart) = component.property("DTSTART") else {
            continue;
        };
        let (date, time) = parse_dtstart(dtstart)?;
        let Some(summary) = component.property("SUMMARY") else {
            continue;
        };
        let (title, body) = split_title_body(summary);
        entries.push(Entry {
            title,
            body,
            date,
            time,
            tags: Vec::new(),
            starred: false,
        });
    }
    Ok(entries)
}

fn parse_dtstart(value: &str) -> Result<(NaiveDate, NaiveTime)> {
    let dt = NaiveDateTime::parse_from_str(value, DTSTART_FORMAT)
        .with_context(|| format!("invalid DTSTART value '{value}'"))?;
    Ok((dt.date(), dt.time()))
}

/// Splits a summary into title and body on the first literal `.`.
///
/// The title keeps the dot; the body is everything after it and may contain
/// further dots. Without a dot the whole summary is the title and the body
/// is empty.
pub fn split_title_body(summary: &str) -> (String, String) {
    match summary.find('.') {
        Some(pos) => (summary[..=pos].to_string(), summary[pos + 1..].to_string()),
        None => (summary.to_string(), String::new()),
    }
}
