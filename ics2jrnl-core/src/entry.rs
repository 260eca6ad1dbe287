use chrono::{NaiveDate, NaiveTime};

/// A single jrnl import record, built from one calendar component.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Always empty in this flow; jrnl derives tags from the text itself.
    pub tags: Vec<String>,
    /// Always false in this flow.
    pub starred: bool,
}

/// The ordered sequence of entries produced by one conversion run.
/// Exists only to be rendered, then discarded.
#[derive(Debug, Default)]
pub struct Import {
    pub entries: Vec<Entry>,
}
