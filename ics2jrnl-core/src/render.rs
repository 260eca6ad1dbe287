//! Pure jrnl import-format rendering.
//!
//! Entry block:
//!   [YYYY-MM-DD HH:MM] Title
//!   Body          (only when non-empty)
//!   <blank line>
//!
//! Lines end with `\r\n`, which is what `jrnl --import` expects from this
//! pipeline.

use crate::entry::{Entry, Import};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Renders one entry block.
pub fn format_entry_block(entry: &Entry) -> String {
    let date = entry.date.format(DATE_FORMAT);
    let time = entry.time.format(TIME_FORMAT);
    let mut block = format!("[{date} {time}] {}\r\n", entry.title);
    if !entry.body.is_empty() {
        block.push_str(&entry.body);
        block.push_str("\r\n");
    }
    block.push_str("\r\n");
    block
}

/// Renders the whole import as one string, blocks in entry order.
pub fn render_import(import: &Import) -> String {
    import.entries.iter().map(format_entry_block).collect()
}
