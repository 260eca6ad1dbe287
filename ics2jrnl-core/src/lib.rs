pub mod entry;
pub mod map_entries;
pub mod parse_calendar;
pub mod render;
pub mod source;

pub use entry::{Entry, Import};
pub use source::Source;

use anyhow::Result;

/// Converts a raw iCalendar document into jrnl import text.
///
/// This is the whole pipeline minus I/O: parse the components, map each one
/// with both `DTSTART` and `SUMMARY` to an entry, render the blocks. Output
/// is produced only once the full entry list has been built.
pub fn convert(bytes: &[u8]) -> Result<String> {
    let components = parse_calendar::parse_calendar(bytes)?;
    let entries = map_entries::map_components(&components)?;
    let import = Import { entries };
    Ok(render::render_import(&import))
}
