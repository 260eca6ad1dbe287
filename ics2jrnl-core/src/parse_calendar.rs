//! Thin wrapper around the `ical` crate.
//!
//! The rest of the crate only ever needs "give me the components, and for
//! each one a property value by name, or absent" — RFC 5545 line unfolding
//! and grammar stay inside the parser.

use anyhow::{Result, anyhow};
use ical::IcalParser;
use ical::property::Property;

/// One calendar component (VEVENT, VTODO or VJOURNAL) exposing its
/// properties by name.
#[derive(Debug)]
pub struct Component {
    properties: Vec<Property>,
}

impl Component {
    /// Looks up a property value by name (e.g. `DTSTART`, `SUMMARY`).
    /// Returns `None` when the property is absent or carries no value.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }
}

/// Parses a full iCalendar document into its components.
///
/// Components are grouped by kind: events first, then todos, then journal
/// components, each kind in document order. A document that interleaves
/// kinds loses that interleaving here; calendar exports in practice carry
/// only VEVENTs, where document order is preserved exactly.
pub fn parse_calendar(bytes: &[u8]) -> Result<Vec<Component>> {
    let mut components = Vec::new();
    for calendar in IcalParser::new(bytes) {
        let calendar = calendar.map_err(|e| anyhow!("parsing iCalendar document: {e}"))?;
        components.extend(
            calendar
                .events
                .into_iter()
                .map(|e| Component { properties: e.properties }),
        );
        components.extend(
            calendar
                .todos
                .into_iter()
                .map(|t| Component { properties: t.properties }),
        );
        components.extend(
            calendar
                .journals
                .into_iter()
                .map(|j| Component { properties: j.properties }),
        );
    }
    Ok(components)
}
