//! Display-name resolution for foreign-key-like fields.
//!
//! An event's `Location` and `Hosts` columns hold either a literal display
//! string or a numeric id referencing the venues/hosts file. Resolution
//! scans the target collection by id and substitutes the display name;
//! non-numeric values pass through unchanged, and a numeric reference with
//! no matching row resolves to an "Unknown" sentinel rather than an error.
//!
//! Each host resolution re-reads the hosts file (the hosts collection is
//! uncached); venue resolution rides on the venues cache once warm.

use dispatch_types::Event;

use crate::store::RecordStore;

/// Sentinel returned when a numeric location reference matches no venue.
pub const UNKNOWN_VENUE: &str = "Unknown Venue";

/// Sentinel returned when a numeric host reference matches no host.
pub const UNKNOWN_HOST: &str = "Unknown Host";

impl RecordStore {
    /// Resolve an event's location field to a display name.
    pub fn resolve_location(&self, raw: &str) -> String {
        if !looks_numeric(raw) {
            return raw.to_string();
        }
        let id = raw.trim();
        self.venues(false)
            .into_iter()
            .find(|v| v.id == id)
            .map(|v| v.name)
            .unwrap_or_else(|| UNKNOWN_VENUE.to_string())
    }

    /// Resolve a single host reference to a display name.
    pub fn resolve_host_ref(&self, raw: &str) -> String {
        if !looks_numeric(raw) {
            return raw.to_string();
        }
        let id = raw.trim();
        self.hosts()
            .into_iter()
            .find(|h| h.id == id)
            .map(|h| h.name)
            .unwrap_or_else(|| UNKNOWN_HOST.to_string())
    }

    /// Resolve every host reference on an event, preserving order.
    pub fn resolve_event_hosts(&self, event: &Event) -> Vec<String> {
        event.hosts.iter().map(|h| self.resolve_host_ref(h)).collect()
    }
}

fn looks_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}
