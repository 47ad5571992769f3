use std::fmt;

/// Which entity collection a saved ledger tracks.
///
/// Each kind persists to its own file with its own entity-id column
/// header; the row shape is otherwise identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SavedKind {
    Events,
    Venues,
    Hosts,
}

impl SavedKind {
    /// The ledger's file name.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Events => "user_saved_events.csv",
            Self::Venues => "user_saved_venues.csv",
            Self::Hosts => "user_saved_hosts.csv",
        }
    }

    /// The entity-id column header for this kind.
    pub fn entity_column(&self) -> &'static str {
        match self {
            Self::Events => "EventID",
            Self::Venues => "VenueID",
            Self::Hosts => "HostID",
        }
    }
}

impl fmt::Display for SavedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Events => f.write_str("events"),
            Self::Venues => f.write_str("venues"),
            Self::Hosts => f.write_str("hosts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_and_columns() {
        assert_eq!(SavedKind::Events.file_name(), "user_saved_events.csv");
        assert_eq!(SavedKind::Venues.entity_column(), "VenueID");
        assert_eq!(SavedKind::Hosts.to_string(), "hosts");
    }
}
