use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data/csv_files";

/// Locations of the flat-file collections under one data directory.
///
/// Every collection is a CSV file with a header row. The store reads and
/// rewrites the event/venue/host/tag files; the saved ledgers and review
/// log own their files but resolve paths through here so the whole layout
/// has a single source of truth.
#[derive(Clone, Debug)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// A data directory rooted at the given path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `events.csv`
    pub fn events(&self) -> PathBuf {
        self.root.join("events.csv")
    }

    /// `venues.csv`
    pub fn venues(&self) -> PathBuf {
        self.root.join("venues.csv")
    }

    /// `hosts.csv`
    pub fn hosts(&self) -> PathBuf {
        self.root.join("hosts.csv")
    }

    /// `tags.csv`
    pub fn tags(&self) -> PathBuf {
        self.root.join("tags.csv")
    }

    /// `user_saved_events.csv`
    pub fn saved_events(&self) -> PathBuf {
        self.root.join("user_saved_events.csv")
    }

    /// `user_saved_venues.csv`
    pub fn saved_venues(&self) -> PathBuf {
        self.root.join("user_saved_venues.csv")
    }

    /// `user_saved_hosts.csv`
    pub fn saved_hosts(&self) -> PathBuf {
        self.root.join("user_saved_hosts.csv")
    }

    /// `reviews.csv`
    pub fn reviews(&self) -> PathBuf {
        self.root.join("reviews.csv")
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
