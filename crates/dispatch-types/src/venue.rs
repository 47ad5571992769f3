use serde::{Deserialize, Serialize};

use crate::split_list;

/// A venue: a physical location events resolve against.
///
/// Venues are read-only from the application's perspective; the store
/// caches them after the first load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique identifier within the venues file.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Venue category (club, warehouse, bar, ...).
    pub venue_type: String,
    /// Free-text description.
    pub bio: String,
    /// Comma-joined tag list as stored.
    pub tags: String,
    /// Comma-joined resident list as stored.
    pub residents: String,
    /// Comma-joined photo URL list as stored.
    pub photo_urls: String,
}

impl Venue {
    /// Tags as a list.
    pub fn tag_list(&self) -> Vec<String> {
        split_list(&self.tags)
    }

    /// Resident DJs/collectives as a list.
    pub fn resident_list(&self) -> Vec<String> {
        split_list(&self.residents)
    }

    /// Photo URLs as a list.
    pub fn photo_url_list(&self) -> Vec<String> {
        split_list(&self.photo_urls)
    }
}
