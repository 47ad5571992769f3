use serde::{Deserialize, Serialize};

use crate::split_list;

/// A host: a DJ, collective, or promoter that runs events. Read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Unique identifier within the hosts file.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub bio: String,
    /// Profile image URL.
    pub photo_url: String,
    /// Comma-joined tag list as stored.
    pub tags: String,
}

impl Host {
    /// Tags as a list.
    pub fn tag_list(&self) -> Vec<String> {
        split_list(&self.tags)
    }
}
