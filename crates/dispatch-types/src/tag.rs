use serde::{Deserialize, Serialize};

/// A search/filter tag. Read-only lookup collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier within the tags file.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Grouping category (genre, vibe, ...).
    pub category: String,
}
