use serde::{Deserialize, Serialize};

/// A user's boolean "saved" flag for one entity (event, venue, or host).
///
/// Rows are upserted, never removed: unsaving stores `saved = false` and
/// the row persists. The composite `id` uniquely addresses the
/// (user, entity) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRelation {
    /// Composite key, always `{user_id}-{entity_id}`.
    pub id: String,
    /// The saving user.
    pub user_id: String,
    /// The saved entity.
    pub entity_id: String,
    /// Current saved state.
    pub saved: bool,
}

impl SavedRelation {
    /// Build the composite key for a (user, entity) pair.
    pub fn composite_key(user_id: &str, entity_id: &str) -> String {
        format!("{user_id}-{entity_id}")
    }

    /// Construct a relation with a consistent composite id.
    pub fn new(user_id: impl Into<String>, entity_id: impl Into<String>, saved: bool) -> Self {
        let user_id = user_id.into();
        let entity_id = entity_id.into();
        Self {
            id: Self::composite_key(&user_id, &entity_id),
            user_id,
            entity_id,
            saved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_key_shape() {
        assert_eq!(SavedRelation::composite_key("u1", "e9"), "u1-e9");
    }

    #[test]
    fn new_sets_id() {
        let r = SavedRelation::new("u1", "e9", true);
        assert_eq!(r.id, "u1-e9");
        assert!(r.saved);
    }
}
