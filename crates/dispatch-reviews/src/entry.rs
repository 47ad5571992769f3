use serde::{Deserialize, Serialize};

use dispatch_types::{EntityKind, PrivacyLevel};

/// One raw sub-review as submitted by a client, before sanitization.
///
/// Wire shape of the `POST /api/reviews/{event_id}` body entries. Rating
/// arrives as a float and entity/privacy as free-form strings; the
/// sanitizer coerces them into the closed vocabularies.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewEntry {
    /// Target kind: expected `event`, `venue`, or `dj` (any casing).
    pub entity: String,
    /// Target entity id.
    pub entity_id: String,
    /// Star rating; 0 means comment-only.
    pub rating: f64,
    /// Free-text comment.
    pub comments: String,
    /// Requested visibility; unknown values fall back to public.
    pub privacy_level: String,
}

/// A sanitized, validated sub-review ready to persist.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanEntry {
    pub kind: EntityKind,
    pub entity_id: String,
    pub rating: u8,
    pub comment: String,
    pub privacy_level: PrivacyLevel,
}
