use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of entity a review row targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// The event itself; this row carries the bundle's general comment.
    Event,
    /// The venue the event took place at. At most one per bundle.
    Venue,
    /// A DJ/host that played. Zero or more per bundle.
    Dj,
}

impl EntityKind {
    /// The column value as stored in the reviews file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Venue => "venue",
            Self::Dj => "dj",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(Self::Event),
            "venue" => Ok(Self::Venue),
            "dj" => Ok(Self::Dj),
            other => Err(TypeError::UnknownEntityKind(other.to_string())),
        }
    }
}

/// Who may see a review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    /// Visible to everyone, attributed.
    Public,
    /// Visible only to the submitting user.
    Private,
    /// Visible to everyone, unattributed.
    Anonymous,
}

impl PrivacyLevel {
    /// The column value as stored in the reviews file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Anonymous => "anonymous",
        }
    }
}

impl Default for PrivacyLevel {
    fn default() -> Self {
        Self::Public
    }
}

impl fmt::Display for PrivacyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrivacyLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "anonymous" => Ok(Self::Anonymous),
            other => Err(TypeError::UnknownPrivacyLevel(other.to_string())),
        }
    }
}

/// One flat row in the reviews file.
///
/// A submission writes one row per sub-review (general/venue/DJ); rows
/// sharing `(user_id, submit_date)` form one logical bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// The submitting user.
    pub user_id: String,
    /// The reviewed event.
    pub event_id: String,
    /// What this row targets.
    pub entity_kind: EntityKind,
    /// Target entity id (event id, venue id, or host id).
    pub entity_id: String,
    /// Star rating 0..=5; 0 means comment-only, no rating given.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Visibility of this row.
    pub privacy_level: PrivacyLevel,
    /// Server-generated submission timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub submit_date: String,
}

/// One rated sub-review inside a bundle (venue or DJ).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubReview {
    /// Target entity id.
    pub entity_id: String,
    /// Star rating 0..=5; 0 means comment-only.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
}

/// A grouped review bundle: everything one user submitted for one event
/// in a single submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBundle {
    /// The submitting user.
    pub user_id: String,
    /// Submission timestamp shared by every row in the bundle.
    pub submit_date: String,
    /// Visibility of the bundle.
    pub privacy_level: PrivacyLevel,
    /// The general comment from the `event`-kind row, if any.
    pub main_comment: Option<String>,
    /// The single venue sub-review, if any.
    pub venue_review: Option<SubReview>,
    /// Per-DJ sub-reviews in row order.
    pub dj_reviews: Vec<SubReview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_roundtrip() {
        for kind in [EntityKind::Event, EntityKind::Venue, EntityKind::Dj] {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn entity_kind_case_insensitive() {
        assert_eq!("DJ".parse::<EntityKind>().unwrap(), EntityKind::Dj);
        assert_eq!(" Venue ".parse::<EntityKind>().unwrap(), EntityKind::Venue);
    }

    #[test]
    fn entity_kind_unknown() {
        assert!(matches!(
            "stage".parse::<EntityKind>(),
            Err(TypeError::UnknownEntityKind(_))
        ));
    }

    #[test]
    fn privacy_level_roundtrip() {
        for level in [PrivacyLevel::Public, PrivacyLevel::Private, PrivacyLevel::Anonymous] {
            assert_eq!(level.as_str().parse::<PrivacyLevel>().unwrap(), level);
        }
    }

    #[test]
    fn bundle_serializes_camel_case() {
        let bundle = ReviewBundle {
            user_id: "u1".into(),
            submit_date: "2026-08-01 20:00:00".into(),
            privacy_level: PrivacyLevel::Public,
            main_comment: Some("great night".into()),
            venue_review: None,
            dj_reviews: Vec::new(),
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.get("mainComment").is_some());
        assert!(json.get("venueReview").is_some());
        assert!(json.get("djReviews").is_some());
    }
}
