//! Sanitization and validation for submitted review entries.
//!
//! Entries are sanitized first (trimmed, coerced into the closed
//! vocabularies, rating clamped and rounded, comment truncated), then
//! validated. After sanitization the only ways an entry can still fail
//! are an unknown entity kind and an empty entity id.

use dispatch_types::{EntityKind, PrivacyLevel};

use crate::entry::{CleanEntry, ReviewEntry};
use crate::error::{ReviewError, ReviewResult};

/// Maximum stored comment length in characters.
pub const MAX_COMMENT_CHARS: usize = 1000;

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Zero-based index of the offending entry.
    pub index: usize,
    /// The field that failed.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry {} - {}: {}", self.index + 1, self.field, self.message)
    }
}

/// Sanitize a single entry: trim strings, lowercase the entity kind,
/// clamp and round the rating into 0..=5, truncate the comment, and fall
/// back to public visibility on an unknown privacy value.
pub fn sanitize(entry: &ReviewEntry) -> ReviewEntry {
    let rating = if entry.rating.is_finite() {
        entry.rating.round().clamp(0.0, 5.0)
    } else {
        0.0
    };
    ReviewEntry {
        entity: entry.entity.trim().to_ascii_lowercase(),
        entity_id: entry.entity_id.trim().to_string(),
        rating,
        comments: truncate_chars(entry.comments.trim(), MAX_COMMENT_CHARS),
        privacy_level: entry.privacy_level.trim().to_ascii_lowercase(),
    }
}

/// Validate and convert one sanitized entry.
fn check(index: usize, entry: &ReviewEntry) -> Result<CleanEntry, Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    let kind = match entry.entity.parse::<EntityKind>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            issues.push(ValidationIssue {
                index,
                field: "entity",
                message: "must be one of: event, venue, dj".into(),
            });
            None
        }
    };

    if entry.entity_id.is_empty() {
        issues.push(ValidationIssue {
            index,
            field: "entityId",
            message: "must be a non-empty string".into(),
        });
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(CleanEntry {
        kind: kind.unwrap_or(EntityKind::Event),
        entity_id: entry.entity_id.clone(),
        rating: entry.rating as u8,
        comment: entry.comments.clone(),
        privacy_level: entry
            .privacy_level
            .parse::<PrivacyLevel>()
            .unwrap_or_default(),
    })
}

/// Sanitize and validate a whole submission.
///
/// Returns the cleaned entries, or a [`ReviewError::Validation`] carrying
/// every issue joined with `; `. An empty submission is itself invalid.
pub fn validate_and_sanitize(entries: &[ReviewEntry]) -> ReviewResult<Vec<CleanEntry>> {
    if entries.is_empty() {
        return Err(ReviewError::Validation(
            "at least one review entry must be provided".into(),
        ));
    }

    let mut clean = Vec::with_capacity(entries.len());
    let mut issues = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match check(index, &sanitize(entry)) {
            Ok(entry) => clean.push(entry),
            Err(mut entry_issues) => issues.append(&mut entry_issues),
        }
    }

    if issues.is_empty() {
        Ok(clean)
    } else {
        let message = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(ReviewError::Validation(message))
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entity: &str, entity_id: &str, rating: f64) -> ReviewEntry {
        ReviewEntry {
            entity: entity.into(),
            entity_id: entity_id.into(),
            rating,
            comments: "fine".into(),
            privacy_level: "public".into(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        let clean = validate_and_sanitize(&[
            entry("event", "e1", 0.0),
            entry("venue", "42", 4.0),
            entry("dj", "7", 5.0),
        ])
        .unwrap();
        assert_eq!(clean.len(), 3);
        assert_eq!(clean[1].kind, EntityKind::Venue);
        assert_eq!(clean[1].rating, 4);
    }

    #[test]
    fn rating_is_clamped_and_rounded() {
        let clean = validate_and_sanitize(&[entry("dj", "7", 7.6)]).unwrap();
        assert_eq!(clean[0].rating, 5);

        let clean = validate_and_sanitize(&[entry("dj", "7", -3.0)]).unwrap();
        assert_eq!(clean[0].rating, 0);

        let clean = validate_and_sanitize(&[entry("dj", "7", 3.4)]).unwrap();
        assert_eq!(clean[0].rating, 3);

        let clean = validate_and_sanitize(&[entry("dj", "7", f64::NAN)]).unwrap();
        assert_eq!(clean[0].rating, 0);
    }

    #[test]
    fn entity_kind_is_case_insensitive() {
        let clean = validate_and_sanitize(&[entry(" DJ ", "7", 4.0)]).unwrap();
        assert_eq!(clean[0].kind, EntityKind::Dj);
    }

    #[test]
    fn unknown_entity_rejected() {
        let err = validate_and_sanitize(&[entry("stage", "s1", 4.0)]).unwrap_err();
        assert!(err.to_string().contains("entity"));
    }

    #[test]
    fn empty_entity_id_rejected() {
        let err = validate_and_sanitize(&[entry("dj", "  ", 4.0)]).unwrap_err();
        assert!(err.to_string().contains("entityId"));
    }

    #[test]
    fn empty_submission_rejected() {
        assert!(validate_and_sanitize(&[]).is_err());
    }

    #[test]
    fn long_comment_truncated() {
        let mut e = entry("dj", "7", 4.0);
        e.comments = "x".repeat(2000);
        let clean = validate_and_sanitize(&[e]).unwrap();
        assert_eq!(clean[0].comment.chars().count(), MAX_COMMENT_CHARS);
    }

    #[test]
    fn unknown_privacy_falls_back_to_public() {
        let mut e = entry("dj", "7", 4.0);
        e.privacy_level = "friends-only".into();
        let clean = validate_and_sanitize(&[e]).unwrap();
        assert_eq!(clean[0].privacy_level, dispatch_types::PrivacyLevel::Public);
    }

    #[test]
    fn issues_are_aggregated() {
        let err = validate_and_sanitize(&[entry("stage", "", 4.0), entry("dj", "", 1.0)])
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("entry 1"));
        assert!(message.contains("entry 2"));
    }
}
