use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use dispatch_store::codec;
use dispatch_types::{Clock, ReviewBundle, ReviewRow, SystemClock};

use crate::bundle::group_bundles;
use crate::entry::ReviewEntry;
use crate::error::ReviewResult;
use crate::validate::validate_and_sanitize;

/// Timestamp format for the `SubmitDate` column (UTC, second precision).
const SUBMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of `reviews.csv`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ReviewRecord {
    #[serde(rename = "UserID")]
    user_id: String,
    #[serde(rename = "EventID")]
    event_id: String,
    #[serde(rename = "EntityType")]
    entity_type: String,
    #[serde(rename = "EntityID")]
    entity_id: String,
    #[serde(rename = "Rating")]
    rating: u8,
    #[serde(rename = "Comment")]
    comment: String,
    #[serde(rename = "PrivacyLevel")]
    privacy_level: String,
    #[serde(rename = "SubmitDate")]
    submit_date: String,
}

impl ReviewRecord {
    fn into_row(self) -> Option<ReviewRow> {
        let entity_kind = match self.entity_type.parse() {
            Ok(kind) => kind,
            Err(_) => {
                warn!(entity_type = %self.entity_type, "unknown entity type in review row");
                return None;
            }
        };
        Some(ReviewRow {
            user_id: self.user_id,
            event_id: self.event_id,
            entity_kind,
            entity_id: self.entity_id,
            rating: self.rating,
            comment: self.comment,
            privacy_level: self.privacy_level.parse().unwrap_or_default(),
            submit_date: self.submit_date,
        })
    }
}

/// The append-only review log.
///
/// Submissions append one row per sub-review; rows are never rewritten.
/// Reads group rows into display bundles.
pub struct ReviewLog {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ReviewLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewLog").field("path", &self.path).finish()
    }
}

impl ReviewLog {
    /// A log stored at `path`, stamped by the system clock.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Arc::new(SystemClock))
    }

    /// A log with an injected clock.
    pub fn with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Validate, sanitize, and persist one submission.
    ///
    /// Every entry in the submission shares one server-generated
    /// timestamp; that shared stamp is what groups the rows back into a
    /// bundle on read. Returns the number of rows written.
    pub fn submit(
        &self,
        entries: &[ReviewEntry],
        user_id: &str,
        event_id: &str,
    ) -> ReviewResult<usize> {
        let clean = validate_and_sanitize(entries)?;
        let submit_date = self.clock.now().format(SUBMIT_DATE_FORMAT).to_string();

        for entry in &clean {
            let record = ReviewRecord {
                user_id: user_id.to_string(),
                event_id: event_id.to_string(),
                entity_type: entry.kind.as_str().to_string(),
                entity_id: entry.entity_id.clone(),
                rating: entry.rating,
                comment: entry.comment.clone(),
                privacy_level: entry.privacy_level.as_str().to_string(),
                submit_date: submit_date.clone(),
            };
            codec::append_row(&self.path, &record)?;
        }

        debug!(user_id, event_id, rows = clean.len(), "review submission persisted");
        Ok(clean.len())
    }

    /// All review bundles for one event, in first-seen submission order.
    ///
    /// A missing or unreadable log reads as "no reviews yet".
    pub fn for_event(&self, event_id: &str) -> Vec<ReviewBundle> {
        let records: Vec<ReviewRecord> = match codec::read_rows(&self.path) {
            Ok(records) => records,
            Err(e) => {
                if self.path.exists() {
                    warn!(error = %e, path = %self.path.display(), "failed to read review log");
                }
                return Vec::new();
            }
        };

        let rows = records
            .into_iter()
            .filter(|r| r.event_id == event_id)
            .filter_map(ReviewRecord::into_row)
            .collect();
        group_bundles(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dispatch_types::ManualClock;

    fn log_with_clock(dir: &tempfile::TempDir) -> (ReviewLog, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2026, 8, 1, 20, 0, 0).unwrap(),
        ));
        let log = ReviewLog::with_clock(dir.path().join("reviews.csv"), clock.clone());
        (log, clock)
    }

    fn entry(entity: &str, entity_id: &str, rating: f64, comments: &str) -> ReviewEntry {
        ReviewEntry {
            entity: entity.into(),
            entity_id: entity_id.into(),
            rating,
            comments: comments.into(),
            privacy_level: "public".into(),
        }
    }

    #[test]
    fn submission_groups_into_one_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let (log, _clock) = log_with_clock(&dir);

        let written = log
            .submit(
                &[
                    entry("event", "e1", 0.0, "great night"),
                    entry("venue", "42", 4.0, "solid sound"),
                    entry("dj", "7", 5.0, "tight set"),
                    entry("dj", "8", 3.0, "ok"),
                ],
                "u1",
                "e1",
            )
            .unwrap();
        assert_eq!(written, 4);

        let bundles = log.for_event("e1");
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[0].main_comment.as_deref(), Some("great night"));
        assert!(bundles[0].venue_review.is_some());
        assert_eq!(bundles[0].dj_reviews.len(), 2);
    }

    #[test]
    fn submissions_at_different_times_split() {
        let dir = tempfile::tempdir().unwrap();
        let (log, clock) = log_with_clock(&dir);

        log.submit(&[entry("dj", "7", 5.0, "a")], "u1", "e1").unwrap();
        clock.advance(chrono::Duration::seconds(1));
        log.submit(&[entry("dj", "7", 2.0, "b")], "u1", "e1").unwrap();

        assert_eq!(log.for_event("e1").len(), 2);
    }

    #[test]
    fn same_second_submissions_share_a_key() {
        let dir = tempfile::tempdir().unwrap();
        let (log, _clock) = log_with_clock(&dir);

        log.submit(&[entry("dj", "7", 5.0, "a")], "u1", "e1").unwrap();
        log.submit(&[entry("dj", "8", 4.0, "b")], "u1", "e1").unwrap();

        // Documented collision: the clock did not advance between the two.
        assert_eq!(log.for_event("e1").len(), 1);
        assert_eq!(log.for_event("e1")[0].dj_reviews.len(), 2);
    }

    #[test]
    fn other_events_are_filtered_out() {
        let dir = tempfile::tempdir().unwrap();
        let (log, clock) = log_with_clock(&dir);

        log.submit(&[entry("event", "e1", 0.0, "a")], "u1", "e1").unwrap();
        clock.advance(chrono::Duration::seconds(1));
        log.submit(&[entry("event", "e2", 0.0, "b")], "u1", "e2").unwrap();

        assert_eq!(log.for_event("e1").len(), 1);
        assert_eq!(log.for_event("e2").len(), 1);
        assert!(log.for_event("e3").is_empty());
    }

    #[test]
    fn invalid_submission_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (log, _clock) = log_with_clock(&dir);

        assert!(log.submit(&[entry("stage", "s1", 4.0, "x")], "u1", "e1").is_err());
        assert!(log.for_event("e1").is_empty());
        assert!(!dir.path().join("reviews.csv").exists());
    }

    #[test]
    fn missing_log_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (log, _clock) = log_with_clock(&dir);
        assert!(log.for_event("e1").is_empty());
    }

    #[test]
    fn comment_with_delimiter_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let (log, _clock) = log_with_clock(&dir);

        log.submit(
            &[entry("event", "e1", 0.0, "loud, dark, perfect")],
            "u1",
            "e1",
        )
        .unwrap();

        let bundles = log.for_event("e1");
        assert_eq!(bundles[0].main_comment.as_deref(), Some("loud, dark, perfect"));
    }
}
