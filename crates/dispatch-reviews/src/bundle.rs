//! Grouping of flat review rows into display bundles.

use std::collections::HashMap;

use dispatch_types::{EntityKind, ReviewBundle, ReviewRow, SubReview};

/// Group flat rows into bundles keyed by `(user, submission timestamp)`.
///
/// Bundles come out in first-seen key order (the order rows appear in the
/// file), not sorted chronologically. The grouping key is assumed unique
/// per submission: two bundles submitted by the same user within the same
/// wall-clock second share a key and merge into one bundle. That collision
/// is inherent to the stored format and is intentionally not papered over
/// with a synthetic sequence component.
pub fn group_bundles(rows: Vec<ReviewRow>) -> Vec<ReviewBundle> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut bundles: HashMap<(String, String), ReviewBundle> = HashMap::new();

    for row in rows {
        let key = (row.user_id.clone(), row.submit_date.clone());
        let bundle = bundles.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            ReviewBundle {
                user_id: row.user_id.clone(),
                submit_date: row.submit_date.clone(),
                privacy_level: row.privacy_level,
                main_comment: None,
                venue_review: None,
                dj_reviews: Vec::new(),
            }
        });

        match row.entity_kind {
            EntityKind::Event => bundle.main_comment = Some(row.comment),
            EntityKind::Venue => {
                bundle.venue_review = Some(SubReview {
                    entity_id: row.entity_id,
                    rating: row.rating,
                    comment: row.comment,
                })
            }
            EntityKind::Dj => bundle.dj_reviews.push(SubReview {
                entity_id: row.entity_id,
                rating: row.rating,
                comment: row.comment,
            }),
        }
    }

    order
        .into_iter()
        .filter_map(|key| bundles.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_types::PrivacyLevel;

    fn row(
        user: &str,
        kind: EntityKind,
        entity_id: &str,
        rating: u8,
        comment: &str,
        stamp: &str,
    ) -> ReviewRow {
        ReviewRow {
            user_id: user.into(),
            event_id: "e1".into(),
            entity_kind: kind,
            entity_id: entity_id.into(),
            rating,
            comment: comment.into(),
            privacy_level: PrivacyLevel::Public,
            submit_date: stamp.into(),
        }
    }

    #[test]
    fn one_submission_becomes_one_bundle() {
        let stamp = "2026-08-01 20:00:00";
        let bundles = group_bundles(vec![
            row("u1", EntityKind::Event, "e1", 0, "great night", stamp),
            row("u1", EntityKind::Venue, "42", 4, "solid sound", stamp),
            row("u1", EntityKind::Dj, "7", 5, "tight set", stamp),
            row("u1", EntityKind::Dj, "8", 3, "ok", stamp),
        ]);

        assert_eq!(bundles.len(), 1);
        let b = &bundles[0];
        assert_eq!(b.main_comment.as_deref(), Some("great night"));
        assert_eq!(b.venue_review.as_ref().unwrap().rating, 4);
        assert_eq!(b.dj_reviews.len(), 2);
        assert_eq!(b.dj_reviews[0].entity_id, "7");
    }

    #[test]
    fn different_timestamps_split_bundles() {
        let bundles = group_bundles(vec![
            row("u1", EntityKind::Dj, "7", 5, "a", "2026-08-01 20:00:00"),
            row("u1", EntityKind::Dj, "7", 2, "b", "2026-08-02 21:00:00"),
        ]);
        assert_eq!(bundles.len(), 2);
    }

    #[test]
    fn different_users_split_bundles() {
        let stamp = "2026-08-01 20:00:00";
        let bundles = group_bundles(vec![
            row("u1", EntityKind::Event, "e1", 0, "a", stamp),
            row("u2", EntityKind::Event, "e1", 0, "b", stamp),
        ]);
        assert_eq!(bundles.len(), 2);
        assert_eq!(bundles[0].user_id, "u1");
        assert_eq!(bundles[1].user_id, "u2");
    }

    #[test]
    fn same_second_submissions_merge() {
        // The documented grouping-key collision: same user, same second.
        let stamp = "2026-08-01 20:00:00";
        let bundles = group_bundles(vec![
            row("u1", EntityKind::Event, "e1", 0, "first", stamp),
            row("u1", EntityKind::Event, "e1", 0, "second", stamp),
        ]);
        assert_eq!(bundles.len(), 1);
        // Later row wins the general-comment slot.
        assert_eq!(bundles[0].main_comment.as_deref(), Some("second"));
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let bundles = group_bundles(vec![
            row("u2", EntityKind::Event, "e1", 0, "b", "2026-08-02 21:00:00"),
            row("u1", EntityKind::Event, "e1", 0, "a", "2026-08-01 20:00:00"),
        ]);
        assert_eq!(bundles[0].user_id, "u2");
        assert_eq!(bundles[1].user_id, "u1");
    }

    #[test]
    fn empty_rows_empty_bundles() {
        assert!(group_bundles(Vec::new()).is_empty());
    }
}
