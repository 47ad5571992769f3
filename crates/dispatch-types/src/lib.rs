//! Foundation types for the Dispatch events-discovery backend.
//!
//! This crate provides the entity types shared by every other Dispatch
//! crate: events, venues, hosts, saved relations, and reviews, along with
//! the small parsing helpers their flat-file representations need
//! (comma-joined lists, bracket-wrapped host references, date+time fields).
//!
//! # Key Types
//!
//! - [`Event`] — a dance/music event with schedule, location, and hosts
//! - [`EventPatch`] — partial-field update applied to a stored event
//! - [`Venue`] / [`Host`] — read-only lookup entities
//! - [`SavedRelation`] — a user's boolean "saved" flag for one entity
//! - [`ReviewRow`] / [`ReviewBundle`] — flat review rows and their grouped
//!   display form
//! - [`EntityKind`] / [`PrivacyLevel`] — closed vocabularies used by reviews
//! - [`Clock`] — injectable time source for caching and timestamps

pub mod clock;
pub mod error;
pub mod event;
pub mod host;
pub mod review;
pub mod saved;
pub mod tag;
pub mod venue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::TypeError;
pub use event::{Event, EventPatch};
pub use host::Host;
pub use review::{EntityKind, PrivacyLevel, ReviewBundle, ReviewRow, SubReview};
pub use saved::SavedRelation;
pub use tag::Tag;
pub use venue::Venue;

/// Split a comma-joined list field into trimmed, non-empty items.
///
/// Flat-file columns like `Tags` and `PhotoURLs` store lists as a single
/// comma-joined string; empty segments (trailing commas, blank fields)
/// are dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
