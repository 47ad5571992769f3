//! Review submission and aggregation for Dispatch.
//!
//! A review submission is a set of sub-reviews (general comment, venue
//! rating, per-DJ ratings) posted together for one event. Each sub-review
//! persists as one row in the append-only review log; rows sharing the
//! submission's server-generated timestamp regroup into a
//! [`ReviewBundle`](dispatch_types::ReviewBundle) for display.
//!
//! Submissions are sanitized and validated before anything is written;
//! a failed submission persists nothing.

pub mod bundle;
pub mod entry;
pub mod error;
pub mod log;
pub mod validate;

pub use bundle::group_bundles;
pub use entry::{CleanEntry, ReviewEntry};
pub use error::{ReviewError, ReviewResult};
pub use log::ReviewLog;
pub use validate::{validate_and_sanitize, ValidationIssue, MAX_COMMENT_CHARS};
