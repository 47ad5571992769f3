use thiserror::Error;

/// Errors produced by type-level parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("unknown privacy level: {0}")]
    UnknownPrivacyLevel(String),

    #[error("rating out of range: {0} (expected 0..=5)")]
    RatingOutOfRange(i64),
}
