use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("store error: {0}")]
    Store(#[from] dispatch_store::StoreError),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub type ReviewResult<T> = Result<T, ReviewError>;
