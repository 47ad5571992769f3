use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("collection {collection} has no row with id {id}")]
    NotFound { collection: String, id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
