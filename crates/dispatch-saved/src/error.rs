use thiserror::Error;

#[derive(Debug, Error)]
pub enum SavedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type SavedResult<T> = Result<T, SavedError>;
