use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Corrupt state at {key}: {reason}")]
    CorruptState { key: String, reason: String },
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
