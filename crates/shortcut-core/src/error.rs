use thiserror::Error;

/// Errors surfaced by the shortener service.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
