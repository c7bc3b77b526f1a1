use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardboardError>;

#[derive(Debug, Error)]
pub enum CardboardError {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Duplicate card id: {0}")]
    DuplicateCard(String),

    #[error("Index {index} out of range for column {column} (length {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Invalid card ID: {0}")]
    InvalidCardId(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for CardboardError {
    fn from(err: rusqlite::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}
