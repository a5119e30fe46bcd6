//! Shared error types for the word store

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Word already stored: {word}")]
    DuplicateWord { word: String },

    #[error("Invalid journal record at line {line}")]
    InvalidRecord { line: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this error is the uniqueness constraint firing.
    ///
    /// Callers use this to distinguish "already submitted" from genuine
    /// persistence failures without matching on store internals.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateWord { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
