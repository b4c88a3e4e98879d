//! Error types for reading and writing CLDF datasets

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, CldfError>;

/// Errors that can occur while reading or writing a dataset
#[derive(Debug, Error)]
pub enum CldfError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error in a table
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Table file
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },

    /// Metadata serialization error
    #[error("Metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    /// A row violates a referential constraint of the dataset
    #[error("Integrity error: {0}")]
    Integrity(String),
}

impl CldfError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        CldfError::Csv {
            path: path.into(),
            source,
        }
    }
}
