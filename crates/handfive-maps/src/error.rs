//! Map-renderer errors

use handfive_cldf::CldfError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a map run
#[derive(Error, Debug)]
pub enum MapError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be read
    #[error(transparent)]
    Dataset(#[from] CldfError),

    /// The map tool could not be started
    #[error("Failed to start map tool `{command}`: {source}")]
    Spawn {
        /// Program name
        command: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The map tool exited unsuccessfully
    #[error("Map tool failed for {parameter} ({format}): {status}")]
    ToolFailed {
        /// Parameter being rendered
        parameter: String,
        /// Output format
        format: String,
        /// Exit status
        status: ExitStatus,
    },

    /// The map tool reported success but wrote nothing
    #[error("Map tool did not produce {}", .0.display())]
    MissingOutput(PathBuf),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias for map operations
pub type Result<T> = std::result::Result<T, MapError>;
