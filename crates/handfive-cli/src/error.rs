//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Building the tables failed
    #[error("Build failed: {0}")]
    Build(#[from] handfive_builder::BuildError),

    /// Reading or writing the CLDF dataset failed
    #[error("Dataset error: {0}")]
    Dataset(#[from] handfive_cldf::CldfError),

    /// Rendering the maps failed
    #[error("Map rendering failed: {0}")]
    Maps(#[from] handfive_maps::MapError),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
