//! Error types for the table-builder
//!
//! Every variant is fatal: the build aborts on the first one and nothing is
//! written. Data-integrity variants name the offending row so the source
//! spreadsheet can be fixed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while building the dataset
#[derive(Debug, Error)]
pub enum BuildError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV/TSV sheet
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// Sheet file
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },

    /// Malformed region boundary file
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Classification lookup failed
    #[error("Classification error: {0}")]
    Classification(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required column is missing or empty
    #[error("Missing value for column {column:?} in {sheet} (row {row})")]
    MissingField {
        /// Sheet name
        sheet: String,
        /// Column name
        column: String,
        /// 1-based data row number
        row: usize,
    },

    /// A Glottocode is not an Austronesian languoid
    #[error("Glottocode {0} is not in the Austronesian classification")]
    UnknownGlottocode(String),

    /// A replacement-sheet subgroup label does not resolve to a languoid
    #[error("Subgroup {0:?} does not resolve to an Austronesian languoid")]
    UnknownSubgroup(String),

    /// A chosen form is not attested in the dataset it is attributed to
    #[error("Form {form:?} for {concept} in {language} is not attested in dataset {dataset:?}")]
    FormOrigin {
        /// Glottocode
        language: String,
        /// Concept
        concept: String,
        /// Form from the feature sheet
        form: String,
        /// Dataset named in the feature sheet
        dataset: String,
    },

    /// No etymology class recorded for a language with a replacement value
    #[error("No etymology class for {concept} in {language}")]
    MissingEtymology {
        /// Glottocode
        language: String,
        /// Concept
        concept: String,
    },

    /// A value maps to a code the parameter does not declare
    #[error("Value {value:?} of {language} maps to undeclared code {code_id}")]
    UndeclaredCode {
        /// Glottocode
        language: String,
        /// Raw value
        value: String,
        /// Computed Code_ID
        code_id: String,
    },

    /// Colexification coding contradicts the forms
    #[error("Inconsistent colexification for {language}: {reason}")]
    Colexification {
        /// Glottocode
        language: String,
        /// What is wrong
        reason: String,
    },

    /// A sheet row references a language that is not in the sample
    #[error("{sheet} references {language}, which is not in the sample")]
    UnsampledLanguage {
        /// Sheet name
        sheet: String,
        /// Glottocode
        language: String,
    },

    /// Generic data-integrity violation
    #[error("Data error: {0}")]
    Data(String),

    /// The assembled dataset violates a constraint
    #[error(transparent)]
    Dataset(#[from] handfive_cldf::CldfError),
}

impl BuildError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        BuildError::Csv {
            path: path.into(),
            source,
        }
    }
}
