//! Read a dataset back from its directory

use crate::dataset::{files, Dataset};
use crate::error::{CldfError, Result};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracing::debug;

/// Reads the tables written by [`crate::DatasetWriter`]
pub struct DatasetReader {
    dir: PathBuf,
}

impl DatasetReader {
    /// Open the dataset in `dir`, which must contain the metadata file
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let metadata = dir.join(files::METADATA);
        if !metadata.is_file() {
            return Err(CldfError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no CLDF metadata at {}", metadata.display()),
            )));
        }
        Ok(Self { dir })
    }

    /// Path of the metadata file
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(files::METADATA)
    }

    /// Read all rows of one table
    pub fn rows<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        let mut reader = csv::Reader::from_path(&path).map_err(|e| CldfError::csv(&path, e))?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|e| CldfError::csv(&path, e))?;
        debug!(file, rows = rows.len(), "Read table");
        Ok(rows)
    }

    /// Read every table
    pub fn read(&self) -> Result<Dataset> {
        Ok(Dataset {
            languages: self.rows(files::LANGUAGES)?,
            contributions: self.rows(files::CONTRIBUTIONS)?,
            parameters: self.rows(files::PARAMETERS)?,
            codes: self.rows(files::CODES)?,
            forms: self.rows(files::FORMS)?,
            values: self.rows(files::VALUES)?,
            replacements: self.rows(files::REPLACEMENTS)?,
        })
    }
}
