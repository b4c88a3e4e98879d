//! Write a dataset to a directory of CSV tables

use crate::dataset::{files, Dataset};
use crate::error::{CldfError, Result};
use crate::metadata;
use crate::readme;
use serde::Serialize;
use serde_json::Value as Json;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Writes the tables, the metadata and the README into one directory
pub struct DatasetWriter {
    dir: PathBuf,
    title: String,
}

impl DatasetWriter {
    /// Create a writer for the given output directory
    pub fn new(dir: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            title: title.into(),
        }
    }

    /// Path of the metadata file, the entry point for CLDF tooling
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(files::METADATA)
    }

    /// Validate the dataset and write all files
    ///
    /// Nothing is written if validation fails.
    pub fn write(&self, dataset: &Dataset) -> Result<PathBuf> {
        dataset.validate()?;
        fs::create_dir_all(&self.dir)?;

        let md = metadata::structure_dataset(&self.title);
        self.write_table(&md, files::LANGUAGES, &dataset.languages)?;
        self.write_table(&md, files::CONTRIBUTIONS, &dataset.contributions)?;
        self.write_table(&md, files::PARAMETERS, &dataset.parameters)?;
        self.write_table(&md, files::CODES, &dataset.codes)?;
        self.write_table(&md, files::FORMS, &dataset.forms)?;
        self.write_table(&md, files::VALUES, &dataset.values)?;
        self.write_table(&md, files::REPLACEMENTS, &dataset.replacements)?;

        let metadata_path = self.metadata_path();
        fs::write(&metadata_path, serde_json::to_string_pretty(&md)?)?;
        fs::write(self.dir.join(files::README), readme::render(&self.title, dataset))?;

        info!(
            dir = %self.dir.display(),
            languages = dataset.languages.len(),
            forms = dataset.forms.len(),
            values = dataset.values.len(),
            replacements = dataset.replacements.len(),
            "Wrote CLDF dataset"
        );
        Ok(metadata_path)
    }

    fn write_table<T: Serialize>(&self, md: &Json, file: &str, rows: &[T]) -> Result<()> {
        let path = self.dir.join(file);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| CldfError::csv(&path, e))?;

        if rows.is_empty() {
            // serde only emits the header together with the first record
            writer
                .write_record(column_names(md, file))
                .map_err(|e| CldfError::csv(&path, e))?;
        }
        for row in rows {
            writer.serialize(row).map_err(|e| CldfError::csv(&path, e))?;
        }
        writer.flush()?;

        debug!(file, rows = rows.len(), "Wrote table");
        Ok(())
    }
}

fn column_names(md: &Json, file: &str) -> Vec<String> {
    md["tables"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|t| t["url"] == file)
        .flat_map(|t| t["tableSchema"]["columns"].as_array().cloned().unwrap_or_default())
        .filter_map(|c| c["name"].as_str().map(str::to_string))
        .collect()
}
