//! Hand and Five CLDF storage
//!
//! Serializes the dataset as a CLDF StructureDataset: one CSV file per table
//! plus `StructureDataset-metadata.json`, and reads it back for the
//! map-renderer.
//!
//! ```text
//! Dataset → validate → DatasetWriter → cldf/*.csv + metadata → DatasetReader → Dataset
//! ```

#![warn(missing_docs)]

mod error;
mod reader;
mod readme;
mod writer;

pub mod dataset;
pub mod metadata;

pub use dataset::{files, Dataset};
pub use error::{CldfError, Result};
pub use reader::DatasetReader;
pub use writer::DatasetWriter;
