//! Hand and Five table-builder
//!
//! Reads the raw annotation sheets, cross-references them with Glottolog's
//! classification of Austronesian and emits the tables of the CLDF dataset.
//!
//! # Architecture
//!
//! ```text
//! languoid.csv → GlottologCsv → AustronesianIndex ─┐
//! melanesia.geojson → RegionClassifier ────────────┤
//! raw/*.tsv, raw/*.csv → BuildInputs ──────────────┴→ TableBuilder → Dataset
//! ```
//!
//! Every inconsistency in the inputs is fatal: the build stops with a
//! [`BuildError`] naming the offending row, and no tables are produced.
//!
//! # Example Usage
//!
//! ```no_run
//! use handfive_builder::{BuildInputs, BuilderConfig, TableBuilder};
//!
//! # fn example() -> Result<(), handfive_builder::BuildError> {
//! let config = BuilderConfig::default();
//! let builder = TableBuilder::from_config(&config)?;
//! let dataset = builder.build(&BuildInputs::load(&config.raw_dir)?)?;
//! println!("{} languages", dataset.languages.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod checks;
mod config;
mod error;
mod glottolog;
mod lookup;
mod region;

pub mod sheets;

pub use builder::{derive_value, BuildInputs, TableBuilder};
pub use checks::check_colexification;
pub use config::BuilderConfig;
pub use error::{BuildError, Result};
pub use glottolog::GlottologCsv;
pub use lookup::{AustronesianIndex, AUSTRONESIAN};
pub use region::{polygons_from_geojson, RegionClassifier};
