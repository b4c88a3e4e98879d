//! Makecldf command implementation.

use crate::cli::MakecldfArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use handfive_builder::{BuildInputs, TableBuilder};
use handfive_cldf::DatasetWriter;
use std::path::PathBuf;
use tracing::info;

/// Execute the makecldf command, returning the dataset directory.
pub fn execute_makecldf(
    args: MakecldfArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<PathBuf> {
    let mut builder_config = config.builder.clone();
    if let Some(raw_dir) = args.raw_dir {
        builder_config.raw_dir = raw_dir;
    }
    let cldf_dir = args.cldf_dir.unwrap_or_else(|| config.cldf_dir.clone());

    let reading = format!("Reading sheets from {}", builder_config.raw_dir.display());
    println!("{}", formatter.info(&reading));
    let builder = TableBuilder::from_config(&builder_config)?;
    let inputs = BuildInputs::load(&builder_config.raw_dir)?;
    let dataset = builder.build(&inputs)?;

    let metadata = DatasetWriter::new(&cldf_dir, builder_config.title.as_str()).write(&dataset)?;
    info!(metadata = %metadata.display(), "Wrote dataset");

    println!("{}", formatter.row_counts(&dataset.row_counts()));
    println!("{}", formatter.success(&format!("Dataset written to {}", cldf_dir.display())));
    Ok(cldf_dir)
}
