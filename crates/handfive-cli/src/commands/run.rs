//! Run command implementation.

use crate::cli::{MapsArgs, RunArgs};
use crate::commands::{execute_makecldf, execute_maps};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use handfive_maps::MapSummary;

/// Execute the run command: build the dataset, then map it.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<MapSummary> {
    let cldf_dir = execute_makecldf(args.build, config, formatter)?;
    let maps = MapsArgs {
        cldf_dir: Some(cldf_dir),
        output: args.output,
    };
    execute_maps(maps, config, formatter)
}
