//! Maps command implementation.

use crate::cli::{MapOutputArgs, MapsArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use handfive_cldf::DatasetReader;
use handfive_maps::{CommandMapTool, MapRenderer, MapSummary};

/// Execute the maps command.
pub fn execute_maps(args: MapsArgs, config: &Config, formatter: &Formatter) -> Result<MapSummary> {
    let cldf_dir = args.cldf_dir.unwrap_or_else(|| config.cldf_dir.clone());
    let mut maps_config = config.maps.clone();
    let MapOutputArgs { map_dir, base_url } = args.output;
    if let Some(map_dir) = map_dir {
        maps_config.map_dir = map_dir;
    }
    if base_url.is_some() {
        maps_config.base_url = base_url;
    }
    maps_config.validate().map_err(CliError::Config)?;

    let reader = DatasetReader::open(&cldf_dir)?;
    let tool = CommandMapTool::new(&maps_config.command)?;
    println!(
        "{}",
        formatter.info(&format!("Rendering maps with `{}`", maps_config.command.join(" ")))
    );
    let summary = MapRenderer::from_config(tool, &maps_config).render(&reader)?;

    println!("{}", formatter.map_summary(&summary));
    println!("{}", formatter.success(&format!("Map index written to {}", summary.index.display())));
    Ok(summary)
}
