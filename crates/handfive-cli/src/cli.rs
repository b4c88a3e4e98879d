//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Hand and Five - build the CLDF dataset on colexification of ‘hand’ and ‘five’.
#[derive(Debug, Parser)]
#[command(name = "handfive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ./handfive.toml if present)
    #[arg(short, long, global = true, env = "HANDFIVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the CLDF dataset from the raw sheets
    Makecldf(MakecldfArgs),

    /// Render the parameter maps and their index
    Maps(MapsArgs),

    /// Build the dataset, then render the maps
    Run(RunArgs),
}

/// Arguments for the makecldf command.
#[derive(Debug, Clone, Default, Args)]
pub struct MakecldfArgs {
    /// Directory holding the raw sheets
    #[arg(long)]
    pub raw_dir: Option<PathBuf>,

    /// Output directory of the dataset
    #[arg(long)]
    pub cldf_dir: Option<PathBuf>,
}

/// Arguments for the maps command.
#[derive(Debug, Clone, Default, Args)]
pub struct MapsArgs {
    /// Directory of the dataset to map
    #[arg(long)]
    pub cldf_dir: Option<PathBuf>,

    #[command(flatten)]
    pub output: MapOutputArgs,
}

/// Where maps go and how they are linked.
#[derive(Debug, Clone, Default, Args)]
pub struct MapOutputArgs {
    /// Output directory for maps and their index
    #[arg(long)]
    pub map_dir: Option<PathBuf>,

    /// Public URL of the map directory for interactive-map links
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the run command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub build: MakecldfArgs,

    #[command(flatten)]
    pub output: MapOutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makecldf_command() {
        let cli = Cli::parse_from(["handfive", "makecldf", "--raw-dir", "data/raw"]);
        match cli.command {
            Command::Makecldf(args) => {
                assert_eq!(args.raw_dir, Some(PathBuf::from("data/raw")));
                assert!(args.cldf_dir.is_none());
            }
            _ => panic!("Expected Makecldf command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["handfive", "maps", "-v", "--no-color", "-c", "other.toml"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert!(matches!(cli.command, Command::Maps(_)));
    }

    #[test]
    fn test_run_command_flattens_arguments() {
        let cli = Cli::parse_from([
            "handfive",
            "run",
            "--cldf-dir",
            "out/cldf",
            "--base-url",
            "https://example.org/maps",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.build.cldf_dir, Some(PathBuf::from("out/cldf")));
                assert_eq!(args.output.base_url.as_deref(), Some("https://example.org/maps"));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["handfive"]).is_err());
    }
}
