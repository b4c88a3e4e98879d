//! Hand and Five CLI - builds the CLDF dataset and its maps.

use clap::Parser;
use handfive_cli::commands;
use handfive_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> handfive_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Makecldf(args) => {
            commands::execute_makecldf(args, &config, formatter)?;
        }
        Command::Maps(args) => {
            commands::execute_maps(args, &config, formatter)?;
        }
        Command::Run(args) => {
            commands::execute_run(args, &config, formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` applies unless `--verbose` asks for debug output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
