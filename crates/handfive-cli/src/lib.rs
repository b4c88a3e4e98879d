//! Hand and Five CLI library.
//!
//! Configuration loading, command execution and output formatting for the
//! `handfive` binary, which builds the CLDF dataset from the raw sheets
//! (`makecldf`), renders its maps (`maps`) or does both (`run`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
