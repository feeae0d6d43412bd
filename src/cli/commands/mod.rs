//! Command implementations for the ChemStation importer CLI
//!
//! This module contains the command execution logic and reporting for the
//! CLI interface. Each command is implemented in its own module.

pub mod parse;
pub mod shared;

use crate::Result;
use crate::app::services::results_import::ImportReport;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler:
/// - `parse`: Parse a results file and print the JSON import report
pub async fn run(command: Commands) -> Result<ImportReport> {
    match command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args).await,
    }
}
