use anyhow::Context;
use chemstation_importer::cli::{args::Args, commands};
use clap::{CommandFactory, Parser};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help
    let Some(command) = args.get_command() else {
        let _ = Args::command().print_help();
        process::exit(0);
    };

    let result = tokio::runtime::Runtime::new()
        .context("Failed to create async runtime")
        .and_then(|runtime| {
            runtime
                .block_on(commands::run(command))
                .context("Import command failed")
        });

    match result {
        Ok(report) if report.is_success() => process::exit(0),
        Ok(_report) => {
            // Errors have already been reported in the JSON output
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
