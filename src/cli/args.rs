//! Command-line argument definitions for the ChemStation importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{FileFormat, ImportConfig, OverridePolicy, SampleStateFilter};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the ChemStation results importer
///
/// Reads Agilent ChemStation chromatography result exports and prints the
/// per-sample analyte results as a JSON import report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "chemstation-import",
    version,
    about = "Parse Agilent ChemStation result exports into LIMS-ready analyte results",
    long_about = "Reads the delimited text export of an Agilent ChemStation chromatography run \
                  and converts each sample's results table into analyte records (amount, \
                  retention time, area, Q-value). Prints a JSON report with the parsed results \
                  and the errors, warnings and log lines raised along the way."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Get the subcommand, defaulting to nothing when none was given
    pub fn get_command(self) -> Option<Commands> {
        self.command
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a results file and print the import report
    Parse(ParseArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Results file exported by ChemStation
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// File layout hint selecting the column delimiter
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "File layout: csv, tsv (txt) or ssv"
    )]
    pub format: FileFormat,

    /// Explicit column delimiter, overriding the format's default
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        help = "Column delimiter overriding the format default"
    )]
    pub delimiter: Option<char>,

    /// Sample states the results may be written into
    #[arg(
        long = "sample-states",
        value_name = "FILTER",
        default_value = "received_tobeverified",
        help = "Target samples: received or received_tobeverified"
    )]
    pub sample_states: SampleStateFilter,

    /// Policy for results already present on a sample
    #[arg(
        long = "override",
        value_name = "POLICY",
        default_value = "nooverride",
        help = "Existing results: nooverride, override or overrideempty"
    )]
    pub override_policy: OverridePolicy,

    /// Instrument the results are attributed to
    #[arg(long = "instrument", value_name = "ID")]
    pub instrument: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ParseArgs {
    /// Validate arguments before running
    pub fn validate(&self) -> Result<()> {
        if let Some(delimiter) = self.delimiter {
            if delimiter == '\n' || delimiter == '\r' {
                return Err(Error::configuration(
                    "Delimiter cannot be a line break character",
                ));
            }
        }
        Ok(())
    }

    /// Import settings described by these arguments
    pub fn import_config(&self) -> ImportConfig {
        let mut config = ImportConfig::new(self.format)
            .with_sample_states(self.sample_states)
            .with_override_policy(self.override_policy);
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }
        if let Some(instrument) = &self.instrument {
            config = config.with_instrument(instrument.clone());
        }
        config
    }

    /// Get the logging level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(argv: &[&str]) -> ParseArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.get_command() {
            Some(Commands::Parse(parse_args)) => parse_args,
            None => panic!("expected parse subcommand"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse_args(&["chemstation-import", "parse", "run.csv"]);

        assert_eq!(args.file, Some(PathBuf::from("run.csv")));
        assert_eq!(args.format, FileFormat::Csv);
        assert_eq!(args.sample_states, SampleStateFilter::ReceivedToBeVerified);
        assert_eq!(args.override_policy, OverridePolicy::NoOverride);
        assert_eq!(args.get_log_level(), "warn");
        assert_eq!(args.import_config(), ImportConfig::default());
    }

    #[test]
    fn test_parse_options() {
        let args = parse_args(&[
            "chemstation-import",
            "parse",
            "run.txt",
            "--format",
            "txt",
            "--override",
            "overrideempty",
            "--sample-states",
            "received",
            "--instrument",
            "GC-01",
            "-vv",
        ]);

        let config = args.import_config();
        assert_eq!(config.format, FileFormat::Tsv);
        assert_eq!(config.parser_config().delimiter, '\t');
        assert_eq!(config.override_policy, OverridePolicy::OverrideEmpty);
        assert_eq!(config.sample_states, SampleStateFilter::Received);
        assert_eq!(config.instrument.as_deref(), Some("GC-01"));
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_explicit_delimiter() {
        let args = parse_args(&["chemstation-import", "parse", "run.csv", "-d", "|"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.import_config().parser_config().delimiter, '|');
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Args::try_parse_from(["chemstation-import", "parse", "run.xls", "-f", "xls"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["chemstation-import", "parse", "run.csv", "-q", "-v"]);
        assert!(result.is_err());

        let args = parse_args(&["chemstation-import", "parse", "run.csv", "-q"]);
        assert_eq!(args.get_log_level(), "error");
    }
}
