//! ChemStation Importer Library
//!
//! A Rust library for reading Agilent ChemStation chromatography result exports
//! and turning them into per-sample analyte results ready for a LIMS workflow.
//!
//! This library provides tools for:
//! - Tokenizing delimited result files and tracking the header/body boundary
//! - Extracting sample identifiers from "Sample Name:" header lines
//! - Parsing analyte rows (amount, retention time, area, Q-value) with
//!   not-detected sentinel handling and non-negative clamping
//! - Collecting per-cell errors, warnings and log lines alongside the results
//! - Wrapping a parse in an import report for the downstream LIMS importer

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod chemstation_parser;
        pub mod results_import;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalyteRecord, Diagnostics, ResultMap, SampleResults};
pub use app::services::chemstation_parser::{ChemStationParser, ParseResult, ParseStats};
pub use app::services::results_import::{
    ImportReport, ImportSettings, import_bytes, import_file, import_text,
};
pub use config::{FileFormat, ImportConfig, OverridePolicy, ParserConfig, SampleStateFilter};

/// Result type alias for the ChemStation importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ChemStation import operations
///
/// Only failures that abort a whole parse are represented here. Per-cell
/// numeric problems are recorded in [`Diagnostics`] and never surface as
/// an `Error`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No input file was supplied to the importer
    #[error("No file selected")]
    NoFileSelected,

    /// The caller's format hint does not map to a supported layout
    #[error("Unrecognized file format {format}")]
    UnrecognizedFormat { format: String },

    /// A result row appeared before any "Sample Name:" line
    #[error("Line {line}: result row found before any 'Sample Name:' line")]
    MissingSampleContext { line: usize },

    /// A result row is too short to hold the fixed vendor columns
    #[error("Line {line}: result row has {found} columns, expected at least {expected}")]
    MalformedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    /// The file bytes could not be decoded as text
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unrecognized format error
    pub fn unrecognized_format(format: impl Into<String>) -> Self {
        Self::UnrecognizedFormat {
            format: format.into(),
        }
    }

    /// Create a missing sample context error
    pub fn missing_sample_context(line: usize) -> Self {
        Self::MissingSampleContext { line }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: usize, found: usize, expected: usize) -> Self {
        Self::MalformedRow {
            line,
            found,
            expected,
        }
    }

    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::NoFileSelected.to_string(), "No file selected");
        assert_eq!(
            Error::unrecognized_format("xls").to_string(),
            "Unrecognized file format xls"
        );
        assert_eq!(
            Error::missing_sample_context(4).to_string(),
            "Line 4: result row found before any 'Sample Name:' line"
        );
        assert_eq!(
            Error::malformed_row(7, 3, 7).to_string(),
            "Line 7: result row has 3 columns, expected at least 7"
        );
        assert_eq!(
            Error::encoding("odd byte count").to_string(),
            "Encoding error: odd byte count"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io { .. }));
        assert!(error.to_string().contains("I/O operation failed"));
    }
}
