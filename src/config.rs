//! Configuration management and validation.
//!
//! Provides the parser configuration (delimiter derived from a file format
//! hint) and the import settings that travel with a parse result to the
//! downstream LIMS importer.

use crate::constants::{DEFAULT_DELIMITER, RECEIVED_STATES, RECEIVED_TO_BE_VERIFIED_STATES};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Layout hint supplied by the caller alongside the result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma separated export
    #[default]
    Csv,
    /// Tab separated export (also used for `.txt` reports)
    Tsv,
    /// Semicolon separated export
    Ssv,
}

impl FileFormat {
    /// Column delimiter used by this layout
    pub fn delimiter(&self) -> char {
        match self {
            FileFormat::Csv => ',',
            FileFormat::Tsv => '\t',
            FileFormat::Ssv => ';',
        }
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "tsv" | "txt" => Ok(FileFormat::Tsv),
            "ssv" => Ok(FileFormat::Ssv),
            _ => Err(Error::unrecognized_format(s.trim())),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileFormat::Csv => "csv",
            FileFormat::Tsv => "tsv",
            FileFormat::Ssv => "ssv",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for a single parser run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Single character separating the columns of every line
    pub delimiter: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParserConfig {
    /// Create configuration for the given file format hint
    pub fn for_format(format: FileFormat) -> Self {
        Self {
            delimiter: format.delimiter(),
        }
    }

    /// Override the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(Error::configuration(
                "Delimiter cannot be a line break character",
            ));
        }
        debug!("Parser configuration valid: delimiter={:?}", self.delimiter);
        Ok(())
    }
}

/// Which sample workflow states the downstream importer may write into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleStateFilter {
    /// Only received samples
    Received,
    /// Received, attachment-due and to-be-verified samples
    #[default]
    #[serde(rename = "received_tobeverified")]
    ReceivedToBeVerified,
}

impl SampleStateFilter {
    /// Workflow state identifiers covered by this filter
    pub fn allowed_states(&self) -> &'static [&'static str] {
        match self {
            SampleStateFilter::Received => RECEIVED_STATES,
            SampleStateFilter::ReceivedToBeVerified => RECEIVED_TO_BE_VERIFIED_STATES,
        }
    }
}

impl FromStr for SampleStateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "received" => Ok(SampleStateFilter::Received),
            "received_tobeverified" => Ok(SampleStateFilter::ReceivedToBeVerified),
            other => Err(Error::configuration(format!(
                "Unknown sample state filter '{}' (expected received or received_tobeverified)",
                other
            ))),
        }
    }
}

/// How the downstream importer treats results already present on a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverridePolicy {
    /// Never replace an existing result
    #[default]
    NoOverride,
    /// Replace existing results, but never with an empty value
    Override,
    /// Replace existing results, including with empty values
    OverrideEmpty,
}

impl OverridePolicy {
    /// `[override, override_with_empty]` pair understood by the LIMS importer
    pub fn flags(&self) -> [bool; 2] {
        match self {
            OverridePolicy::NoOverride => [false, false],
            OverridePolicy::Override => [true, false],
            OverridePolicy::OverrideEmpty => [true, true],
        }
    }
}

impl FromStr for OverridePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "nooverride" => Ok(OverridePolicy::NoOverride),
            "override" => Ok(OverridePolicy::Override),
            "overrideempty" => Ok(OverridePolicy::OverrideEmpty),
            other => Err(Error::configuration(format!(
                "Unknown override policy '{}' (expected nooverride, override or overrideempty)",
                other
            ))),
        }
    }
}

/// Settings for one import: how to read the file and what to hand on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImportConfig {
    /// File layout hint
    pub format: FileFormat,

    /// Explicit delimiter, overriding the one implied by `format`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    /// Sample states the results may be written into
    pub sample_states: SampleStateFilter,

    /// Policy for existing results
    pub override_policy: OverridePolicy,

    /// Instrument the results are attributed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

impl ImportConfig {
    /// Create configuration for the given file format hint
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set an explicit delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set the sample state filter
    pub fn with_sample_states(mut self, sample_states: SampleStateFilter) -> Self {
        self.sample_states = sample_states;
        self
    }

    /// Set the override policy
    pub fn with_override_policy(mut self, override_policy: OverridePolicy) -> Self {
        self.override_policy = override_policy;
        self
    }

    /// Attribute the results to an instrument
    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Parser configuration implied by these settings
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::for_format(self.format);
        match self.delimiter {
            Some(delimiter) => config.with_delimiter(delimiter),
            None => config,
        }
    }
}
