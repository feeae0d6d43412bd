//! Import orchestration around the ChemStation parser
//!
//! Wraps one parse in the report handed to the LIMS results importer: the
//! parsed results plus `errors`, `log` and `warns` lists. Any failure that
//! aborts the parse is reported as a single error and the partial results
//! are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info, warn};

use crate::app::models::ResultMap;
use crate::app::services::chemstation_parser::{ChemStationParser, ParseResult, ParseStats};
use crate::config::{FileFormat, ImportConfig, SampleStateFilter};
use crate::{Error, Result};

/// Import settings in the form the LIMS results importer consumes
///
/// The caller's choices are resolved here: the delimiter actually used, the
/// workflow states results may be written into and the
/// `[override, override_with_empty]` flag pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub format: FileFormat,
    pub delimiter: char,
    pub sample_states: SampleStateFilter,
    pub allowed_states: Vec<String>,
    #[serde(rename = "override")]
    pub override_flags: [bool; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

impl From<&ImportConfig> for ImportSettings {
    fn from(config: &ImportConfig) -> Self {
        Self {
            format: config.format,
            delimiter: config.parser_config().delimiter,
            sample_states: config.sample_states,
            allowed_states: config
                .sample_states
                .allowed_states()
                .iter()
                .map(|state| state.to_string())
                .collect(),
            override_flags: config.override_policy.flags(),
            instrument: config.instrument.clone(),
        }
    }
}

/// Outcome of importing one results file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Errors raised while reading or parsing the file
    pub errors: Vec<String>,

    /// Informational messages
    pub log: Vec<String>,

    /// Non-fatal warnings
    pub warns: Vec<String>,

    /// Parsed results, absent when the import failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultMap>,

    /// Parsing statistics, absent when the import failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ParseStats>,

    /// Settings the downstream importer applies to these results
    pub settings: ImportSettings,

    /// When the import ran
    pub imported_at: DateTime<Utc>,
}

impl ImportReport {
    fn new(settings: &ImportConfig) -> Self {
        Self {
            errors: Vec::new(),
            log: Vec::new(),
            warns: Vec::new(),
            results: None,
            stats: None,
            settings: ImportSettings::from(settings),
            imported_at: Utc::now(),
        }
    }

    /// Report for an import that failed before or during parsing
    pub fn failed(settings: &ImportConfig, error: &Error) -> Self {
        error!("Import failed: {}", error);
        let mut report = Self::new(settings);
        report.errors.push(error.to_string());
        report
    }

    /// Report for a completed parse
    pub fn completed(settings: &ImportConfig, parsed: ParseResult) -> Self {
        let mut report = Self::new(settings);
        report.log.push("Parsing ChemStation results file".to_string());

        let ParseResult {
            results,
            diagnostics,
            stats,
        } = parsed;
        report.errors = diagnostics.errors;
        report.warns = diagnostics.warnings;
        report.log.extend(diagnostics.logs);
        report.log.push(format!(
            "End of file reached successfully: {} objects, {} analyses, {} results",
            results.sample_count(),
            results.analyte_count(),
            results.result_count()
        ));

        if results.analyte_count() == 0 {
            let message = "No analyte results were found in file";
            warn!("{}", message);
            report.warns.push(message.to_string());
        }

        report.results = Some(results);
        report.stats = Some(stats);
        report
    }

    /// True when the file parsed cleanly and produced at least one analyte
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
            && self
                .results
                .as_ref()
                .is_some_and(|results| results.analyte_count() > 0)
    }

    /// Render the report as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| Error::serialization("Failed to serialize import report", e))
    }
}

/// Parse already-decoded file content
pub fn import_text(content: &str, config: &ImportConfig) -> ImportReport {
    let parsed = ChemStationParser::new(config.parser_config())
        .and_then(|parser| parser.parse_str(content));
    report_for(parsed, config)
}

/// Parse raw file bytes, decoding them the same way as [`import_file`]
pub fn import_bytes(bytes: &[u8], config: &ImportConfig) -> ImportReport {
    let parsed = ChemStationParser::new(config.parser_config())
        .and_then(|parser| parser.parse_bytes(bytes));
    report_for(parsed, config)
}

fn report_for(parsed: Result<ParseResult>, config: &ImportConfig) -> ImportReport {
    match parsed {
        Ok(parsed) => {
            info!(
                "Imported {} samples ({} analytes)",
                parsed.results.sample_count(),
                parsed.results.analyte_count()
            );
            ImportReport::completed(config, parsed)
        }
        Err(e) => ImportReport::failed(config, &e),
    }
}

/// Read and parse a results file
///
/// `None` stands for a missing upload and is reported as "No file selected".
pub async fn import_file(path: Option<&Path>, config: &ImportConfig) -> ImportReport {
    let Some(path) = path else {
        return ImportReport::failed(config, &Error::NoFileSelected);
    };

    info!("Importing ChemStation results file: {}", path.display());
    match tokio::fs::read(path).await {
        Ok(bytes) => import_bytes(&bytes, config),
        Err(e) => ImportReport::failed(
            config,
            &Error::io(format!("Failed to read file {}", path.display()), e),
        ),
    }
}
