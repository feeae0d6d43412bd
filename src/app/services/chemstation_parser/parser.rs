//! Core ChemStation result-file parser
//!
//! Drives a single forward pass over the input: each line is tokenized,
//! routed to the header or results parser, and its outcome is folded into
//! the result map and diagnostics.

use std::io::Read;
use tracing::{debug, info, warn};

use super::encoding::decode_export;
use super::header::{HeaderEvent, HeaderState};
use super::record_parser::{ResultTable, RowOutcome, parse_results_line};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::{LineRoute, RawLine, classify};
use crate::app::models::{Diagnostics, ResultMap};
use crate::config::ParserConfig;
use crate::{Error, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser for one ChemStation results export
///
/// A parser instance processes exactly one file; the parse methods consume
/// it and hand the accumulated results to the caller.
#[derive(Debug)]
pub struct ChemStationParser {
    config: ParserConfig,
    state: HeaderState,
    table: ResultTable,
    results: ResultMap,
    diagnostics: Diagnostics,
    stats: ParseStats,
}

impl ChemStationParser {
    /// Create a parser after validating its configuration
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: HeaderState::new(),
            table: ResultTable::new(),
            results: ResultMap::new(),
            diagnostics: Diagnostics::new(),
            stats: ParseStats::new(),
        })
    }

    /// Parse fully buffered file content
    pub fn parse_str(mut self, content: &str) -> Result<ParseResult> {
        self.begin();
        for (index, line) in content.lines().enumerate() {
            self.parse_line(line, index + 1)?;
        }
        Ok(self.finish())
    }

    /// Parse raw file bytes
    ///
    /// The bytes are decoded with [`decode_export`] first, so UTF-16 exports
    /// and stray ANSI bytes are handled the same way for every caller.
    pub fn parse_bytes(mut self, bytes: &[u8]) -> Result<ParseResult> {
        let content = decode_export(bytes, &mut self.diagnostics)?;
        self.parse_str(&content)
    }

    /// Parse content from a reader
    pub fn parse_reader<R: Read>(self, mut reader: R) -> Result<ParseResult> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io("Failed to read results", e))?;
        self.parse_bytes(&bytes)
    }

    fn begin(&mut self) {
        info!(
            "Parsing ChemStation results with delimiter {:?}",
            self.config.delimiter
        );
    }

    /// Tokenize and route one line
    fn parse_line(&mut self, line: &str, number: usize) -> Result<()> {
        self.stats.total_lines += 1;
        let line = if number == 1 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            line
        };
        let raw = RawLine::split(line, self.config.delimiter, number);

        match classify(self.state.header_ended()) {
            LineRoute::Header => {
                self.stats.header_lines += 1;
                let event = self.state.parse_line(&raw);
                self.apply_header_event(event, number);
                Ok(())
            }
            LineRoute::Body => {
                let outcome = parse_results_line(&raw, &mut self.table, &mut self.diagnostics)?;
                self.apply_row_outcome(outcome, number)
            }
        }
    }

    fn apply_header_event(&mut self, event: HeaderEvent, number: usize) {
        match event {
            HeaderEvent::SampleStarted(sample_id) => self.open_sample(sample_id),
            HeaderEvent::EmptySampleName => self.reject_empty_sample(number),
            HeaderEvent::HeaderEnded | HeaderEvent::Ignored | HeaderEvent::AlreadyEnded => {}
        }
    }

    fn apply_row_outcome(&mut self, outcome: RowOutcome, number: usize) -> Result<()> {
        match outcome {
            RowOutcome::Blank => {}
            RowOutcome::TableHeader => self.stats.table_headers += 1,
            RowOutcome::SampleBoundary(Some(sample_id)) => {
                self.state.set_active_sample(Some(sample_id.clone()));
                self.open_sample(sample_id);
            }
            RowOutcome::SampleBoundary(None) => {
                self.state.set_active_sample(None);
                self.reject_empty_sample(number);
            }
            RowOutcome::Preamble | RowOutcome::Skipped => self.stats.rows_skipped += 1,
            RowOutcome::Analyte { keyword, record } => {
                let sample_id = self
                    .state
                    .active_sample()
                    .ok_or_else(|| Error::missing_sample_context(number))?;

                let replaced = self
                    .results
                    .insert_analyte(sample_id, keyword.clone(), record)
                    .ok_or_else(|| Error::missing_sample_context(number))?;

                if replaced.is_some() {
                    debug!(
                        "Line {}: analyte {} replaced earlier row for sample {}",
                        number, keyword, sample_id
                    );
                } else {
                    debug!("Line {}: stored {} for sample {}", number, keyword, sample_id);
                }
                self.stats.data_rows += 1;
            }
        }
        Ok(())
    }

    /// Start a fresh result block for a sample
    fn open_sample(&mut self, sample_id: String) {
        debug!("Starting results for sample {}", sample_id);
        if self.results.start_sample(sample_id.clone()) {
            let message = format!(
                "Sample {} appears more than once; earlier results were replaced",
                sample_id
            );
            warn!("{}", message);
            self.diagnostics.warn(message);
        }
        self.stats.samples += 1;
    }

    fn reject_empty_sample(&mut self, number: usize) {
        let message = format!("Line {}: 'Sample Name:' line has no identifier", number);
        warn!("{}", message);
        self.diagnostics.warn(message);
    }

    fn finish(mut self) -> ParseResult {
        self.stats.cell_errors = self.diagnostics.errors.len();

        if !self.state.header_ended() {
            let message = "Header block never ended; no results table was read";
            warn!("{}", message);
            self.diagnostics.warn(message);
        }

        info!(
            "Parsed {} samples with {} analytes from {} lines",
            self.results.sample_count(),
            self.results.analyte_count(),
            self.stats.total_lines
        );

        ParseResult {
            results: self.results,
            diagnostics: self.diagnostics,
            stats: self.stats,
        }
    }
}
