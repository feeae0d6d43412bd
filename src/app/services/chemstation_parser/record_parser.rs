//! Results table row parsing
//!
//! Body lines are either blank, a sample boundary, the `Comp #` table
//! header, or analyte rows read from fixed vendor column positions.

use tracing::debug;

use super::field_parsers::{normalize_keyword, parse_result_cell};
use super::header::sample_name;
use super::tokenizer::RawLine;
use crate::app::models::{AnalyteRecord, Diagnostics, ResultField};
use crate::constants::{TABLE_HEADER_MARKER, columns};
use crate::{Error, Result};

/// Captured results table header
///
/// Only its presence matters: rows are read from fixed positions, never
/// from the column order recorded here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    header: Option<Vec<String>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }
}

/// Classification of one body line
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Blank or separator line
    Blank,
    /// The `Comp #` table header was captured
    TableHeader,
    /// A "Sample Name:" line, `None` when it carries no identifier
    SampleBoundary(Option<String>),
    /// Line seen before any table header
    Preamble,
    /// Analyte row whose compound name normalizes to nothing
    Skipped,
    /// Parsed analyte row
    Analyte {
        keyword: String,
        record: AnalyteRecord,
    },
}

/// Parse one line in body mode
///
/// Cell-level problems are recorded in `diagnostics`; only rows too short to
/// hold the vendor columns fail the parse.
pub fn parse_results_line(
    line: &RawLine,
    table: &mut ResultTable,
    diagnostics: &mut Diagnostics,
) -> Result<RowOutcome> {
    if line.is_blank() {
        return Ok(RowOutcome::Blank);
    }

    if let Some(sample_id) = sample_name(line) {
        return Ok(RowOutcome::SampleBoundary(sample_id));
    }

    if line.first() == TABLE_HEADER_MARKER {
        debug!("Results table header at line {}", line.number());
        table.header = Some(line.tokens().to_vec());
        return Ok(RowOutcome::TableHeader);
    }

    if !table.has_header() {
        debug!("Skipping line {} before results table header", line.number());
        return Ok(RowOutcome::Preamble);
    }

    if line.len() < columns::MIN_ROW_WIDTH {
        return Err(Error::malformed_row(
            line.number(),
            line.len(),
            columns::MIN_ROW_WIDTH,
        ));
    }

    let mut record = AnalyteRecord::default();
    for field in ResultField::ALL {
        let raw = line.get(field.column_index()).unwrap_or("");
        let value = parse_result_cell(raw, field, line.number(), diagnostics);
        record.set(field, value);
    }

    let name = line.get(columns::ANALYTE_NAME).unwrap_or("");
    let keyword = normalize_keyword(name);
    if keyword.is_empty() {
        diagnostics.err(format!(
            "Line {}: No valid analyte name '{}' in column (Name)",
            line.number(),
            name
        ));
        return Ok(RowOutcome::Skipped);
    }

    Ok(RowOutcome::Analyte { keyword, record })
}
