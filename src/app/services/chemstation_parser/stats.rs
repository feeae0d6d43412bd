//! Parsing statistics and result structures for ChemStation processing
//!
//! This module provides the counters tracked over a parse and the result
//! structure handed to the import layer.

use crate::app::models::{Diagnostics, ResultMap};

/// Parsing result with per-sample analyte records, diagnostics and statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Analyte records keyed by sample identifier
    pub results: ResultMap,

    /// Errors, warnings and log lines raised while parsing
    pub diagnostics: Diagnostics,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines read
    pub total_lines: usize,

    /// Lines consumed by the header block, including the closing blank line
    pub header_lines: usize,

    /// Number of `Comp #` table header rows seen
    pub table_headers: usize,

    /// Number of analyte rows stored
    pub data_rows: usize,

    /// Body lines that produced no record (preamble or unnamed analytes)
    pub rows_skipped: usize,

    /// Number of "Sample Name:" blocks opened
    pub samples: usize,

    /// Number of cells that could not be read as numbers
    pub cell_errors: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of attempted analyte rows that were stored, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.data_rows + self.rows_skipped;
        if attempted == 0 {
            0.0
        } else {
            (self.data_rows as f64 / attempted as f64) * 100.0
        }
    }

    /// True when at least one row was stored and every cell was readable
    pub fn is_successful(&self) -> bool {
        self.data_rows > 0 && self.cell_errors == 0
    }
}
