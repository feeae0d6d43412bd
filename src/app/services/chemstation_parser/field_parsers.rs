//! Cell-level parsing utilities for ChemStation result rows
//!
//! Numeric coercion follows the instrument's conventions: unquantified
//! (`--`), empty and not-detected (`ND`) cells read as zero, and values at or
//! below zero are folded to zero.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::app::models::{Diagnostics, ResultField};
use crate::constants::{NOT_DETECTED, UNQUANTIFIED_PREFIX};

static NON_KEYWORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9]+").expect("keyword pattern is valid"));

/// Outcome of coercing one textual cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue {
    /// Sentinel or numeric cell, already clamped to be non-negative
    Number(f64),
    /// Text that is neither a number nor a sentinel
    Invalid,
}

/// Coerce a raw cell into a non-negative number
pub fn coerce_numeric(raw: &str) -> CellValue {
    let value = raw.trim();
    if value.is_empty() || value.starts_with(UNQUANTIFIED_PREFIX) || value == NOT_DETECTED {
        return CellValue::Number(0.0);
    }

    match value.parse::<f64>() {
        // "inf" and overflowing literals parse, but are not measured values
        Ok(number) if number == f64::INFINITY => CellValue::Invalid,
        // NaN compares false and folds to zero along with negatives
        Ok(number) if number > 0.0 => CellValue::Number(number),
        Ok(_) => CellValue::Number(0.0),
        Err(_) => CellValue::Invalid,
    }
}

/// Coerce a result cell, recording an error for unparseable text
///
/// Returns `None` when no value could be produced; parsing of the rest of the
/// row continues.
pub fn parse_result_cell(
    raw: &str,
    field: ResultField,
    line_number: usize,
    diagnostics: &mut Diagnostics,
) -> Option<f64> {
    match coerce_numeric(raw) {
        CellValue::Number(number) => Some(number),
        CellValue::Invalid => {
            let message = format!(
                "Line {}: No valid number '{}' in column ({})",
                line_number,
                raw.trim(),
                field.column_name()
            );
            warn!("{}", message);
            diagnostics.err(message);
            None
        }
    }
}

/// Normalize a compound name into a LIMS analyte keyword
///
/// Uppercases the name and collapses every run of other characters into a
/// single underscore: `"Analyte A"` becomes `"ANALYTE_A"`.
pub fn normalize_keyword(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    NON_KEYWORD_CHARS
        .replace_all(&upper, "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_normalization() {
        assert_eq!(normalize_keyword("Analyte A"), "ANALYTE_A");
        assert_eq!(normalize_keyword("  so2 (free) "), "SO2_FREE");
        assert_eq!(normalize_keyword("Total-SO2"), "TOTAL_SO2");
        assert_eq!(normalize_keyword("ALREADY_OK"), "ALREADY_OK");
        assert_eq!(normalize_keyword("***"), "");
    }

    #[test]
    fn test_parse_result_cell_records_line_and_column() {
        let mut diagnostics = Diagnostics::new();
        let value = parse_result_cell(" abc ", ResultField::Area, 12, &mut diagnostics);

        assert_eq!(value, None);
        assert_eq!(
            diagnostics.errors,
            vec!["Line 12: No valid number 'abc' in column (Area)"]
        );
    }
}
