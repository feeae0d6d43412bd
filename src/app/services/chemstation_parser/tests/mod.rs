//! Test utilities for ChemStation parser testing
//!
//! This module provides fixture builders and helper functions used across
//! the parser test modules.

use super::tokenizer::RawLine;
use super::{ChemStationParser, ParseResult};
use crate::config::ParserConfig;

mod header_tests;

/// Results table header as printed by the instrument
pub const TABLE_HEADER: &str = "Comp #,Name,RT (min),Area,Amount,Extra,Q-value";

/// Helper to build a comma-split line
pub fn raw(line: &str, number: usize) -> RawLine {
    RawLine::split(line, ',', number)
}

/// Helper to create a single-sample export
pub fn create_single_sample_export() -> String {
    format!(
        "Sample Name: S001\n\n{}\n1,Analyte A,2.50,1000,5.75,x,0.95\n",
        TABLE_HEADER
    )
}

/// Helper to create a realistic two-sample export with vendor preamble
pub fn create_two_sample_export() -> String {
    format!(
        r#"Data File: C:\CHEM32\1\DATA\RUN42.D
Sample Name: WINE-001
Acq. Operator: lab
Injection Date: 12/03/2024 10:15:22
Method: F SO2 & T SO2

{header}
1,SO2 (free),1.92,15320,12.40,ng,0.98
2,SO2 (total),3.10,40211,48.10,ng,0.97
3,Acetaldehyde,4.75,ND,ND,ng,--
Sample Name: WINE-002
{header}
1,SO2 (free),1.91,14001,11.02,ng,0.99
2,SO2 (total),3.12,-5,-0.4,ng,0.96
"#,
        header = TABLE_HEADER
    )
}

/// Helper to parse content with the default configuration
pub fn parse(content: &str) -> crate::Result<ParseResult> {
    ChemStationParser::new(ParserConfig::default())?.parse_str(content)
}
