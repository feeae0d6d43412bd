//! ChemStation result-file parser
//!
//! This module turns the delimited text export of an Agilent ChemStation
//! chromatography run into per-sample analyte results. A file is a free-form
//! header block closed by a blank line, followed by one results table per
//! sample, each introduced by a "Sample Name:" line.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`encoding`] - Byte decoding (UTF-8, UTF-16 with BOM, lossy fallback)
//! - [`tokenizer`] - Line splitting and header/body routing
//! - [`header`] - Header block state and sample boundary detection
//! - [`record_parser`] - Results table row parsing
//! - [`field_parsers`] - Numeric coercion and analyte keyword normalization
//! - [`parser`] - Single-pass orchestration and result aggregation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use chemstation_importer::{ChemStationParser, ParserConfig};
//!
//! # fn example() -> chemstation_importer::Result<()> {
//! let content = "Sample Name: S001\n\nComp #,Name,RT (min),Area,Amount,Extra,Q-value\n1,SO2,2.50,1000,5.75,x,0.95\n";
//! let result = ChemStationParser::new(ParserConfig::default())?.parse_str(content)?;
//!
//! let so2 = result.results.analyte("S001", "SO2").unwrap();
//! assert_eq!(so2.amount, Some(5.75));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod encoding;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::HeaderState;
pub use parser::ChemStationParser;
pub use record_parser::ResultTable;
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::RawLine;
