//! Header block parsing and sample boundary detection
//!
//! The header block is free-form vendor preamble. Only "Sample Name:" lines
//! are interpreted; the first blank line ends the block for the rest of the
//! file.

use tracing::debug;

use super::tokenizer::RawLine;
use crate::constants::SAMPLE_NAME_PREFIX;

/// What a header line did to the parser state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEvent {
    /// Header already ended, line not examined
    AlreadyEnded,
    /// Blank line switched the parser into body mode
    HeaderEnded,
    /// A "Sample Name:" line named the sample for the following rows
    SampleStarted(String),
    /// A "Sample Name:" line without an identifier
    EmptySampleName,
    /// Any other preamble line
    Ignored,
}

/// Header/body state of one parse
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderState {
    header_ended: bool,
    active_sample: Option<String>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_ended(&self) -> bool {
        self.header_ended
    }

    /// Sample receiving the rows currently being parsed
    pub fn active_sample(&self) -> Option<&str> {
        self.active_sample.as_deref()
    }

    /// Make `sample_id` the target of subsequent rows
    ///
    /// Passing `None` clears the target so later rows cannot be stored under
    /// a previous sample.
    pub fn set_active_sample(&mut self, sample_id: Option<String>) {
        self.active_sample = sample_id;
    }

    /// Interpret one header line
    pub fn parse_line(&mut self, line: &RawLine) -> HeaderEvent {
        if self.header_ended {
            return HeaderEvent::AlreadyEnded;
        }

        if line.is_blank() {
            self.header_ended = true;
            debug!("Header block ended at line {}", line.number());
            return HeaderEvent::HeaderEnded;
        }

        match sample_name(line) {
            Some(Some(sample_id)) => {
                self.active_sample = Some(sample_id.clone());
                HeaderEvent::SampleStarted(sample_id)
            }
            Some(None) => {
                self.active_sample = None;
                HeaderEvent::EmptySampleName
            }
            None => HeaderEvent::Ignored,
        }
    }
}

/// Extract the sample identifier from a "Sample Name:" line
///
/// Returns `None` for any other line and `Some(None)` when the line carries
/// no identifier. The identifier is the text after the first colon of the
/// first token; when that is empty, the next non-empty token is used so
/// exports that put the value in its own column are understood too.
pub fn sample_name(line: &RawLine) -> Option<Option<String>> {
    let first = line.first();
    if !first.starts_with(SAMPLE_NAME_PREFIX) {
        return None;
    }

    let inline = first
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");

    let sample_id = if inline.is_empty() {
        line.tokens()
            .iter()
            .skip(1)
            .find(|token| !token.is_empty())
            .cloned()
    } else {
        Some(inline.to_string())
    };

    Some(sample_id)
}
