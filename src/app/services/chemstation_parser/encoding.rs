//! Byte decoding for result exports
//!
//! ChemStation writes exports as UTF-8, as UTF-16 with a byte order mark
//! (the Windows "Unicode" option), or in the workstation's ANSI code page.
//! Every entry point decodes through [`decode_export`] so that a given file
//! always yields the same text.

use tracing::{debug, warn};

use crate::app::models::Diagnostics;
use crate::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text encoding detected for an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Detect the encoding from a leading byte order mark
    ///
    /// Returns the encoding and the length of the mark to skip.
    pub fn sniff(bytes: &[u8]) -> (Self, usize) {
        if bytes.starts_with(UTF8_BOM) {
            (TextEncoding::Utf8, UTF8_BOM.len())
        } else if bytes.starts_with(UTF16_LE_BOM) {
            (TextEncoding::Utf16Le, UTF16_LE_BOM.len())
        } else if bytes.starts_with(UTF16_BE_BOM) {
            (TextEncoding::Utf16Be, UTF16_BE_BOM.len())
        } else {
            (TextEncoding::Utf8, 0)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
        }
    }
}

/// Decode raw export bytes into text
///
/// UTF-16 input is reported as a log line. Bytes that are not valid UTF-8
/// are replaced with U+FFFD and a warning names the first affected line;
/// well-formed UTF-8 adds nothing to `diagnostics`.
pub fn decode_export(bytes: &[u8], diagnostics: &mut Diagnostics) -> Result<String> {
    let (encoding, bom_len) = TextEncoding::sniff(bytes);
    let body = &bytes[bom_len..];

    match encoding {
        TextEncoding::Utf8 => Ok(decode_utf8(body, diagnostics)),
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            let text = decode_utf16(body, encoding)?;
            debug!("Decoded {} export ({} bytes)", encoding.name(), bytes.len());
            diagnostics.log(format!("Decoded {} export", encoding.name()));
            Ok(text)
        }
    }
}

fn decode_utf8(bytes: &[u8], diagnostics: &mut Diagnostics) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            let line = first_line_of(bytes, e.valid_up_to());
            let message = format!(
                "Line {}: file is not valid UTF-8; undecodable bytes were replaced",
                line
            );
            warn!("{}", message);
            diagnostics.warn(message);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

fn decode_utf16(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::encoding(format!(
            "{} export has an odd number of bytes",
            encoding.name()
        )));
    }

    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| match encoding {
            TextEncoding::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
            _ => u16::from_le_bytes([pair[0], pair[1]]),
        })
        .collect();

    String::from_utf16(&units).map_err(|_| {
        Error::encoding(format!(
            "{} export contains an unpaired surrogate",
            encoding.name()
        ))
    })
}

/// 1-based line holding the byte at `offset`
fn first_line_of(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|byte| **byte == b'\n').count() + 1
}
