//! CP866 byte decoding and line normalization
//!
//! The only place in the crate that touches raw report bytes. Decoding uses
//! the fixed IBM866 (CP866) codec with no auto-detection; IBM866 maps all
//! 256 byte values, so a decode rejection is effectively impossible and the
//! error path exists for interface completeness.

use crate::{Error, Result};
use encoding_rs::IBM866;
use tracing::debug;

/// Placeholder used in diagnostics when no filename was supplied
pub const UNNAMED_REPORT: &str = "<unnamed>";

/// A decoded report: trimmed non-empty lines in file order, plus the
/// original filename. Produced once per input buffer and consumed
/// read-only by every block locator.
#[derive(Debug, Clone)]
pub struct RawReport {
    /// Original filename, when the caller supplied one
    pub filename: Option<String>,

    /// Trimmed, non-empty lines in original order
    pub lines: Vec<String>,
}

impl RawReport {
    /// Decode a byte buffer into the canonical line sequence
    pub fn from_bytes(bytes: &[u8], filename: Option<&str>) -> Result<Self> {
        let text = decode_report_bytes(bytes, filename)?;
        let lines = normalize_lines(&text);

        debug!(
            "Decoded report '{}': {} bytes, {} non-empty lines",
            filename.unwrap_or(UNNAMED_REPORT),
            bytes.len(),
            lines.len()
        );

        Ok(Self {
            filename: filename.map(|s| s.to_string()),
            lines,
        })
    }

    /// Filename for diagnostics, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or(UNNAMED_REPORT)
    }
}

/// Decode raw report bytes using the fixed legacy single-byte codec
pub fn decode_report_bytes(bytes: &[u8], filename: Option<&str>) -> Result<String> {
    let (text, _, had_errors) = IBM866.decode(bytes);

    if had_errors {
        return Err(Error::decode(
            filename.unwrap_or(UNNAMED_REPORT),
            "byte sequence rejected by the IBM866 codec",
        ));
    }

    Ok(text.into_owned())
}

/// Split decoded text into trimmed, non-empty lines, preserving order
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
