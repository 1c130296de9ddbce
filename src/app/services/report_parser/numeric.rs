//! Fixed-length numeric array recovery
//!
//! Data tables in damaged source files run long, run short, and contain
//! incidental blank lines. The extractor scans forward from a start index
//! collecting every token that parses as a float, stops at recognized
//! section boundaries, and halts early once an over-collection margin is
//! reached. Short arrays are returned as-is with a length-mismatch signal
//! for the caller to log; they are never an error.

use crate::app::models::{AveragedMagnitude, SpectralPeak};
use crate::constants::anchors;
use tracing::debug;

use super::filters::matches_filter_header;

/// Result of a fixed-length table scan
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    /// Collected values, truncated to the expected count when over-full
    pub values: Vec<f64>,

    /// Element count the caller expected
    pub expected: usize,
}

impl NumericArray {
    /// Whether fewer values were recovered than expected
    pub fn is_short(&self) -> bool {
        self.values.len() < self.expected
    }
}

/// A line that terminates any numeric table scan (exclusive)
pub fn is_section_boundary(line: &str) -> bool {
    line.starts_with(anchors::SEPARATOR)
        || line.starts_with(anchors::FILTER)
        || line.starts_with(anchors::FILTER_SPACED)
        || matches_filter_header(line).is_some()
        || line.contains(anchors::ETALON)
        || line.contains(anchors::COORDINATES)
        || line.contains(anchors::AVERAGING)
}

/// A table header line skipped (not terminated on) inside a data table
fn is_table_header(line: &str) -> bool {
    (line.contains(anchors::RAW_SIGNAL_WORD) && line.contains(anchors::SIGNAL_WORD))
        || line.contains(anchors::INSTRUMENTAL)
        || line.contains(anchors::SPECTRAL_PEAKS)
        || line.contains(anchors::AVERAGED)
}

/// Collect up to `expected * overflow_margin` floats starting at `start`
///
/// Tokens are appended in left-to-right order with cross-line continuity.
/// Blank lines are skipped rather than treated as terminators to tolerate
/// incidental blank lines inside damaged tables. If at least `expected`
/// values were collected the result is truncated to exactly `expected`;
/// otherwise the partial array is returned and [`NumericArray::is_short`]
/// signals the mismatch.
pub fn extract_numeric_array(
    lines: &[String],
    start: usize,
    expected: usize,
    overflow_margin: f64,
) -> NumericArray {
    let mut values = Vec::with_capacity(expected);

    if expected == 0 {
        return NumericArray { values, expected };
    }

    let cap = (expected as f64 * overflow_margin).ceil() as usize;

    for (offset, line) in lines[start.min(lines.len())..].iter().enumerate() {
        if is_section_boundary(line) {
            debug!(
                "Numeric scan stopped at line {}: '{}'",
                start + offset,
                line
            );
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        if is_table_header(line) {
            continue;
        }

        for token in line.split_whitespace() {
            if let Ok(value) = token.parse::<f64>() {
                values.push(value);
            }
        }

        if values.len() >= cap {
            debug!("Numeric scan reached overflow cap of {} values", cap);
            break;
        }
    }

    if values.len() >= expected {
        values.truncate(expected);
    }

    NumericArray { values, expected }
}

/// Collect averaged-magnitude rows starting at `start`
///
/// Rows carry index, local time and magnitude, optionally followed by
/// auxiliary zenith/azimuth angles. The listing ends at a table rule, a
/// separator, or the next filter-related line.
pub fn extract_averaged_magnitudes(lines: &[String], start: usize) -> Vec<AveragedMagnitude> {
    let mut rows = Vec::new();

    for line in &lines[start.min(lines.len())..] {
        if is_listing_boundary(line) {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            continue;
        }

        let row = (|| {
            Some(AveragedMagnitude {
                index: tokens[0].parse().ok()?,
                time_local_dec_hours: tokens[1].parse().ok()?,
                magnitude: tokens[2].parse().ok()?,
                zenith_deg: tokens.get(3).and_then(|t| t.parse().ok()),
                azimuth_deg: tokens.get(4).and_then(|t| t.parse().ok()),
            })
        })();

        if let Some(row) = row {
            rows.push(row);
        }
    }

    rows
}

/// Collect ranked spectral-peak rows starting at `start`
pub fn extract_spectral_peaks(lines: &[String], start: usize) -> Vec<SpectralPeak> {
    let mut peaks = Vec::new();

    for line in &lines[start.min(lines.len())..] {
        if is_listing_boundary(line) {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 5 {
            continue;
        }

        let peak = (|| {
            Some(SpectralPeak {
                rank: tokens[0].parse().ok()?,
                amplitude: tokens[1].parse().ok()?,
                index: tokens[2].parse().ok()?,
                percentile: tokens[3].parse().ok()?,
                period_sec: tokens[4].parse().ok()?,
            })
        })();

        if let Some(peak) = peak {
            peaks.push(peak);
        }
    }

    peaks
}

/// Boundary that closes a row listing (averaged magnitudes, peaks)
fn is_listing_boundary(line: &str) -> bool {
    line.starts_with(anchors::TABLE_RULE)
        || line.starts_with(anchors::SEPARATOR)
        || line.starts_with(anchors::FILTER)
        || line.starts_with(anchors::FILTER_SPACED)
        || matches_filter_header(line).is_some()
}
