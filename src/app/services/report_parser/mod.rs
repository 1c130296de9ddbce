//! Observation file parser for legacy ground-station photometric reports
//!
//! Reports originate from decades-old acquisition software: CP866-encoded
//! text mixing free-form labeled fields with tabular numeric blocks whose
//! exact layout drifts across station firmware revisions. Every block is
//! located by scanning for an anchor keyword and extracting labeled fields
//! with ordered fallback patterns, never by fixed column positions, so
//! format drift stays isolated to one locator at a time.
//!
//! ## Architecture
//!
//! - [`decoder`] - CP866 byte decoding and line normalization
//! - [`filename`] - satellite/partition metadata from the report filename
//! - [`station`] - station block locator
//! - [`header`] - date/number/UTC-offset/calibration scalar locator
//! - [`coordinates`] - coordinate table extractor
//! - [`tables`] - etalon calibration and filter parameter tables
//! - [`filters`] - per-filter section state machine
//! - [`numeric`] - fixed-length numeric array recovery
//! - [`parser`] - orchestration of a full parse
//! - [`stats`] - parse outcome and warning aggregation
//!
//! ## Usage
//!
//! ```rust
//! use photometry_processor::app::services::report_parser::ReportParser;
//! use photometry_processor::config::ParserConfig;
//!
//! # fn example(bytes: &[u8]) -> photometry_processor::Result<()> {
//! let parser = ReportParser::new(ParserConfig::default());
//! let outcome = parser.parse(bytes, Some("09042224.15E"))?;
//!
//! println!(
//!     "parsed station {} with {} filters",
//!     outcome.observation.station.code,
//!     outcome.observation.filters.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod coordinates;
pub mod decoder;
pub mod filename;
pub mod filters;
pub mod header;
pub mod numeric;
pub mod parser;
pub mod station;
pub mod stats;
pub mod tables;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::RawReport;
pub use filename::FilenameMeta;
pub use parser::ReportParser;
pub use stats::{ParseOutcome, ParseStats};
