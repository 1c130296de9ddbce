//! Photometry Report Processor Library
//!
//! A Rust library for converting legacy ground-station photometric report
//! files from their CP866-encoded, loosely fixed-format text layout into
//! structured observation records.
//!
//! This library provides tools for:
//! - Decoding CP866 (IBM866) report bytes and normalizing line content
//! - Heuristic anchor-based location of station, date and calibration blocks
//! - Per-filter photometric time-series extraction with tolerance for
//!   noisy or truncated numeric tables
//! - Satellite catalog enrichment keyed by filename-derived identifiers
//! - Batch processing of report directories into JSON documents

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
        pub mod satellite_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FilterBlock, ObservationHeader, ParsedObservation, StationInfo};
pub use app::services::report_parser::{ParseOutcome, ReportParser};
pub use app::services::satellite_catalog::SatelliteCatalog;
pub use config::{Config, ParserConfig};

/// Result type alias for the photometry processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for photometric report processing
///
/// The three `*StationBlock`/`MissingDateBlock` variants are the
/// fatal-structural parse failures: the report is rejected when a mandatory
/// block cannot be found or read. Everything recoverable is reported as a
/// warning on the parse outcome instead, never as an error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Byte sequence rejected by the report codec
    #[error("decode error in '{file}': {message}")]
    Decode { file: String, message: String },

    /// No line carrying the station anchor keyword was found
    #[error("station block not found in '{file}'")]
    MissingStationBlock { file: String },

    /// The station anchor line is present but one of its labeled fields is not
    #[error("malformed station block in '{file}': '{line}'")]
    MalformedStationBlock { file: String, line: String },

    /// Neither a combined date/number line nor the two-line fallback matched
    #[error("date/number block not found in '{file}'")]
    MissingDateBlock { file: String },

    /// Terminal parse failure wrapping the first fatal-structural error
    #[error("failed to parse report '{file}'")]
    Parse {
        file: String,
        #[source]
        source: Box<Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Satellite catalog error
    #[error("satellite catalog error: {message}")]
    Catalog { message: String },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// JSON serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create a decode error with context
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a missing-station-block error
    pub fn missing_station_block(file: impl Into<String>) -> Self {
        Self::MissingStationBlock { file: file.into() }
    }

    /// Create a malformed-station-block error carrying the offending line
    pub fn malformed_station_block(file: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedStationBlock {
            file: file.into(),
            line: line.into(),
        }
    }

    /// Create a missing-date-block error
    pub fn missing_date_block(file: impl Into<String>) -> Self {
        Self::MissingDateBlock { file: file.into() }
    }

    /// Wrap a fatal parse error with the report's filename
    pub fn parse(file: impl Into<String>, source: Error) -> Self {
        Self::Parse {
            file: file.into(),
            source: Box::new(source),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a satellite catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error is one of the fatal-structural parse failures
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::Decode { .. }
                | Error::MissingStationBlock { .. }
                | Error::MalformedStationBlock { .. }
                | Error::MissingDateBlock { .. }
                | Error::Parse { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Catalog {
            message: format!("catalog CSV error: {}", error),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::Io {
            message: format!("directory traversal failed: {}", error),
            source: error
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory traversal failed")),
        }
    }
}
