//! Application constants for the photometry report processor
//!
//! This module contains the report anchor keywords, recognized filter codes
//! and default tolerances used throughout the application.

// =============================================================================
// Report Anchors
// =============================================================================

/// Anchor keywords of the legacy report layout, as they read after CP866
/// decoding. Block locators search for these substrings rather than fixed
/// column positions because the layout drifts across station firmware
/// revisions.
pub mod anchors {
    /// Station block anchor ("point")
    pub const STATION: &str = "ПУНКТ";

    /// Station latitude field label
    pub const LATITUDE: &str = "Астрон_широта";

    /// Station longitude field label
    pub const LONGITUDE: &str = "Долгота";

    /// Station altitude field label
    pub const ALTITUDE: &str = "Высота";

    /// Observation date anchor
    pub const DATE: &str = "ДАТА";

    /// Observation number anchor
    pub const NUMBER: &str = "НОМЕР";

    /// UTC offset phrase ("difference from universal time")
    pub const UTC_OFFSET: &str = "разность со Всемирным временем";

    /// Averaging period anchor
    pub const AVERAGING: &str = "ПЕРИОД УСРЕДНЕНИЯ";

    /// Etalon calibration anchor, compact form
    pub const ETALON: &str = "ЭТАЛОН";

    /// Etalon calibration anchor, letter-spaced form emitted by some firmware
    pub const ETALON_SPACED: &str = "Э Т А Л О Н";

    /// Coordinate table anchor
    pub const COORDINATES: &str = "КООРДИНАТЫ";

    /// Per-filter table prefix; also opens the calibration/parameter headers
    pub const FILTER: &str = "Фильтр";

    /// Filter section header, letter-spaced form
    pub const FILTER_SPACED: &str = "Ф И Л Ь Т Р";

    /// Raw-signal data section anchor ("source signal minus background")
    pub const RAW_SIGNAL: &str = "ИСХОДНЫЙ СИГНАЛ МИНУС ФОН";

    /// First word of the raw-signal anchor, used by the tolerant fallback
    pub const RAW_SIGNAL_WORD: &str = "ИСХОДНЫЙ";

    /// Second word of the raw-signal anchor
    pub const SIGNAL_WORD: &str = "СИГНАЛ";

    /// Instrumental magnitude section words (spacing varies between revisions)
    pub const INSTRUMENTAL: &str = "ИНСТРУМЕНТАЛЬНАЯ";
    pub const STELLAR: &str = "ЗВЕЗДНАЯ";

    /// Averaged magnitude section anchor
    pub const AVERAGED: &str = "УСРЕДНЕННЫЕ ВЕЛИЧИНЫ";

    /// Spectral peaks section anchor
    pub const SPECTRAL_PEAKS: &str = "МАКСИМАЛЬНЫЕ ПИКИ";

    /// Explicit section separator emitted between report blocks
    pub const SEPARATOR: &str = "***";

    /// Table rule under averaged-magnitude and peak listings
    pub const TABLE_RULE: &str = "---";
}

// =============================================================================
// Photometric Filters
// =============================================================================

/// Photometric passband codes recognized in calibration and parameter tables
pub const FILTER_CODES: &[&str] = &["B", "V", "R"];

// =============================================================================
// Parser Tolerances
// =============================================================================

/// Over-collection tolerance for fixed-length numeric tables. Collection
/// halts once the running count reaches `expected * margin`, accommodating
/// off-by-a-few artifacts without risking unbounded runaway. Empirical, not
/// a format invariant; override via [`crate::config::ParserConfig`].
pub const DEFAULT_OVERFLOW_MARGIN: f64 = 1.2;

/// Maximum accepted report size in bytes (legacy upload cap)
pub const DEFAULT_MAX_REPORT_BYTES: usize = 50 * 1024 * 1024;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of parallel workers for batch processing
pub const DEFAULT_PARALLEL_WORKERS: usize = 4;

/// Default filename glob used when discovering report files
pub const DEFAULT_REPORT_PATTERN: &str = "*";

/// Default output directory for generated JSON documents
pub const DEFAULT_OUTPUT_DIR: &str = "output";
