//! Etalon calibration and filter-parameter table extractors
//!
//! Both tables map a quoted filter code onto a row of scalar fields. Each
//! extractor finds its own anchor line, collects rows matching the
//! quoted-code pattern, and stops at a recognized section boundary. The
//! resulting maps seed the filter block assembler; they are never emitted
//! directly in the final record.

use crate::constants::{FILTER_CODES, anchors};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::decoder::RawReport;

/// Per-filter calibration scalars from the etalon table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationEntry {
    pub magnitude: f64,
    pub a_ext: f64,
    pub b_ext: f64,
    pub extinction: f64,
    pub sigma: f64,
}

/// Per-filter experiment scalars from the parameter table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterEntry {
    pub exposure_start: f64,
    pub interval_min: f64,
    pub step_sec: f64,
    pub background_30_sec: f64,
    pub sample_count: usize,
}

// 'B'      12.52      0.868      -0.0843     0.425   0.037
static CALIBRATION_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"'(\w{1,2})'\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)\s+(-?[\d.]+)",
    )
    .unwrap()
});

// 'B'     2.04570        4.00      0.500         0.0            480
static PARAMETER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(\w{1,2})'\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+(\d+)").unwrap()
});

/// Extract the etalon calibration table, keyed by filter code
///
/// ```text
/// Э Т А Л О Н :   сигнал за 10.0 сек      2441.0
/// Фильтр     Зв_вел    А─ekst      В─ekst      ekst    сигма
///   'B'      12.52      0.868      -0.0843     0.425   0.037
/// ```
pub fn extract_calibration(report: &RawReport) -> HashMap<String, CalibrationEntry> {
    let mut entries = HashMap::new();

    let Some(start) = report
        .lines
        .iter()
        .position(|line| line.contains(anchors::ETALON) || line.contains(anchors::ETALON_SPACED))
    else {
        debug!("No etalon anchor in '{}'", report.display_name());
        return entries;
    };

    for line in &report.lines[start + 1..] {
        if is_table_boundary(line) {
            break;
        }

        let Some(caps) = CALIBRATION_ROW.captures(line) else {
            // Column header or stray text between anchor and rows
            continue;
        };

        let code = caps[1].to_string();
        if !FILTER_CODES.contains(&code.as_str()) {
            debug!("Skipping calibration row for unknown filter '{}'", code);
            continue;
        }

        let entry = (|| {
            Some(CalibrationEntry {
                magnitude: caps[2].parse().ok()?,
                a_ext: caps[3].parse().ok()?,
                b_ext: caps[4].parse().ok()?,
                extinction: caps[5].parse().ok()?,
                sigma: caps[6].parse().ok()?,
            })
        })();

        if let Some(entry) = entry {
            debug!("Calibration row for filter '{}': {:?}", code, entry);
            entries.insert(code, entry);
        }
    }

    entries
}

/// Extract the filter parameter table, keyed by filter code
///
/// ```text
/// Фильтр  Начало_эксп  Интерв,мин  шаг,сек  фон_за_30.0_сек  число_отсч
///  'B'     2.04570        4.00      0.500         0.0            480
/// ```
pub fn extract_filter_parameters(report: &RawReport) -> HashMap<String, ParameterEntry> {
    let mut entries = HashMap::new();

    let Some(start) = report
        .lines
        .iter()
        .position(|line| line.contains(anchors::FILTER) && line.contains("Начало_эксп"))
    else {
        debug!("No parameter table header in '{}'", report.display_name());
        return entries;
    };

    for line in &report.lines[start + 1..] {
        if line.starts_with(anchors::SEPARATOR) || line.contains(anchors::SPECTRAL_PEAKS) {
            break;
        }

        let Some(caps) = PARAMETER_ROW.captures(line) else {
            continue;
        };

        let code = caps[1].to_string();
        if !FILTER_CODES.contains(&code.as_str()) {
            debug!("Skipping parameter row for unknown filter '{}'", code);
            continue;
        }

        let entry = (|| {
            Some(ParameterEntry {
                exposure_start: caps[2].parse().ok()?,
                interval_min: caps[3].parse().ok()?,
                step_sec: caps[4].parse().ok()?,
                background_30_sec: caps[5].parse().ok()?,
                sample_count: caps[6].parse().ok()?,
            })
        })();

        if let Some(entry) = entry {
            debug!("Parameter row for filter '{}': {:?}", code, entry);
            entries.insert(code, entry);
        }
    }

    entries
}

/// Boundary that closes the calibration table scan
fn is_table_boundary(line: &str) -> bool {
    line.contains(anchors::COORDINATES)
        || line.contains(anchors::AVERAGING)
        || line.starts_with(anchors::SEPARATOR)
}
