//! Date/number block locator and header scalar extraction
//!
//! Some station firmware emits the date and number anchors on one line,
//! some on two; some corrupts the date separator glyph. An ordered list of
//! date patterns and a two-line concatenation fallback absorb both kinds
//! of drift. UTC offset, averaging period and etalon calibration each live
//! on their own anchor lines and are independently optional.

use crate::app::models::{EtalonCalibration, ObservationHeader};
use crate::constants::anchors;
use crate::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::decoder::RawReport;
use super::stats::ParseStats;

/// Ordered date patterns, most specific first. Captures: day, month, year.
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // ДАТА  25/09 - 2006
        Regex::new(r"ДАТА\s+(\d{2})/(\d{2})\s*-\s*(\d{4})").unwrap(),
        // ДАТА  22/04 ─ 2009 (corrupted separator glyph)
        Regex::new(r"ДАТА\s+(\d{2})/(\d{2})\s*[^\d\s]*\s*(\d{4})").unwrap(),
        // ДАТА  22/04 2009 (no separator at all)
        Regex::new(r"ДАТА\s+(\d{2})/(\d{2})\s+(\d{4})").unwrap(),
    ]
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"НОМЕР\s+(\d+)").unwrap());
static UTC_HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+час").unwrap());
static AVERAGING_SEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\s*(\d+\.?\d*)\s*сек").unwrap());
static ETALON_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"сигнал за (\d+\.?\d*)\s*сек\s+(\d+\.?\d*)").unwrap());

/// Locate the date/number block and collect the header scalars
pub fn locate_header(report: &RawReport, stats: &mut ParseStats) -> Result<ObservationHeader> {
    let lines = &report.lines;

    // Prefer a single line carrying both anchors; fall back to logically
    // concatenating separate date-only and number-only lines.
    let date_line = match lines
        .iter()
        .find(|line| line.contains(anchors::DATE) && line.contains(anchors::NUMBER))
    {
        Some(line) => line.clone(),
        None => {
            let date_only = lines.iter().find(|line| line.contains(anchors::DATE));
            let number_only = lines.iter().find(|line| line.contains(anchors::NUMBER));

            match (date_only, number_only) {
                (Some(date), Some(number)) => {
                    stats.warn(format!(
                        "date and number anchors found on separate lines in '{}'",
                        report.display_name()
                    ));
                    format!("{} {}", date, number)
                }
                _ => return Err(Error::missing_date_block(report.display_name())),
            }
        }
    };

    debug!("Date anchor line: '{}'", date_line);

    let obs_date = extract_date(&date_line)
        .ok_or_else(|| Error::missing_date_block(report.display_name()))?;
    let obs_number = NUMBER
        .captures(&date_line)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::missing_date_block(report.display_name()))?;

    let utc_offset_hours = extract_utc_offset(lines);
    let averaging_period_sec = extract_averaging_period(lines);
    let etalon = extract_etalon(lines);

    if averaging_period_sec.is_none() {
        stats.warn("no averaging-period anchor; averaging period left unset");
    }
    if etalon.is_none() {
        stats.warn("no etalon anchor; calibration left unset");
    }

    Ok(ObservationHeader {
        obs_date,
        obs_number,
        utc_offset_hours,
        averaging_period_sec,
        etalon,
    })
}

/// Try the ordered date patterns and normalize to a calendar date
fn extract_date(line: &str) -> Option<NaiveDate> {
    for (i, pattern) in DATE_PATTERNS.iter().enumerate() {
        if let Some(caps) = pattern.captures(line) {
            let day: u32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let year: i32 = caps[3].parse().ok()?;

            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) => {
                    if i > 0 {
                        debug!("Date matched with fallback pattern {}: '{}'", i, line);
                    }
                    return Some(date);
                }
                // Implausible day/month: let a later pattern try
                None => continue,
            }
        }
    }

    debug!("No date pattern matched: '{}'", line);
    None
}

/// UTC offset from the universal-time anchor line; zero hours when absent
fn extract_utc_offset(lines: &[String]) -> i32 {
    lines
        .iter()
        .find(|line| line.contains(anchors::UTC_OFFSET))
        .and_then(|line| UTC_HOURS.captures(line))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Averaging period in seconds from its own anchor line, when present
fn extract_averaging_period(lines: &[String]) -> Option<f64> {
    lines
        .iter()
        .find(|line| line.contains(anchors::AVERAGING))
        .and_then(|line| AVERAGING_SEC.captures(line))
        .and_then(|caps| caps[1].parse().ok())
}

/// Etalon calibration from its anchor line, when present
///
/// Example: `Э Т А Л О Н :   сигнал за 10.0 сек      2441.0`
fn extract_etalon(lines: &[String]) -> Option<EtalonCalibration> {
    let line = lines
        .iter()
        .find(|line| line.contains(anchors::ETALON) || line.contains(anchors::ETALON_SPACED))?;

    let caps = ETALON_SIGNAL.captures(line)?;
    Some(EtalonCalibration {
        duration_sec: caps[1].parse().ok()?,
        signal: caps[2].parse().ok()?,
    })
}
