//! Station block locator
//!
//! Finds the first line carrying the station anchor keyword and extracts
//! the four labeled fields via independent sub-patterns. Labels and values
//! may be separated by variable whitespace; column positions are never
//! assumed.

use crate::app::models::StationInfo;
use crate::constants::anchors;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::decoder::RawReport;

static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ПУНКТ\s+(\w+)").unwrap());
static LATITUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Астрон_широта\s+(-?[\d.]+)").unwrap());
static LONGITUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Долгота\s+(-?[\d.]+)").unwrap());
static ALTITUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Высота\s+(-?[\d.]+)").unwrap());

/// Locate and extract the station block
///
/// Example anchor line:
/// `ПУНКТ 0021   Астрон_широта 45.5359  Долгота 73.3601   Высота 306.0`
pub fn locate_station(report: &RawReport) -> Result<StationInfo> {
    let line = report
        .lines
        .iter()
        .find(|line| line.contains(anchors::STATION))
        .ok_or_else(|| Error::missing_station_block(report.display_name()))?;

    debug!("Station anchor line: '{}'", line);

    let code = CODE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::malformed_station_block(report.display_name(), line.clone()))?;

    let latitude_deg = capture_f64(&LATITUDE, line)
        .ok_or_else(|| Error::malformed_station_block(report.display_name(), line.clone()))?;
    let longitude_deg = capture_f64(&LONGITUDE, line)
        .ok_or_else(|| Error::malformed_station_block(report.display_name(), line.clone()))?;
    let altitude_m = capture_f64(&ALTITUDE, line)
        .ok_or_else(|| Error::malformed_station_block(report.display_name(), line.clone()))?;

    Ok(StationInfo {
        code,
        latitude_deg,
        longitude_deg,
        altitude_m,
    })
}

fn capture_f64(pattern: &Regex, line: &str) -> Option<f64> {
    pattern
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}
