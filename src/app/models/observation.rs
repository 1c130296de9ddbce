//! Top-level observation record and its scalar sub-records.

use super::filter::FilterBlock;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed ground location a report was taken from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    /// Station code; preserves leading zeros
    pub code: String,

    /// Astronomical latitude in decimal degrees
    pub latitude_deg: f64,

    /// Longitude in decimal degrees
    pub longitude_deg: f64,

    /// Altitude in meters
    pub altitude_m: f64,
}

/// Reference-signal calibration extracted from the etalon anchor line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtalonCalibration {
    /// Reference signal amplitude
    pub signal: f64,

    /// Accumulation duration in seconds
    pub duration_sec: f64,
}

/// Date, number and optional calibration scalars of one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationHeader {
    /// Observation calendar date, normalized to year-month-day
    pub obs_date: NaiveDate,

    /// Observation number; preserves leading zeros
    pub obs_number: String,

    /// Offset from universal time in whole hours; zero when absent
    pub utc_offset_hours: i32,

    /// Averaging period in seconds, when the report declares one
    pub averaging_period_sec: Option<f64>,

    /// Etalon calibration, when the report declares one
    pub etalon: Option<EtalonCalibration>,
}

/// One row of the coordinate time series, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSample {
    /// Hour angle in degrees
    pub hour_angle_deg: f64,

    /// Declination in degrees
    pub delta_deg: f64,

    /// Local time in decimal hours
    pub time_local_dec_hours: f64,
}

/// Catalog identity attached by satellite enrichment; strictly additive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteIdentity {
    /// Satellite number as it appears in the catalog
    pub number: String,

    /// Catalog name
    pub name: String,

    /// International designator, when the catalog carries one
    pub intl_designator: Option<String>,
}

/// The structured result of parsing one report file
///
/// Sole output of the core parser: station and header blocks are mandatory,
/// coordinate and filter arrays may be empty, satellite metadata is present
/// only when the filename matched the partition naming scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedObservation {
    /// Ground station the report originates from
    pub station: StationInfo,

    /// Date/number/calibration scalars
    pub header: ObservationHeader,

    /// Coordinate time series, in file order
    pub coordinates: Vec<CoordinateSample>,

    /// Per-filter photometric blocks, in first-encountered order
    pub filters: Vec<FilterBlock>,

    /// Satellite identifier derived from the filename, when it matched
    pub satellite_number: Option<String>,

    /// Partition time offset in seconds derived from the filename
    pub partition_time_sec: Option<u32>,

    /// Catalog identity attached by enrichment; never set by the parser
    pub satellite: Option<SatelliteIdentity>,
}

impl ParsedObservation {
    /// Uniqueness key over this observation.
    ///
    /// Partitioned satellite observations are keyed by satellite number,
    /// date and partition offset; station-only observations by station
    /// code, date and observation number.
    pub fn unique_key(&self) -> String {
        match &self.satellite_number {
            Some(number) => format!(
                "{}_{}_{}",
                number,
                self.header.obs_date,
                self.partition_time_sec.unwrap_or(0)
            ),
            None => format!(
                "{}_{}_{}",
                self.station.code, self.header.obs_date, self.header.obs_number
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(satellite: Option<&str>, partition: Option<u32>) -> ParsedObservation {
        ParsedObservation {
            station: StationInfo {
                code: "0021".to_string(),
                latitude_deg: 45.5359,
                longitude_deg: 73.3601,
                altitude_m: 306.0,
            },
            header: ObservationHeader {
                obs_date: NaiveDate::from_ymd_opt(2006, 9, 25).unwrap(),
                obs_number: "000216".to_string(),
                utc_offset_hours: 6,
                averaging_period_sec: None,
                etalon: None,
            },
            coordinates: Vec::new(),
            filters: Vec::new(),
            satellite_number: satellite.map(|s| s.to_string()),
            partition_time_sec: partition,
            satellite: None,
        }
    }

    #[test]
    fn test_unique_key_with_satellite_metadata() {
        let obs = observation(Some("09042224"), Some(15));
        assert_eq!(obs.unique_key(), "09042224_2006-09-25_15");
    }

    #[test]
    fn test_unique_key_defaults_partition_to_zero() {
        let obs = observation(Some("09042224"), None);
        assert_eq!(obs.unique_key(), "09042224_2006-09-25_0");
    }

    #[test]
    fn test_unique_key_station_fallback() {
        let obs = observation(None, None);
        assert_eq!(obs.unique_key(), "0021_2006-09-25_000216");
    }

    #[test]
    fn test_observation_json_round_trip_preserves_leading_zeros() {
        let obs = observation(None, None);
        let json = serde_json::to_string(&obs).unwrap();
        let back: ParsedObservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.station.code, "0021");
        assert_eq!(back.header.obs_number, "000216");
        assert_eq!(back, obs);
    }
}
