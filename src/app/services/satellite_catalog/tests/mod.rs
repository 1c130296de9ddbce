//! Satellite catalog tests.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::app::models::{ObservationHeader, ParsedObservation, StationInfo};

use super::SatelliteCatalog;

fn catalog_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn observation(satellite_number: Option<&str>) -> ParsedObservation {
    ParsedObservation {
        station: StationInfo {
            code: "0021".to_string(),
            latitude_deg: 45.5359,
            longitude_deg: 73.3601,
            altitude_m: 306.0,
        },
        header: ObservationHeader {
            obs_date: NaiveDate::from_ymd_opt(2009, 4, 22).unwrap(),
            obs_number: "15".to_string(),
            utc_offset_hours: 6,
            averaging_period_sec: None,
            etalon: None,
        },
        coordinates: Vec::new(),
        filters: Vec::new(),
        satellite_number: satellite_number.map(str::to_string),
        partition_time_sec: satellite_number.map(|_| 15),
        satellite: None,
    }
}

#[test]
fn test_load_and_lookup() {
    let file = catalog_file(
        "number,name,intl_designator,notes\n\
         09042224,COSMOS 2251,1993-036A,debris tracked\n\
         00025544,ISS,1998-067A,\n",
    );

    let catalog = SatelliteCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let entry = catalog.get("09042224").unwrap();
    assert_eq!(entry.name, "COSMOS 2251");
    assert_eq!(entry.intl_designator.as_deref(), Some("1993-036A"));

    assert!(catalog.get("99999999").is_none());
}

#[test]
fn test_duplicate_numbers_keep_first_row() {
    let file = catalog_file(
        "number,name,intl_designator,notes\n\
         00025544,ISS,1998-067A,\n\
         00025544,ZARYA,1998-067A,duplicate\n",
    );

    let catalog = SatelliteCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("00025544").unwrap().name, "ISS");
}

#[test]
fn test_empty_number_is_rejected() {
    let file = catalog_file(
        "number,name,intl_designator,notes\n\
         ,NAMELESS,,\n",
    );

    assert!(SatelliteCatalog::load(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = SatelliteCatalog::load(std::path::Path::new("/nonexistent/catalog.csv"));
    assert!(err.is_err());
}

#[test]
fn test_enrich_attaches_identity() {
    let file = catalog_file(
        "number,name,intl_designator,notes\n\
         09042224,COSMOS 2251,1993-036A,\n",
    );
    let catalog = SatelliteCatalog::load(file.path()).unwrap();

    let mut obs = observation(Some("09042224"));
    assert!(catalog.enrich(&mut obs));

    let identity = obs.satellite.unwrap();
    assert_eq!(identity.name, "COSMOS 2251");
    assert_eq!(identity.number, "09042224");
}

#[test]
fn test_enrich_misses_leave_observation_untouched() {
    let catalog = SatelliteCatalog::empty();

    let mut with_number = observation(Some("09042224"));
    assert!(!catalog.enrich(&mut with_number));
    assert_eq!(with_number.satellite, None);

    let mut without_number = observation(None);
    assert!(!catalog.enrich(&mut without_number));
    assert_eq!(without_number.satellite, None);
}
