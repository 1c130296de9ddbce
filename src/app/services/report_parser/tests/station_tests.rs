//! Station block locator tests.

use crate::Error;
use crate::app::services::report_parser::station::locate_station;

use super::{report_from, sample_report};

#[test]
fn test_station_fields_extracted() {
    let station = locate_station(&sample_report()).unwrap();

    assert_eq!(station.code, "0021");
    assert_eq!(station.latitude_deg, 45.5359);
    assert_eq!(station.longitude_deg, 73.3601);
    assert_eq!(station.altitude_m, 306.0);
}

#[test]
fn test_station_code_keeps_leading_zeros() {
    let report = report_from("ПУНКТ 0007  Астрон_широта 50.0  Долгота 30.0  Высота 120.0");
    let station = locate_station(&report).unwrap();
    assert_eq!(station.code, "0007");
}

#[test]
fn test_negative_coordinates_accepted() {
    let report = report_from("ПУНКТ 0021  Астрон_широта -33.9249  Долгота -70.6693  Высота 520.0");
    let station = locate_station(&report).unwrap();
    assert_eq!(station.latitude_deg, -33.9249);
    assert_eq!(station.longitude_deg, -70.6693);
}

#[test]
fn test_missing_anchor_is_structural_error() {
    let report = report_from("ДАТА  22/04 - 2009  НОМЕР 15");
    let err = locate_station(&report).unwrap_err();

    assert!(matches!(err, Error::MissingStationBlock { .. }));
    assert!(err.is_structural());
}

#[test]
fn test_anchor_without_altitude_is_malformed() {
    let report = report_from("ПУНКТ 0021  Астрон_широта 45.5359  Долгота 73.3601");
    let err = locate_station(&report).unwrap_err();

    match err {
        Error::MalformedStationBlock { line, .. } => {
            assert!(line.contains("ПУНКТ 0021"));
        }
        other => panic!("expected malformed station block, got {other:?}"),
    }
}
