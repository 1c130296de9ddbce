//! Date/number block and header scalar tests.

use chrono::NaiveDate;

use crate::Error;
use crate::app::services::report_parser::header::locate_header;
use crate::app::services::report_parser::stats::ParseStats;

use super::{report_from, sample_report};

#[test]
fn test_combined_date_number_line() {
    let mut stats = ParseStats::default();
    let header = locate_header(&sample_report(), &mut stats).unwrap();

    assert_eq!(header.obs_date, NaiveDate::from_ymd_opt(2009, 4, 22).unwrap());
    assert_eq!(header.obs_number, "15");
    assert_eq!(header.utc_offset_hours, 6);
    assert_eq!(header.averaging_period_sec, Some(5.0));

    let etalon = header.etalon.unwrap();
    assert_eq!(etalon.duration_sec, 10.0);
    assert_eq!(etalon.signal, 2441.0);
}

#[test]
fn test_date_and_number_on_separate_lines() {
    let report = report_from("ДАТА  25/09 - 2006\nНОМЕР  3");
    let mut stats = ParseStats::default();
    let header = locate_header(&report, &mut stats).unwrap();

    assert_eq!(header.obs_date, NaiveDate::from_ymd_opt(2006, 9, 25).unwrap());
    assert_eq!(header.obs_number, "3");
    assert!(stats.has_warnings());
}

#[test]
fn test_corrupted_date_separator_glyph() {
    let report = report_from("ДАТА  22/04 ? 2009   НОМЕР 15");
    let mut stats = ParseStats::default();
    let header = locate_header(&report, &mut stats).unwrap();

    assert_eq!(header.obs_date, NaiveDate::from_ymd_opt(2009, 4, 22).unwrap());
}

#[test]
fn test_date_without_separator() {
    let report = report_from("ДАТА  22/04 2009   НОМЕР 15");
    let mut stats = ParseStats::default();
    let header = locate_header(&report, &mut stats).unwrap();

    assert_eq!(header.obs_date, NaiveDate::from_ymd_opt(2009, 4, 22).unwrap());
}

#[test]
fn test_implausible_calendar_date_rejected() {
    let report = report_from("ДАТА  31/02 - 2009   НОМЕР 15");
    let mut stats = ParseStats::default();
    let err = locate_header(&report, &mut stats).unwrap_err();

    assert!(matches!(err, Error::MissingDateBlock { .. }));
}

#[test]
fn test_missing_date_anchor_is_structural_error() {
    let report = report_from("ПУНКТ 0021  Астрон_широта 45.0  Долгота 73.0  Высота 306.0");
    let mut stats = ParseStats::default();
    let err = locate_header(&report, &mut stats).unwrap_err();

    assert!(matches!(err, Error::MissingDateBlock { .. }));
    assert!(err.is_structural());
}

#[test]
fn test_optional_scalars_default_when_absent() {
    let report = report_from("ДАТА  22/04 - 2009   НОМЕР 15");
    let mut stats = ParseStats::default();
    let header = locate_header(&report, &mut stats).unwrap();

    assert_eq!(header.utc_offset_hours, 0);
    assert_eq!(header.averaging_period_sec, None);
    assert_eq!(header.etalon, None);
    // Missing optional anchors are warnings, never errors
    assert!(stats.has_warnings());
}

#[test]
fn test_observation_number_keeps_leading_zeros() {
    let report = report_from("ДАТА  22/04 - 2009   НОМЕР 007");
    let mut stats = ParseStats::default();
    let header = locate_header(&report, &mut stats).unwrap();

    assert_eq!(header.obs_number, "007");
}
