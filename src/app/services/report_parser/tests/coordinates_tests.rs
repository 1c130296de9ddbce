//! Coordinate table extractor tests.

use crate::app::services::report_parser::coordinates::extract_coordinates;

use super::{report_from, sample_report};

#[test]
fn test_samples_collected_in_file_order() {
    let samples = extract_coordinates(&sample_report());

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].hour_angle_deg, 10.5);
    assert_eq!(samples[0].delta_deg, 45.2);
    assert_eq!(samples[0].time_local_dec_hours, 20.15);
    assert_eq!(samples[2].hour_angle_deg, 12.3);
}

#[test]
fn test_missing_anchor_yields_empty_series() {
    let report = report_from("ПУНКТ 0021  Астрон_широта 45.0  Долгота 73.0  Высота 306.0");
    assert!(extract_coordinates(&report).is_empty());
}

#[test]
fn test_non_numeric_rows_are_skipped() {
    let report = report_from(
        "КООРДИНАТЫ:\n\
         часовой угол  склонение  время\n\
         10.5   45.2   20.15\n\
         ПЕРИОД УСРЕДНЕНИЯ = 5.0 сек",
    );

    let samples = extract_coordinates(&report);
    assert_eq!(samples.len(), 1);
}

#[test]
fn test_scan_stops_at_averaging_anchor() {
    let report = report_from(
        "КООРДИНАТЫ:\n\
         10.5   45.2   20.15\n\
         ПЕРИОД УСРЕДНЕНИЯ = 5.0 сек\n\
         11.0   45.8   20.25",
    );

    let samples = extract_coordinates(&report);
    assert_eq!(samples.len(), 1);
}

#[test]
fn test_rows_with_fewer_than_three_tokens_are_skipped() {
    let report = report_from(
        "КООРДИНАТЫ:\n\
         10.5   45.2\n\
         11.0   45.8   20.25",
    );

    let samples = extract_coordinates(&report);
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].hour_angle_deg, 11.0);
}
