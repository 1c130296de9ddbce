//! Filename metadata extraction tests.

use crate::app::services::report_parser::filename::{FilenameMeta, extract_filename_meta};

#[test]
fn test_partition_scheme_filename() {
    let meta = extract_filename_meta(Some("09042224.15E")).unwrap();

    assert_eq!(
        meta,
        FilenameMeta {
            satellite_number: "09042224".to_string(),
            partition_time_sec: 15,
        }
    );
}

#[test]
fn test_leading_zeros_are_preserved() {
    let meta = extract_filename_meta(Some("00012345.00A")).unwrap();
    assert_eq!(meta.satellite_number, "00012345");
    assert_eq!(meta.partition_time_sec, 0);
}

#[test]
fn test_non_matching_names_carry_no_metadata() {
    assert_eq!(extract_filename_meta(Some("report.txt")), None);
    assert_eq!(extract_filename_meta(Some("1234567.15E")), None);
    assert_eq!(extract_filename_meta(Some("09042224.1E")), None);
    assert_eq!(extract_filename_meta(Some("09042224.15e")), None);
    assert_eq!(extract_filename_meta(Some("09042224.15EX")), None);
    assert_eq!(extract_filename_meta(Some("")), None);
}

#[test]
fn test_missing_filename_carries_no_metadata() {
    assert_eq!(extract_filename_meta(None), None);
}
