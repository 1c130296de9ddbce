//! Integration tests for the report parser over encoded files on disk
//!
//! These tests write CP866-encoded report fixtures to temporary files and
//! run the full read-decode-parse pipeline, the same path the process
//! command takes for each discovered file.

use chrono::NaiveDate;
use photometry_processor::app::services::report_parser::ReportParser;
use photometry_processor::config::ParserConfig;
use std::path::Path;
use tempfile::TempDir;

fn encode_ibm866(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::IBM866.encode(text);
    bytes.into_owned()
}

fn write_report(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_ibm866(text)).unwrap();
    path
}

fn parse_file(parser: &ReportParser, path: &Path) -> photometry_processor::Result<photometry_processor::app::services::report_parser::ParseOutcome> {
    let bytes = std::fs::read(path).unwrap();
    let filename = path.file_name().and_then(|n| n.to_str());
    parser.parse(&bytes, filename)
}

const FULL_REPORT: &str = "\
ПУНКТ 0021   Астрон_широта 45.5359  Долгота 73.3601   Высота 306.0
ДАТА  25/09 - 2006         НОМЕР  4
разность со Всемирным временем  6 час
Э Т А Л О Н :   сигнал за 10.0 сек      2441.0
Фильтр     Зв_вел    А-ekst      В-ekst      ekst    сигма
  'V'      11.87      0.912      -0.0510     0.390   0.032
КООРДИНАТЫ:
  10.5   45.2   20.15
  11.0   45.8   20.25
ПЕРИОД УСРЕДНЕНИЯ = 5.0 сек
***************************
Фильтр  Начало_эксп  Интерв,мин  шаг,сек  фон_за_30.0_сек  число_отсч
 'V'     2.15400        4.00      0.500         0.0            4
***************************
Фильтр 'V'  Начало эксп  2.15400  Число отсч  4
ИСХОДНЫЙ СИГНАЛ МИНУС ФОН
  201.0 202.0 203.0 204.0
ИНСТРУМЕНТАЛЬНАЯ ЗВЕЗДНАЯ ВЕЛИЧИНА
  11.1 11.2 11.3 11.4
***************************
";

#[test]
fn test_parse_encoded_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_report(dir.path(), "06092524.30A", FULL_REPORT);

    let parser = ReportParser::with_defaults();
    let outcome = parse_file(&parser, &path).unwrap();

    let obs = &outcome.observation;
    assert_eq!(obs.station.code, "0021");
    assert_eq!(obs.station.latitude_deg, 45.5359);
    assert_eq!(
        obs.header.obs_date,
        NaiveDate::from_ymd_opt(2006, 9, 25).unwrap()
    );
    assert_eq!(obs.header.obs_number, "4");
    assert_eq!(obs.header.utc_offset_hours, 6);
    assert_eq!(obs.coordinates.len(), 2);

    assert_eq!(obs.filters.len(), 1);
    let v = &obs.filters[0];
    assert_eq!(v.code, "V");
    assert_eq!(v.star_magnitude, 11.87);
    assert_eq!(v.experiment.sample_count, 4);
    assert_eq!(v.raw_signals, vec![201.0, 202.0, 203.0, 204.0]);
    assert_eq!(v.instrumental_magnitudes, vec![11.1, 11.2, 11.3, 11.4]);

    // Satellite metadata comes from the filename alone
    assert_eq!(obs.satellite_number.as_deref(), Some("06092524"));
    assert_eq!(obs.partition_time_sec, Some(30));
    assert_eq!(obs.unique_key(), "06092524_2006-09-25_30");
}

#[test]
fn test_record_survives_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_report(dir.path(), "06092524.30A", FULL_REPORT);

    let parser = ReportParser::with_defaults();
    let outcome = parse_file(&parser, &path).unwrap();

    let json = serde_json::to_string_pretty(&outcome.observation).unwrap();
    let restored: photometry_processor::ParsedObservation = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, outcome.observation);
    // Leading zeros survive because identifiers are strings end to end
    assert!(json.contains("\"06092524\""));
    assert!(json.contains("\"0021\""));
}

#[test]
fn test_structural_failure_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_report(dir.path(), "broken.dat", "ДАТА  25/09 - 2006   НОМЕР 4");

    let parser = ReportParser::with_defaults();
    let err = parse_file(&parser, &path).unwrap_err();

    assert!(err.to_string().contains("broken.dat"));
}

#[test]
fn test_custom_overflow_margin_applies() {
    let report = "\
ПУНКТ 0021   Астрон_широта 45.5359  Долгота 73.3601   Высота 306.0
ДАТА  25/09 - 2006         НОМЕР  4
Фильтр 'B'  Начало эксп  2.00000  Число отсч  2
ИСХОДНЫЙ СИГНАЛ МИНУС ФОН
  1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0
";
    let dir = TempDir::new().unwrap();
    let path = write_report(dir.path(), "wide.dat", report);

    let config = ParserConfig {
        overflow_margin: 2.0,
        ..ParserConfig::default()
    };
    let parser = ReportParser::new(config);
    let outcome = parse_file(&parser, &path).unwrap();

    // Over-full tables always truncate back to the declared count
    assert_eq!(outcome.observation.filters[0].raw_signals, vec![1.0, 2.0]);
}
