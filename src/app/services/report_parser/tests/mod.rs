//! Shared fixtures for the report parser tests.
//!
//! The sample report mirrors the legacy station output closely enough to
//! exercise every block locator: station line, combined date/number line,
//! etalon and parameter tables, coordinate series and two filter sections.

pub mod coordinates_tests;
pub mod filename_tests;
pub mod header_tests;
pub mod station_tests;

use crate::app::services::report_parser::decoder::RawReport;

/// Filename following the partitioned satellite naming scheme
pub const SAMPLE_FILENAME: &str = "09042224.15E";

/// A complete well-formed report covering every section the parser knows
pub fn sample_report_text() -> String {
    [
        "ПУНКТ 0021   Астрон_широта 45.5359  Долгота 73.3601   Высота 306.0",
        "ДАТА  22/04 - 2009         НОМЕР  15",
        "разность со Всемирным временем  6 час",
        "Э Т А Л О Н :   сигнал за 10.0 сек      2441.0",
        "Фильтр     Зв_вел    А-ekst      В-ekst      ekst    сигма",
        "  'B'      12.52      0.868      -0.0843     0.425   0.037",
        "  'V'      11.87      0.912      -0.0510     0.390   0.032",
        "КООРДИНАТЫ:",
        "  10.5   45.2   20.15",
        "  11.0   45.8   20.25",
        "  12.3   46.1   20.40",
        "ПЕРИОД УСРЕДНЕНИЯ = 5.0 сек",
        "***************************",
        "Фильтр  Начало_эксп  Интерв,мин  шаг,сек  фон_за_30.0_сек  число_отсч",
        " 'B'     2.04570        4.00      0.500         0.0            6",
        " 'V'     2.15400        4.00      0.500         0.0            4",
        "***************************",
        "Фильтр 'B'  Начало эксп  2.04570  Число отсч  6",
        "ИСХОДНЫЙ СИГНАЛ МИНУС ФОН",
        "  101.0 102.0 103.0",
        "  104.0 105.0 106.0 107.0",
        "ИНСТРУМЕНТАЛЬНАЯ ЗВЕЗДНАЯ ВЕЛИЧИНА",
        "  12.1 12.2 12.3",
        "  12.4 12.5 12.6",
        "УСРЕДНЕННЫЕ ВЕЛИЧИНЫ",
        "  1  20.15  12.15  30.0  120.0",
        "  2  20.20  12.45",
        "---------------------------",
        "МАКСИМАЛЬНЫЕ ПИКИ",
        "  1  0.52  14  99.0  2.5",
        "  2  0.31   7  95.0  1.2",
        "***************************",
        "Фильтр 'V'  Начало эксп  2.15400  Число отсч  4",
        "ИСХОДНЫЙ СИГНАЛ МИНУС ФОН",
        "  201.0 202.0 203.0 204.0",
        "ИНСТРУМЕНТАЛЬНАЯ ЗВЕЗДНАЯ ВЕЛИЧИНА",
        "  11.1 11.2 11.3 11.4",
        "***************************",
    ]
    .join("\n")
}

/// Encode text the way the legacy stations wrote it
pub fn encode_ibm866(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::IBM866.encode(text);
    bytes.into_owned()
}

/// Decode a text fixture into the canonical line sequence
pub fn report_from(text: &str) -> RawReport {
    RawReport::from_bytes(&encode_ibm866(text), Some(SAMPLE_FILENAME))
        .expect("fixture must decode")
}

/// The full sample report as a decoded line sequence
pub fn sample_report() -> RawReport {
    report_from(&sample_report_text())
}

/// Owned line vector for the table extractor tests
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
