//! Report parsing orchestration
//!
//! `ReportParser` runs the full pipeline over one byte buffer: decode,
//! filename metadata, station block, date block, coordinates, filter
//! assembly. Block locators report structural failures directly; the
//! orchestrator wraps every inner error with the report filename so a
//! batch run can attribute failures without extra bookkeeping.

use tracing::info;

use crate::app::models::ParsedObservation;
use crate::config::ParserConfig;
use crate::{Error, Result};

use super::coordinates::extract_coordinates;
use super::decoder::{RawReport, UNNAMED_REPORT};
use super::filename::extract_filename_meta;
use super::filters::FilterAssembler;
use super::header::locate_header;
use super::station::locate_station;
use super::stats::{ParseOutcome, ParseStats};

/// Stateless parser for photometric observation reports.
///
/// Holds only configuration, so a single instance can be shared across
/// worker tasks and parsing the same bytes twice yields identical output.
#[derive(Debug, Clone)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    /// Parse one report from raw bytes.
    ///
    /// The filename, when supplied, contributes satellite number and
    /// partition time and labels every error raised from this call.
    pub fn parse(&self, bytes: &[u8], filename: Option<&str>) -> Result<ParseOutcome> {
        let label = filename.unwrap_or(UNNAMED_REPORT).to_string();

        self.parse_inner(bytes, filename)
            .map_err(|e| Error::parse(label, e))
    }

    fn parse_inner(&self, bytes: &[u8], filename: Option<&str>) -> Result<ParseOutcome> {
        if bytes.len() > self.config.max_report_bytes {
            return Err(Error::data_validation(format!(
                "report size {} bytes exceeds the {} byte limit",
                bytes.len(),
                self.config.max_report_bytes
            )));
        }

        let report = RawReport::from_bytes(bytes, filename)?;
        let mut stats = ParseStats::new(report.lines.len());

        let meta = extract_filename_meta(filename);

        let station = locate_station(&report)?;
        let header = locate_header(&report, &mut stats)?;

        let coordinates = extract_coordinates(&report);
        stats.coordinates_found = coordinates.len();
        if coordinates.is_empty() {
            stats.warn("no coordinate samples found");
        }

        let filters = FilterAssembler::new(&report, &self.config).run(&mut stats);
        if filters.is_empty() {
            stats.warn("no filter blocks found");
        }

        let observation = ParsedObservation {
            station,
            header,
            coordinates,
            filters,
            satellite_number: meta.as_ref().map(|m| m.satellite_number.clone()),
            partition_time_sec: meta.as_ref().map(|m| m.partition_time_sec),
            satellite: None,
        };

        info!(
            "Parsed '{}': key {}, {} coordinate samples, {} filters, {} warnings",
            report.display_name(),
            observation.unique_key(),
            stats.coordinates_found,
            stats.filters_found,
            stats.warnings.len()
        );

        Ok(ParseOutcome { observation, stats })
    }
}
