//! Per-filter section state machine
//!
//! A single pass over the line sequence. The machine is `Idle` until a
//! per-filter header line opens an accumulator, which is seeded from the
//! calibration and parameter tables by filter code. A subsequent header
//! finalizes the open block and opens the next one; data-section anchors
//! inside an open block delegate to the numeric extractors, each series
//! at most once per filter. At end of input any still-open block is
//! finalized, so the machine always terminates `Idle`.

use crate::app::models::{ExperimentParams, FilterBlock, SummaryStats};
use crate::config::ParserConfig;
use crate::constants::anchors;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::decoder::RawReport;
use super::numeric::{extract_averaged_magnitudes, extract_numeric_array, extract_spectral_peaks};
use super::stats::ParseStats;
use super::tables::{CalibrationEntry, ParameterEntry, extract_calibration, extract_filter_parameters};

/// Ordered filter header patterns, most specific first.
/// Captures: code, exposure start, optional sample count.
static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Фильтр 'B'  Начало эксп  2.04570  Число отсч  480
        Regex::new(r"Фильтр\s+'?(\w+)'?\s+Начало\s+эксп\s+([\d.]+)\s+Число\s+отсч\s+(\d+)")
            .unwrap(),
        // Ф И Л Ь Т Р  'B'  Начало эксп  2.04570
        Regex::new(r#"Ф И Л Ь Т Р\s+['"](\w+)['"]\s+Начало\s+эксп\s+([\d.]+)"#).unwrap(),
        // Spacing-damaged revisions omit the sample count
        Regex::new(r"Фильтр\s+'?(\w+)'?\s+Начало\s+эксп\s+([\d.]+)").unwrap(),
    ]
});

/// Fields captured from a per-filter section header line
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    pub code: String,
    pub exposure_start: f64,
    pub sample_count: Option<usize>,
}

/// Match a line against the ordered filter header patterns
pub fn matches_filter_header(line: &str) -> Option<HeaderMatch> {
    for pattern in HEADER_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            return Some(HeaderMatch {
                code: caps[1].to_string(),
                exposure_start: caps[2].parse().ok()?,
                sample_count: caps.get(3).and_then(|m| m.as_str().parse().ok()),
            });
        }
    }
    None
}

/// Which data series of the open filter have already been populated.
/// Duplicate anchors re-trigger nothing.
#[derive(Debug, Default)]
struct SeriesSeen {
    raw: bool,
    instrumental: bool,
    averaged: bool,
    peaks: bool,
}

/// Single-pass assembler of per-filter blocks
#[derive(Debug)]
pub struct FilterAssembler<'a> {
    report: &'a RawReport,
    calibration: HashMap<String, CalibrationEntry>,
    parameters: HashMap<String, ParameterEntry>,
    config: &'a ParserConfig,
}

impl<'a> FilterAssembler<'a> {
    /// Prepare the assembler, extracting both seeding tables up front
    pub fn new(report: &'a RawReport, config: &'a ParserConfig) -> Self {
        Self {
            calibration: extract_calibration(report),
            parameters: extract_filter_parameters(report),
            report,
            config,
        }
    }

    /// Run the scan and return finalized blocks in first-encountered order
    pub fn run(&self, stats: &mut ParseStats) -> Vec<FilterBlock> {
        let lines = &self.report.lines;
        let mut blocks = Vec::new();
        let mut current: Option<FilterBlock> = None;
        let mut seen = SeriesSeen::default();

        for (i, line) in lines.iter().enumerate() {
            if let Some(header) = matches_filter_header(line) {
                if let Some(open) = current.take() {
                    blocks.push(self.finalize(open, stats));
                }
                debug!("Opening filter block '{}' at line {}", header.code, i);
                current = Some(self.seed(&header));
                seen = SeriesSeen::default();
                continue;
            }

            let Some(block) = current.as_mut() else {
                continue;
            };

            if is_raw_signal_anchor(line) && !seen.raw {
                seen.raw = true;
                let array = extract_numeric_array(
                    lines,
                    i + 1,
                    block.experiment.sample_count,
                    self.config.overflow_margin,
                );
                if array.is_short() {
                    stats.warn(format!(
                        "filter '{}': raw signal table has {} of {} expected values",
                        block.code,
                        array.values.len(),
                        array.expected
                    ));
                }
                block.raw_signals = array.values;
            } else if is_instrumental_anchor(line) && !seen.instrumental {
                seen.instrumental = true;
                let array = extract_numeric_array(
                    lines,
                    i + 1,
                    block.experiment.sample_count,
                    self.config.overflow_margin,
                );
                if array.is_short() {
                    stats.warn(format!(
                        "filter '{}': instrumental magnitude table has {} of {} expected values",
                        block.code,
                        array.values.len(),
                        array.expected
                    ));
                }
                block.instrumental_magnitudes = array.values;
            } else if line.contains(anchors::AVERAGED) && !seen.averaged {
                seen.averaged = true;
                block.averaged_magnitudes = extract_averaged_magnitudes(lines, i + 1);
            } else if line.contains(anchors::SPECTRAL_PEAKS) && !seen.peaks {
                seen.peaks = true;
                block.spectral_peaks = extract_spectral_peaks(lines, i + 1);
            }
        }

        if let Some(open) = current.take() {
            blocks.push(self.finalize(open, stats));
        }

        debug!(
            "Assembled {} filter blocks from '{}'",
            blocks.len(),
            self.report.display_name()
        );

        blocks
    }

    /// Seed a new block from the calibration and parameter tables by code,
    /// defaulting every field to a neutral value when no entry exists. The
    /// header's own exposure/count captures back-fill a missing parameter
    /// row.
    fn seed(&self, header: &HeaderMatch) -> FilterBlock {
        let mut block = FilterBlock::empty(header.code.clone());

        if let Some(cal) = self.calibration.get(&header.code) {
            block.star_magnitude = cal.magnitude;
            block.a_ext = cal.a_ext;
            block.b_ext = cal.b_ext;
            block.extinction = cal.extinction;
            block.sigma = cal.sigma;
        }

        block.experiment = match self.parameters.get(&header.code) {
            Some(params) => ExperimentParams {
                exposure_start: params.exposure_start,
                interval_min: params.interval_min,
                step_sec: params.step_sec,
                background_30_sec: params.background_30_sec,
                sample_count: params.sample_count,
            },
            None => ExperimentParams {
                exposure_start: header.exposure_start,
                sample_count: header.sample_count.unwrap_or(0),
                ..ExperimentParams::default()
            },
        };

        block
    }

    /// Close an accumulator: arrays are already defaulted empty, so only
    /// the derived summary statistics remain to fill in.
    fn finalize(&self, mut block: FilterBlock, stats: &mut ParseStats) -> FilterBlock {
        block.summary_stats = SummaryStats::with_magnitudes(&block.instrumental_magnitudes);

        if block.raw_signals.is_empty() && block.experiment.sample_count > 0 {
            stats.warn(format!("filter '{}' carries no raw signal data", block.code));
        }

        stats.filters_found += 1;
        block
    }
}

/// Raw-signal section anchor, tolerant of spacing variants
fn is_raw_signal_anchor(line: &str) -> bool {
    line.contains(anchors::RAW_SIGNAL)
        || (line.contains(anchors::RAW_SIGNAL_WORD) && line.contains(anchors::SIGNAL_WORD))
}

/// Instrumental-magnitude section anchor; spacing between the words
/// varies between firmware revisions
fn is_instrumental_anchor(line: &str) -> bool {
    line.contains(anchors::INSTRUMENTAL) && line.contains(anchors::STELLAR)
}
