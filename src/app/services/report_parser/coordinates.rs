//! Coordinate table extractor
//!
//! Collection starts right after the coordinate-section anchor. Any
//! following line whose first three whitespace-separated tokens parse as
//! numbers becomes a sample; the table is self-delimiting, ending at the
//! averaging-period anchor. No expected-length check applies.

use crate::app::models::CoordinateSample;
use crate::constants::anchors;
use tracing::debug;

use super::decoder::RawReport;

/// Extract the ordered coordinate time series; empty when no anchor exists
pub fn extract_coordinates(report: &RawReport) -> Vec<CoordinateSample> {
    let mut samples = Vec::new();

    let Some(start) = report
        .lines
        .iter()
        .position(|line| line.contains(anchors::COORDINATES))
    else {
        debug!("No coordinate anchor in '{}'", report.display_name());
        return samples;
    };

    for line in &report.lines[start + 1..] {
        if line.contains(anchors::AVERAGING) {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            continue;
        }

        // Positional: hour angle, declination, local time
        let parsed: Option<(f64, f64, f64)> = (|| {
            Some((
                tokens[0].parse().ok()?,
                tokens[1].parse().ok()?,
                tokens[2].parse().ok()?,
            ))
        })();

        if let Some((hour_angle_deg, delta_deg, time_local_dec_hours)) = parsed {
            samples.push(CoordinateSample {
                hour_angle_deg,
                delta_deg,
                time_local_dec_hours,
            });
        }
    }

    debug!(
        "Extracted {} coordinate samples from '{}'",
        samples.len(),
        report.display_name()
    );

    samples
}
