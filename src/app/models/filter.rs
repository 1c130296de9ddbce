//! Per-filter photometric block and its sub-records.

use serde::{Deserialize, Serialize};

/// Experiment parameters of one filter, seeded from the parameter table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperimentParams {
    /// Exposure start time in decimal hours
    pub exposure_start: f64,

    /// Exposure interval in minutes
    pub interval_min: f64,

    /// Sampling step in seconds
    pub step_sec: f64,

    /// Background signal accumulated over 30 seconds
    pub background_30_sec: f64,

    /// Expected number of samples in each data series
    pub sample_count: usize,
}

/// An instrumental magnitude reduced by averaging over a sub-interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragedMagnitude {
    /// Row index within the averaged table
    pub index: u32,

    /// Local time in decimal hours
    pub time_local_dec_hours: f64,

    /// Averaged magnitude value
    pub magnitude: f64,

    /// Auxiliary zenith angle, when the row carries a fourth column
    pub zenith_deg: Option<f64>,

    /// Auxiliary azimuth angle, when the row carries a fifth column
    pub azimuth_deg: Option<f64>,
}

/// A ranked frequency-domain amplitude peak of a filter's time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralPeak {
    /// Peak rank, 1 being the strongest
    pub rank: u32,

    /// Peak amplitude
    pub amplitude: f64,

    /// Sample index the peak was located at
    pub index: u32,

    /// Amplitude percentile
    pub percentile: f64,

    /// Corresponding period in seconds
    pub period_sec: f64,
}

/// Summary statistics of one filter block.
///
/// The source schema labels nine fields with angular/temporal quantity
/// names while the legacy persistence layer mapped several of them onto
/// magnitude min/max/mean columns. Both groups are kept here as distinct,
/// honestly-named fields; nothing maps one onto the other. The magnitude
/// aggregates are derived from the instrumental-magnitude series, the
/// angular fields keep whatever the report declared (zero when absent).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Right ascension (alpha) in degrees
    pub alpha_deg: f64,

    /// Zenith angle in degrees
    pub zenith_deg: f64,

    /// Declination (delta) in degrees
    pub delta_deg: f64,

    /// Azimuth in degrees
    pub azimuth_deg: f64,

    /// Hour angle in degrees
    pub hour_angle_deg: f64,

    /// Phase angle in degrees
    pub phase_angle_deg: f64,

    /// Discrete time marker
    pub discrete_time: f64,

    /// Sidereal time in decimal hours
    pub sidereal_time: f64,

    /// Instrumental star magnitude of the calibration target
    pub instrumental_star_magnitude: f64,

    /// Minimum of the filter's instrumental-magnitude series
    pub magnitude_min: f64,

    /// Maximum of the filter's instrumental-magnitude series
    pub magnitude_max: f64,

    /// Mean of the filter's instrumental-magnitude series
    pub magnitude_mean: f64,
}

impl SummaryStats {
    /// Derive the magnitude aggregates from an instrumental-magnitude
    /// series; an empty series leaves them at zero.
    pub fn with_magnitudes(magnitudes: &[f64]) -> Self {
        let mut stats = Self::default();
        if magnitudes.is_empty() {
            return stats;
        }

        stats.magnitude_min = magnitudes.iter().cloned().fold(f64::INFINITY, f64::min);
        stats.magnitude_max = magnitudes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        stats.magnitude_mean = magnitudes.iter().sum::<f64>() / magnitudes.len() as f64;
        stats
    }
}

/// One per-filter photometric block of a report
///
/// Calibration scalars are seeded from the etalon table, experiment
/// parameters from the parameter table; every field defaults to a neutral
/// value (zero, empty array) when no matching table entry exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterBlock {
    /// Passband code, e.g. "B", "V", "R"
    pub code: String,

    /// Calibration star magnitude
    pub star_magnitude: f64,

    /// First extinction coefficient
    pub a_ext: f64,

    /// Second extinction coefficient
    pub b_ext: f64,

    /// Combined extinction
    pub extinction: f64,

    /// Calibration uncertainty
    pub sigma: f64,

    /// Experiment parameters
    pub experiment: ExperimentParams,

    /// Raw signal samples, background subtracted
    pub raw_signals: Vec<f64>,

    /// Instrumental magnitude samples
    pub instrumental_magnitudes: Vec<f64>,

    /// Averaged magnitude rows
    pub averaged_magnitudes: Vec<AveragedMagnitude>,

    /// Ranked spectral peaks
    pub spectral_peaks: Vec<SpectralPeak>,

    /// Summary statistics
    pub summary_stats: SummaryStats,
}

impl FilterBlock {
    /// Create an empty block for the given passband code with every field
    /// at its neutral default.
    pub fn empty(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            star_magnitude: 0.0,
            a_ext: 0.0,
            b_ext: 0.0,
            extinction: 0.0,
            sigma: 0.0,
            experiment: ExperimentParams::default(),
            raw_signals: Vec::new(),
            instrumental_magnitudes: Vec::new(),
            averaged_magnitudes: Vec::new(),
            spectral_peaks: Vec::new(),
            summary_stats: SummaryStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stats_from_magnitudes() {
        let stats = SummaryStats::with_magnitudes(&[12.5, 11.0, 13.0, 12.0]);
        assert_eq!(stats.magnitude_min, 11.0);
        assert_eq!(stats.magnitude_max, 13.0);
        assert!((stats.magnitude_mean - 12.125).abs() < 1e-12);
        // Angular fields stay untouched
        assert_eq!(stats.alpha_deg, 0.0);
        assert_eq!(stats.sidereal_time, 0.0);
    }

    #[test]
    fn test_summary_stats_empty_series_stays_zero() {
        let stats = SummaryStats::with_magnitudes(&[]);
        assert_eq!(stats, SummaryStats::default());
    }

    #[test]
    fn test_empty_filter_block_defaults() {
        let block = FilterBlock::empty("V");
        assert_eq!(block.code, "V");
        assert_eq!(block.star_magnitude, 0.0);
        assert!(block.raw_signals.is_empty());
        assert!(block.spectral_peaks.is_empty());
        assert_eq!(block.experiment.sample_count, 0);
    }
}
