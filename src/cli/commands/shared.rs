//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::{ProcessArgs, SatellitesArgs, ValidateArgs};
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of report files discovered
    pub files_discovered: usize,
    /// Number of reports parsed successfully
    pub files_processed: usize,
    /// Number of reports that failed to parse
    pub files_failed: usize,
    /// Number of reports skipped as duplicates of an already-seen key
    pub duplicates_skipped: usize,
    /// Number of observations enriched from the satellite catalog
    pub satellites_enriched: usize,
    /// Total parse warnings across all reports
    pub warnings_total: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for process command
pub fn setup_logging(args: &ProcessArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("photometry_processor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for validate command
pub fn setup_validate_logging(args: &ValidateArgs) -> Result<()> {
    init_plain_logging(args.get_log_level())
}

/// Set up structured logging for satellites command
pub fn setup_satellites_logging(args: &SatellitesArgs) -> Result<()> {
    init_plain_logging(args.get_log_level())
}

fn init_plain_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("photometry_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = args.config_file.as_deref();
    if let Some(path) = config_file {
        info!("Using config file: {}", path.display());
    } else {
        info!("No config file specified, using defaults");
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.processing.output_path = output_path.clone();
    }
    if let Some(catalog) = &args.satellite_catalog {
        config.processing.satellite_catalog = Some(catalog.clone());
    }

    config.processing.report_pattern = args.report_pattern.clone();
    config.processing.workers = args.workers;
    config.processing.fail_fast = args.fail_fast;
    config.processing.dry_run = args.dry_run;
    config.processing.force_overwrite = args.force_overwrite;

    config.parser.overflow_margin = args.overflow_margin;

    config.logging.level = args.get_log_level().to_string();
    config.logging.structured = !args.quiet;
}

/// Validate and prepare output directories
pub fn prepare_directories(config: &Config) -> Result<()> {
    config.ensure_output_directory()?;

    info!(
        "Output directory prepared: {}",
        config.processing.output_path.display()
    );
    Ok(())
}

/// Discover report files under an input path
///
/// A single-file input is returned as-is regardless of the pattern. A
/// directory is walked recursively and the glob pattern is matched against
/// file names, not full paths. Results are sorted for a stable batch order.
pub fn discover_report_files(input: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let matcher = glob::Pattern::new(pattern).map_err(|e| {
        Error::configuration(format!("invalid report pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(input).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| matcher.matches(name));

        if matches {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();

    debug!(
        "Discovered {} report files in {}",
        files.len(),
        input.display()
    );

    Ok(files)
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::Interrupted { .. }
    )
}

/// Create a progress bar for batch processing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
