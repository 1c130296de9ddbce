//! Command-line argument definitions for the photometry processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::constants::{DEFAULT_OVERFLOW_MARGIN, DEFAULT_PARALLEL_WORKERS, DEFAULT_REPORT_PATTERN};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the photometry report processor
///
/// Converts legacy ground-station photometric observation reports from
/// their CP866-encoded text format into structured JSON records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "photometry-processor",
    version,
    about = "Convert legacy CP866 ground-station photometric reports to structured JSON",
    long_about = "Processes photometric observation reports produced by legacy ground-station \
                  acquisition software. Reports are CP866-encoded text mixing labeled fields with \
                  tabular numeric blocks; the processor decodes them, extracts station, date, \
                  coordinate and per-filter data, optionally enriches records from a satellite \
                  catalog, and writes one JSON document per report."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the photometry processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process report files into JSON records (default command)
    Process(ProcessArgs),
    /// Parse report files and print diagnostics without writing output
    Validate(ValidateArgs),
    /// Inspect a satellite catalog file
    Satellites(SatellitesArgs),
}

/// Arguments for the process command (main report processing)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path containing report files
    ///
    /// A directory is walked recursively; a single file is processed alone.
    /// If not specified, defaults to the current directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input file or directory of report files"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for generated JSON records
    ///
    /// Will be created if it doesn't exist. One .json file is written per
    /// successfully parsed report. If not specified, defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for generated JSON records"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to a satellite catalog CSV file
    ///
    /// When given, parsed observations whose filename carries a satellite
    /// number are enriched with the catalog name and designator.
    #[arg(
        long = "satellite-catalog",
        value_name = "FILE",
        help = "Satellite catalog CSV file for record enrichment"
    )]
    pub satellite_catalog: Option<PathBuf>,

    /// Glob pattern selecting report files inside the input directory
    ///
    /// Matched against file names, not full paths.
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "GLOB",
        default_value = DEFAULT_REPORT_PATTERN,
        help = "Glob pattern for report file names"
    )]
    pub report_pattern: String,

    /// Over-collection margin for fixed-length numeric tables
    ///
    /// Damaged tables may run long; collection stops once expected * margin
    /// values were gathered and the result is truncated to the expected
    /// count. Must be at least 1.0.
    #[arg(
        long = "overflow-margin",
        value_name = "FACTOR",
        default_value_t = DEFAULT_OVERFLOW_MARGIN,
        help = "Over-collection margin for numeric table recovery"
    )]
    pub overflow_margin: f64,

    /// Stop the batch at the first failed report
    ///
    /// By default failed reports are recorded and the batch continues.
    #[arg(long = "fail-fast", help = "Stop at the first failed report")]
    pub fail_fast: bool,

    /// Perform a dry run without actual processing
    ///
    /// Shows what would be processed without creating any output files.
    #[arg(
        long = "dry-run",
        help = "Show what would be processed without creating output files"
    )]
    pub dry_run: bool,

    /// Force overwrite of existing output files
    ///
    /// By default, the processor will not overwrite existing JSON files.
    #[arg(long = "force", help = "Force overwrite of existing output files")]
    pub force_overwrite: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for advanced settings.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of parallel workers
    ///
    /// Controls how many reports are parsed concurrently.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_PARALLEL_WORKERS,
        help = "Number of parallel workers for processing"
    )]
    pub workers: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command (parse without writing)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input path containing report files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input file or directory of report files"
    )]
    pub input_path: Option<PathBuf>,

    /// Glob pattern selecting report files inside the input directory
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "GLOB",
        default_value = DEFAULT_REPORT_PATTERN,
        help = "Glob pattern for report file names"
    )]
    pub report_pattern: String,

    /// Show per-report warnings in addition to the summary
    #[arg(long = "detailed", help = "Show per-report warnings")]
    pub detailed: bool,

    /// Output format for validation results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for validation results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the satellites command (catalog inspection)
#[derive(Debug, Clone, Parser)]
pub struct SatellitesArgs {
    /// Path to the satellite catalog CSV file
    #[arg(value_name = "CATALOG", help = "Satellite catalog CSV file")]
    pub catalog: PathBuf,

    /// Look up a single satellite number instead of listing the catalog
    #[arg(
        short = 'n',
        long = "number",
        value_name = "NUMBER",
        help = "Look up one satellite number"
    )]
    pub number: Option<String>,

    /// Output format for the catalog listing
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the catalog listing"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }

        if self.workers > 100 {
            return Err(Error::configuration(
                "Number of workers cannot exceed 100".to_string(),
            ));
        }

        if self.overflow_margin < 1.0 {
            return Err(Error::configuration(
                "Overflow margin must be at least 1.0".to_string(),
            ));
        }

        if let Some(catalog) = &self.satellite_catalog {
            if !catalog.exists() {
                return Err(Error::configuration(format!(
                    "Satellite catalog does not exist: {}",
                    catalog.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        glob::Pattern::new(&self.report_pattern).map_err(|e| {
            Error::configuration(format!(
                "Invalid report pattern '{}': {}",
                self.report_pattern, e
            ))
        })?;

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        glob::Pattern::new(&self.report_pattern).map_err(|e| {
            Error::configuration(format!(
                "Invalid report pattern '{}': {}",
                self.report_pattern, e
            ))
        })?;

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl SatellitesArgs {
    /// Validate the satellites command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.catalog.exists() {
            return Err(Error::configuration(format!(
                "Satellite catalog does not exist: {}",
                self.catalog.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            satellite_catalog: None,
            report_pattern: DEFAULT_REPORT_PATTERN.to_string(),
            overflow_margin: DEFAULT_OVERFLOW_MARGIN,
            fail_fast: false,
            dry_run: false,
            force_overwrite: false,
            config_file: None,
            workers: DEFAULT_PARALLEL_WORKERS,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}
