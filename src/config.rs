//! Configuration management and validation.
//!
//! Provides configuration structures for processing parameters and parser
//! tolerances, with layered resolution: built-in defaults, then an optional
//! TOML configuration file, then CLI argument overrides applied by the
//! command layer.

use crate::constants::{
    DEFAULT_MAX_REPORT_BYTES, DEFAULT_OUTPUT_DIR, DEFAULT_OVERFLOW_MARGIN,
    DEFAULT_PARALLEL_WORKERS, DEFAULT_REPORT_PATTERN,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for photometric report processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Batch processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Core parser tolerances
    #[serde(default)]
    pub parser: ParserConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Batch processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Input report file or directory
    pub input_path: PathBuf,

    /// Output directory for generated JSON documents
    pub output_path: PathBuf,

    /// Optional satellite catalog CSV for enrichment
    pub satellite_catalog: Option<PathBuf>,

    /// Filename glob applied during directory discovery
    pub report_pattern: String,

    /// Number of reports processed concurrently
    pub workers: usize,

    /// Abort the batch on the first structural failure
    pub fail_fast: bool,

    /// Show what would be processed without writing output
    pub dry_run: bool,

    /// Overwrite existing output documents
    pub force_overwrite: bool,
}

/// Tolerances of the observation file parser
///
/// The parser itself is a pure function; this is the only state it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Over-collection tolerance for fixed-length numeric tables.
    /// Collection stops once `expected * overflow_margin` values have been
    /// gathered. Must be at least 1.0.
    pub overflow_margin: f64,

    /// Maximum accepted report size in bytes
    pub max_report_bytes: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Emit timestamped structured output (disabled in quiet mode)
    pub structured: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_DIR),
            satellite_catalog: None,
            report_pattern: DEFAULT_REPORT_PATTERN.to_string(),
            workers: DEFAULT_PARALLEL_WORKERS,
            fail_fast: false,
            dry_run: false,
            force_overwrite: false,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            overflow_margin: DEFAULT_OVERFLOW_MARGIN,
            max_report_bytes: DEFAULT_MAX_REPORT_BYTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            structured: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig::default(),
            parser: ParserConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ProcessingConfig {
    /// Worker count actually used, bounded by the machine's core count
    pub fn effective_workers(&self) -> usize {
        self.workers.clamp(1, num_cpus::get())
    }
}

impl ParserConfig {
    /// Validate parser tolerances
    pub fn validate(&self) -> Result<()> {
        if self.overflow_margin < 1.0 {
            return Err(Error::configuration(format!(
                "overflow_margin must be at least 1.0, got {}",
                self.overflow_margin
            )));
        }

        if self.max_report_bytes == 0 {
            return Err(Error::configuration(
                "max_report_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load with layered resolution: defaults, then the optional config file.
    /// CLI overrides are applied afterwards by the command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;

        if self.processing.workers == 0 {
            return Err(Error::configuration(
                "number of workers must be greater than 0".to_string(),
            ));
        }

        if self.processing.workers > 100 {
            return Err(Error::configuration(
                "number of workers cannot exceed 100".to_string(),
            ));
        }

        glob::Pattern::new(&self.processing.report_pattern).map_err(|e| {
            Error::configuration(format!(
                "invalid report pattern '{}': {}",
                self.processing.report_pattern, e
            ))
        })?;

        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        let output = &self.processing.output_path;
        if !output.exists() {
            std::fs::create_dir_all(output).map_err(|e| {
                Error::configuration(format!(
                    "failed to create output directory '{}': {}",
                    output.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parser.overflow_margin, DEFAULT_OVERFLOW_MARGIN);
    }

    #[test]
    fn test_overflow_margin_below_one_rejected() {
        let mut config = Config::default();
        config.parser.overflow_margin = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_worker_bounds() {
        let mut config = Config::default();
        config.processing.workers = 0;
        assert!(config.validate().is_err());

        config.processing.workers = 101;
        assert!(config.validate().is_err());

        config.processing.workers = 8;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_report_pattern_rejected() {
        let mut config = Config::default();
        config.processing.report_pattern = "[".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[processing]
input_path = "/data/reports"
output_path = "/data/out"
report_pattern = "*"
workers = 2
fail_fast = true
dry_run = false
force_overwrite = false

[parser]
overflow_margin = 1.5
max_report_bytes = 1048576

[logging]
level = "debug"
structured = true
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.parser.overflow_margin, 1.5);
        assert_eq!(config.processing.workers, 2);
        assert!(config.processing.fail_fast);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_layered_without_file_uses_defaults() {
        let config = Config::load_layered(None).unwrap();
        assert_eq!(config.processing.workers, DEFAULT_PARALLEL_WORKERS);
    }

    #[test]
    fn test_effective_workers_bounded_by_cores() {
        let mut processing = ProcessingConfig::default();

        processing.workers = 1;
        assert_eq!(processing.effective_workers(), 1);

        processing.workers = 10_000;
        assert!(processing.effective_workers() <= num_cpus::get());
        assert!(processing.effective_workers() >= 1);
    }
}
