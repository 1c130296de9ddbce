//! Validate command implementation
//!
//! Parses report files and reports diagnostics without writing any output.
//! Useful for checking an archive before a full processing run.

use super::shared::{ProcessingStats, discover_report_files, setup_validate_logging};
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of validating one report file
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    result: std::result::Result<Vec<String>, String>,
}

/// Validate command runner
pub async fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_validate_logging(&args)?;
    args.validate()?;

    let input = args
        .input_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let files = discover_report_files(&input, &args.report_pattern)?;

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "no report files matching '{}' found in {}",
            args.report_pattern,
            input.display()
        )));
    }

    info!("Validating {} report files", files.len());

    let parser = ReportParser::with_defaults();
    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let result = std::fs::read(&path)
            .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))
            .and_then(|bytes| {
                let filename = path.file_name().and_then(|n| n.to_str());
                parser.parse(&bytes, filename)
            });

        match result {
            Ok(outcome) => {
                stats.files_processed += 1;
                stats.warnings_total += outcome.stats.warnings.len();
                debug!(
                    "{}: ok, {} warnings",
                    path.display(),
                    outcome.stats.warnings.len()
                );
                reports.push(FileReport {
                    path,
                    result: Ok(outcome.stats.warnings),
                });
            }
            Err(e) => {
                stats.files_failed += 1;
                reports.push(FileReport {
                    path,
                    result: Err(e.to_string()),
                });
            }
        }
    }

    stats.processing_time = start_time.elapsed();

    print_report(&args, &stats, &reports);

    Ok(stats)
}

fn print_report(args: &ValidateArgs, stats: &ProcessingStats, reports: &[FileReport]) {
    match args.output_format {
        OutputFormat::Json => {
            let files: Vec<_> = reports
                .iter()
                .map(|report| match &report.result {
                    Ok(warnings) => serde_json::json!({
                        "file": report.path.display().to_string(),
                        "valid": true,
                        "warnings": warnings,
                    }),
                    Err(error) => serde_json::json!({
                        "file": report.path.display().to_string(),
                        "valid": false,
                        "error": error,
                    }),
                })
                .collect();

            let summary = serde_json::json!({
                "files_discovered": stats.files_discovered,
                "files_valid": stats.files_processed,
                "files_invalid": stats.files_failed,
                "warnings_total": stats.warnings_total,
                "files": files,
            });
            println!("{}", summary);
        }
        OutputFormat::Human => {
            for report in reports {
                match &report.result {
                    Ok(warnings) if warnings.is_empty() => {
                        println!("{} {}", "ok  ".green(), report.path.display());
                    }
                    Ok(warnings) => {
                        println!(
                            "{} {} ({} warnings)",
                            "warn".yellow(),
                            report.path.display(),
                            warnings.len()
                        );
                        if args.detailed {
                            for warning in warnings {
                                println!("       {}", warning);
                            }
                        }
                    }
                    Err(error) => {
                        println!("{} {}: {}", "FAIL".red().bold(), report.path.display(), error);
                    }
                }
            }

            println!();
            println!(
                "{} valid, {} invalid, {} warnings across {} files",
                stats.files_processed,
                stats.files_failed,
                stats.warnings_total,
                stats.files_discovered
            );
        }
    }
}
