//! Process command implementation
//!
//! This module contains the complete report processing workflow:
//! configuration loading, file discovery, parallel parsing, catalog
//! enrichment, JSON output and summary reporting.

use super::shared::{
    ProcessingStats, create_progress_bar, discover_report_files, is_critical_error,
    load_configuration, prepare_directories, setup_logging,
};
use crate::app::services::report_parser::{ParseOutcome, ReportParser};
use crate::app::services::satellite_catalog::SatelliteCatalog;
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::HumanDuration;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Process command runner
///
/// Orchestrates the full batch workflow:
/// 1. Set up logging and configuration
/// 2. Discover report files and load the satellite catalog
/// 3. Parse reports in parallel with progress reporting
/// 4. Write one JSON document per observation, skipping duplicate keys
/// 5. Generate summary statistics
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting photometry processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let files = discover_report_files(
        &config.processing.input_path,
        &config.processing.report_pattern,
    )?;

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "no report files matching '{}' found in {}",
            config.processing.report_pattern,
            config.processing.input_path.display()
        )));
    }

    info!("Discovered {} report files", files.len());

    if config.processing.dry_run {
        return run_dry_run(&config, &files);
    }

    prepare_directories(&config)?;

    let catalog = load_catalog(&config)?;

    let mut stats = process_reports(&config, &catalog, files, args.show_progress()).await?;
    stats.processing_time = start_time.elapsed();

    generate_final_report(&args, &stats);

    Ok(stats)
}

/// Perform a dry run showing what would be processed
fn run_dry_run(config: &Config, files: &[PathBuf]) -> Result<ProcessingStats> {
    info!("Performing dry run - no files will be created");

    for file in files {
        info!("Would process: {}", file.display());
    }

    info!(
        "Dry run complete: {} reports would be written to {}",
        files.len(),
        config.processing.output_path.display()
    );

    Ok(ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    })
}

/// Load the satellite catalog when one is configured
fn load_catalog(config: &Config) -> Result<SatelliteCatalog> {
    match &config.processing.satellite_catalog {
        Some(path) => {
            let catalog = SatelliteCatalog::load(path)?;
            info!(
                "Loaded {} satellite catalog entries from {}",
                catalog.len(),
                path.display()
            );
            Ok(catalog)
        }
        None => {
            debug!("No satellite catalog configured");
            Ok(SatelliteCatalog::empty())
        }
    }
}

/// Parse all reports with a bounded worker pool and write their records
async fn process_reports(
    config: &Config,
    catalog: &SatelliteCatalog,
    files: Vec<PathBuf>,
    show_progress: bool,
) -> Result<ProcessingStats> {
    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    let progress = show_progress.then(|| create_progress_bar(files.len() as u64, "Parsing"));
    let parser = Arc::new(ReportParser::new(config.parser.clone()));

    // Parsing is CPU-bound, so each report runs on a blocking thread and
    // the stream bounds how many are in flight at once.
    let mut results = stream::iter(files)
        .map(|path| {
            let parser = Arc::clone(&parser);
            tokio::task::spawn_blocking(move || (parse_one(&parser, &path), path))
        })
        .buffer_unordered(config.processing.effective_workers());

    let mut seen_keys: HashSet<String> = HashSet::new();

    while let Some(joined) = results.next().await {
        let (result, path) = joined
            .map_err(|e| Error::interrupted(format!("worker task failed: {}", e)))?;

        if let Some(pb) = &progress {
            pb.inc(1);
        }

        let mut outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Failed to parse {}: {}", path.display(), e);
                stats.files_failed += 1;

                if config.processing.fail_fast || is_critical_error(&e) {
                    return Err(e);
                }
                continue;
            }
        };

        stats.warnings_total += outcome.stats.warnings.len();

        if catalog.enrich(&mut outcome.observation) {
            stats.satellites_enriched += 1;
        }

        let key = outcome.observation.unique_key();
        if !seen_keys.insert(key.clone()) {
            warn!(
                "Skipping {}: duplicate observation key {}",
                path.display(),
                key
            );
            stats.duplicates_skipped += 1;
            continue;
        }

        match write_record(config, &key, &outcome) {
            Ok((name, size)) => {
                stats.files_processed += 1;
                stats.output_sizes.push((name, size));
            }
            Err(e) => {
                error!("Failed to write record for {}: {}", path.display(), e);
                stats.files_failed += 1;

                if config.processing.fail_fast || is_critical_error(&e) {
                    return Err(e);
                }
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    Ok(stats)
}

/// Read and parse one report file
fn parse_one(parser: &ReportParser, path: &Path) -> Result<ParseOutcome> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))?;

    let filename = path.file_name().and_then(|n| n.to_str());
    parser.parse(&bytes, filename)
}

/// Write one observation as a pretty-printed JSON document keyed by its
/// unique observation key.
fn write_record(config: &Config, key: &str, outcome: &ParseOutcome) -> Result<(String, u64)> {
    let name = format!("{}.json", key);
    let target = config.processing.output_path.join(&name);

    if target.exists() && !config.processing.force_overwrite {
        return Err(Error::data_validation(format!(
            "output file already exists (use --force to overwrite): {}",
            target.display()
        )));
    }

    let json = serde_json::to_vec_pretty(&outcome.observation)
        .map_err(|e| Error::json(format!("failed to serialize record '{}'", key), e))?;

    std::fs::write(&target, &json)
        .map_err(|e| Error::io(format!("failed to write '{}'", target.display()), e))?;

    debug!("Wrote {} ({} bytes)", target.display(), json.len());
    Ok((name, json.len() as u64))
}

/// Print the end-of-run summary in the requested format
fn generate_final_report(args: &ProcessArgs, stats: &ProcessingStats) {
    match args.output_format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "files_discovered": stats.files_discovered,
                "files_processed": stats.files_processed,
                "files_failed": stats.files_failed,
                "duplicates_skipped": stats.duplicates_skipped,
                "satellites_enriched": stats.satellites_enriched,
                "warnings_total": stats.warnings_total,
                "total_output_bytes": stats.total_output_size(),
                "processing_time_secs": stats.processing_time.as_secs_f64(),
            });
            println!("{}", summary);
        }
        OutputFormat::Human => {
            if args.quiet {
                return;
            }

            println!();
            println!("{}", "Processing complete".green().bold());
            println!("  Reports discovered: {}", stats.files_discovered);
            println!("  Records written:    {}", stats.files_processed);
            if stats.files_failed > 0 {
                println!(
                    "  Failed reports:     {}",
                    stats.files_failed.to_string().red()
                );
            }
            if stats.duplicates_skipped > 0 {
                println!(
                    "  Duplicates skipped: {}",
                    stats.duplicates_skipped.to_string().yellow()
                );
            }
            println!("  Catalog matches:    {}", stats.satellites_enriched);
            println!("  Parse warnings:     {}", stats.warnings_total);
            println!(
                "  Output size:        {}",
                ProcessingStats::format_size(stats.total_output_size())
            );
            println!(
                "  Elapsed:            {}",
                HumanDuration(stats.processing_time)
            );
        }
    }
}
