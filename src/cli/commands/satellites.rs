//! Satellites command implementation
//!
//! Inspects a satellite catalog file: lists its entries or looks up a
//! single satellite number, in human or JSON form.

use super::shared::{ProcessingStats, setup_satellites_logging};
use crate::app::services::satellite_catalog::{SatelliteCatalog, SatelliteEntry};
use crate::cli::args::{OutputFormat, SatellitesArgs};
use crate::{Error, Result};
use colored::Colorize;
use tracing::info;

/// Satellites command runner
pub async fn run_satellites(args: SatellitesArgs) -> Result<ProcessingStats> {
    setup_satellites_logging(&args)?;
    args.validate()?;

    let catalog = SatelliteCatalog::load(&args.catalog)?;
    info!(
        "Loaded {} entries from {}",
        catalog.len(),
        args.catalog.display()
    );

    match &args.number {
        Some(number) => {
            let entry = catalog.get(number).ok_or_else(|| {
                Error::catalog(format!("no catalog entry for satellite {}", number))
            })?;
            print_entries(&args, &[entry]);
        }
        None => {
            let mut entries: Vec<&SatelliteEntry> = catalog.entries().collect();
            entries.sort_by(|a, b| a.number.cmp(&b.number));
            print_entries(&args, &entries);
        }
    }

    Ok(ProcessingStats::default())
}

fn print_entries(args: &SatellitesArgs, entries: &[&SatelliteEntry]) {
    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "catalog": args.catalog.display().to_string(),
                "entries": entries,
            });
            println!("{}", json);
        }
        OutputFormat::Human => {
            for entry in entries {
                let designator = entry.intl_designator.as_deref().unwrap_or("-");
                println!(
                    "{}  {:24}  {}",
                    entry.number.cyan(),
                    entry.name,
                    designator
                );
            }
            println!();
            println!("{} catalog entries", entries.len());
        }
    }
}
