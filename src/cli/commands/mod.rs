//! Command implementations for the photometry processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod process;
pub mod satellites;
pub mod shared;
pub mod validate;

pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: batch parsing with JSON record output
/// - `validate`: parse-only diagnostics, no output files
/// - `satellites`: catalog inspection
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Satellites(satellites_args) => satellites::run_satellites(satellites_args).await,
    }
}
