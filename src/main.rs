use clap::Parser;
use photometry_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(photometry_processor::Error::interrupted(
                    "Processing interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Photometry Processor - Legacy Ground-Station Report Converter");
    println!("=============================================================");
    println!();
    println!("Convert CP866-encoded photometric observation reports produced by");
    println!("legacy ground-station software into structured JSON records.");
    println!();
    println!("USAGE:");
    println!("    photometry-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process       Process report files into JSON records (main command)");
    println!("    validate      Parse report files and print diagnostics without output");
    println!("    satellites    Inspect a satellite catalog file");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process a directory of reports into ./output:");
    println!("    photometry-processor process --input /data/reports");
    println!();
    println!("    # Process with catalog enrichment and eight workers:");
    println!("    photometry-processor process --input /data/reports \\");
    println!("                                 --satellite-catalog satellites.csv -j 8");
    println!();
    println!("    # Check an archive without writing anything:");
    println!("    photometry-processor validate --input /data/reports --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    photometry-processor <COMMAND> --help");
}
