//! tufdiff CLI
//!
//! Command-line interface for inspecting and comparing TUF root metadata
//! versions from a local metadata directory.

use clap::{Parser, Subcommand};
use tufdiff_core::logging_facility::{init, Profile};

mod commands;
mod history;

#[derive(Debug, Parser)]
#[command(name = "tufdiff")]
#[command(about = "tufdiff - TUF root-of-trust metadata comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List available root versions
    Versions(commands::versions::VersionsArgs),
    /// Show the key and role layout of one root version
    Inspect(commands::inspect::InspectArgs),
    /// Compare two root versions
    Diff(commands::diff::DiffArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Versions(args) => commands::versions::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
