//! LuxCalc CLI - Command-line interface
//!
//! Presentation layer around the lighting engine: owns the calculator state,
//! persists it in the workspace, and renders results.

mod cli;
mod commands;
mod errors;
mod output;
mod output_types;
mod storage;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(error) = commands::execute(cli) {
        eprintln!("{}", errors::from_anyhow(error).report());
        std::process::exit(1);
    }
}
