//! Command implementations

mod calculate;
mod catalog;
mod config;
mod layout;
mod share;
mod state;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use crate::storage::Workspace;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let workspace = Workspace::new(cli.workspace);

    match cli.command {
        Commands::Calculate(args) => calculate::execute(args, &output, &workspace),
        Commands::Layout(args) => layout::execute(args, &output),
        Commands::Catalog(args) => catalog::execute(args, &output),
        Commands::Share(args) => share::execute(args, &output, &workspace),
        Commands::State(args) => state::execute(args, &output, &workspace),
        Commands::Config(args) => config::execute(args, &output, &workspace),
    }
}
