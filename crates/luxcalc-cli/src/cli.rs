use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LuxCalc - Room lighting calculator
#[derive(Parser, Debug)]
#[command(name = "luxcalc")]
#[command(about = "Room lighting calculator: fixture counts, wattages and layouts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the .luxcalc state and config (defaults to current directory)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate fixture count and wattage for a room
    Calculate(CalculateArgs),

    /// Compute fixture positions for a room
    Layout(LayoutArgs),

    /// List reference tables
    Catalog(CatalogArgs),

    /// Print a share link for the saved state
    Share(ShareArgs),

    /// Inspect or modify the saved calculator state
    State(StateArgs),

    /// Show effective configuration and where each value comes from
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CalculateArgs {
    /// Room length in meters
    #[arg(long, short = 'l')]
    pub length: Option<f64>,

    /// Room width in meters
    #[arg(long, short = 'w')]
    pub width: Option<f64>,

    /// Ceiling height in meters
    #[arg(long)]
    pub ceiling_height: Option<f64>,

    /// Work surface height in meters
    #[arg(long)]
    pub work_surface_height: Option<f64>,

    /// Room type (bedroom, living, kitchen, office, bathroom, nursery)
    #[arg(long)]
    pub room_type: Option<String>,

    /// Bulb type (led-warm, led-neutral, led-cold, fluorescent, incandescent)
    #[arg(long)]
    pub bulb_type: Option<String>,

    /// Target bulb wattage in watts
    #[arg(long)]
    pub target_wattage: Option<u32>,

    /// Ceiling color (white, light-beige, gray, dark)
    #[arg(long)]
    pub ceiling_color: Option<String>,

    /// Wall color (white, light-beige, gray, dark)
    #[arg(long)]
    pub wall_color: Option<String>,

    /// Floor color (white, light-beige, gray, dark)
    #[arg(long)]
    pub floor_color: Option<String>,

    /// Start from a share link; explicit flags still take precedence
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Ignore the saved state and start from defaults
    #[arg(long)]
    pub fresh: bool,

    /// Also compute fixture positions
    #[arg(long)]
    pub layout: bool,

    /// Persist the resulting state to the workspace
    #[arg(long)]
    pub save: bool,

    /// Show each intermediate step of the calculation
    #[arg(long)]
    pub explain: bool,

    /// Lamps mounted in each fixture (overrides config)
    #[arg(long)]
    pub lamps_per_fixture: Option<u32>,
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Room length in meters
    #[arg(long, short = 'l')]
    pub length: f64,

    /// Room width in meters
    #[arg(long, short = 'w')]
    pub width: f64,

    /// Number of fixtures to place
    #[arg(long, short = 'n')]
    pub fixtures: u32,
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Table to list (lists all if not specified)
    #[arg(value_enum)]
    pub table: Option<CatalogTable>,
}

/// Reference table selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogTable {
    /// Room types and their illuminance norms
    Rooms,
    /// Bulb types and their efficacy
    Bulbs,
    /// Surface colors and reflection coefficients
    Surfaces,
    /// Standard bulb wattages
    Wattages,
}

#[derive(Parser, Debug)]
pub struct ShareArgs {
    /// Base URL for the link (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,
}

#[derive(Parser, Debug)]
pub struct StateArgs {
    #[command(subcommand)]
    pub command: StateCommand,
}

#[derive(Subcommand, Debug)]
pub enum StateCommand {
    /// Show the saved state
    Show,

    /// Restore the default state
    Reset,

    /// Merge a share link into the saved state
    Import(ImportArgs),
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Share link or bare query string (e.g. "l=5&w=4&rt=kitchen")
    pub url: String,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Override the share base URL for this invocation
    #[arg(long)]
    pub share_base_url: Option<String>,
}
