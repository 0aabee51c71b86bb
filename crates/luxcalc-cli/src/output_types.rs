use chrono::{DateTime, Utc};
use luxcalc_core::config::ConfigSource;
use luxcalc_core::models::{CalculationResult, CalculatorState, FixtureLayout, LampPlan};
use luxcalc_core::tables::{BulbTypeEntry, RoomTypeEntry, SurfaceColorEntry};
use serde::Serialize;
use tabled::Tabled;

/// Output for calculate command
#[derive(Debug, Serialize)]
pub struct CalculateOutput {
    pub state: CalculatorState,
    pub result: CalculationResult,
    pub recommendation: String,
    pub layout: Option<FixtureLayout>,
    pub steps: Option<Vec<ExplainStep>>,
    pub lamp_plan: Option<LampPlan>,
    pub saved: bool,
}

/// One intermediate value of the pipeline
#[derive(Debug, Serialize, Tabled)]
pub struct ExplainStep {
    #[tabled(rename = "Step")]
    pub step: String,
    #[tabled(rename = "Formula")]
    pub formula: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Output for layout command
#[derive(Debug, Serialize)]
pub struct LayoutOutput {
    pub length: f64,
    pub width: f64,
    pub layout: FixtureLayout,
    pub empty_cells: usize,
}

#[derive(Debug, Tabled)]
pub struct PositionRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Row")]
    pub row: u32,
    #[tabled(rename = "Col")]
    pub col: u32,
    #[tabled(rename = "X (m)")]
    pub x: String,
    #[tabled(rename = "Y (m)")]
    pub y: String,
}

impl PositionRow {
    pub fn from_layout(layout: &FixtureLayout) -> Vec<Self> {
        let cols = layout.cols.max(1) as usize;
        layout
            .positions
            .iter()
            .enumerate()
            .map(|(i, position)| Self {
                index: i + 1,
                row: (i / cols) as u32 + 1,
                col: (i % cols) as u32 + 1,
                x: format!("{:.2}", position.x),
                y: format!("{:.2}", position.y),
            })
            .collect()
    }
}

/// Output for catalog command
#[derive(Debug, Serialize, Default)]
pub struct CatalogOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_types: Option<Vec<RoomTypeEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulb_types: Option<Vec<BulbTypeEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_colors: Option<Vec<SurfaceColorEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_wattages: Option<Vec<u32>>,
}

#[derive(Debug, Tabled)]
pub struct RoomRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Lux")]
    pub lux: u32,
    #[tabled(rename = "Color Temp")]
    pub color_temp: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl From<&RoomTypeEntry> for RoomRow {
    fn from(entry: &RoomTypeEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            lux: entry.lux,
            color_temp: format!("{} K", entry.color_temp),
            description: entry.description.to_string(),
        }
    }
}

#[derive(Debug, Tabled)]
pub struct BulbRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "lm/W")]
    pub lumens_per_watt: u32,
    #[tabled(rename = "Color Temp")]
    pub color_temp: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

impl From<&BulbTypeEntry> for BulbRow {
    fn from(entry: &BulbTypeEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            lumens_per_watt: entry.lumens_per_watt,
            color_temp: format!("{} K", entry.color_temp),
            description: entry.description.to_string(),
        }
    }
}

#[derive(Debug, Tabled)]
pub struct SurfaceRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Reflection")]
    pub reflection: f64,
    #[tabled(rename = "Color")]
    pub color: String,
}

impl From<&SurfaceColorEntry> for SurfaceRow {
    fn from(entry: &SurfaceColorEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            reflection: entry.reflection_coefficient,
            color: entry.color.to_string(),
        }
    }
}

/// Output for share command
#[derive(Debug, Serialize)]
pub struct ShareOutput {
    pub query: String,
    pub url: String,
}

/// Output for state show / reset / import
#[derive(Debug, Serialize)]
pub struct StateOutput {
    pub state: CalculatorState,
    /// `None` when no state has been saved yet
    pub saved_at: Option<DateTime<Utc>>,
    pub path: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::File => "config file",
        ConfigSource::Environment => "environment",
        ConfigSource::Cli => "command line",
    }
    .to_string()
}
