use serde::Deserialize;
use serde_json::{Map, Value};

/// Calculate request body
///
/// Every calculator field is optional; missing ones come from the configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub include_layout: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Layout request body
#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub length: f64,
    pub width: f64,
    pub fixtures: u32,
}
