use luxcalc_core::models::{CalculationResult, CalculatorState, FixtureLayout, LampPlan};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "luxcalc-api" }
    }
}

/// Result of one calculation, with the state that produced it
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub state: CalculatorState,
    pub result: CalculationResult,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<FixtureLayout>,
    /// Present when the server is configured for multi-lamp fixtures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lamp_plan: Option<LampPlan>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    #[serde(flatten)]
    pub layout: FixtureLayout,
    pub empty_cells: usize,
}

/// Share link for a state
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub query: String,
    pub url: String,
}
