use luxcalc_core::models::CalculatorState;

use crate::config::ApiConfig;

/// Read-only state shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn share_base_url(&self) -> &str {
        &self.config.calculator.share_base_url.value
    }

    /// State that request bodies and share links are laid over
    pub fn default_state(&self) -> CalculatorState {
        self.config.calculator.default_state()
    }

    pub fn lamps_per_fixture(&self) -> u32 {
        self.config.calculator.lamps_per_fixture.value
    }
}
