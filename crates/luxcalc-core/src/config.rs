use crate::error::{LuxcalcError, Result};
use crate::models::CalculatorState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for LuxCalc
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Default work plane height for new calculations (m)
    pub work_surface_height: ConfigValue<f64>,
    /// Default target bulb wattage (W)
    pub target_wattage: ConfigValue<u32>,
    /// Lamps mounted in each fixture
    pub lamps_per_fixture: ConfigValue<u32>,
    /// Base URL that share links point at
    pub share_base_url: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            work_surface_height: ConfigValue::new(0.8, ConfigSource::Default),
            target_wattage: ConfigValue::new(10, ConfigSource::Default),
            lamps_per_fixture: ConfigValue::new(1, ConfigSource::Default),
            share_base_url: ConfigValue::new(
                "http://localhost:5173/".to_string(),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| LuxcalcError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| LuxcalcError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(height) = file_config.work_surface_height {
            self.work_surface_height.update(parse_work_surface_height(height)?, ConfigSource::File);
        }

        if let Some(wattage) = file_config.target_wattage {
            self.target_wattage.update(parse_target_wattage(wattage)?, ConfigSource::File);
        }

        if let Some(lamps) = file_config.lamps_per_fixture {
            self.lamps_per_fixture.update(parse_lamps_per_fixture(lamps)?, ConfigSource::File);
        }

        if let Some(url) = file_config.share_base_url {
            self.share_base_url.update(url, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from a file if it exists, otherwise keep the current values
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // LUXCALC_WORK_SURFACE_HEIGHT
        if let Ok(height_str) = env::var("LUXCALC_WORK_SURFACE_HEIGHT") {
            match height_str.parse::<f64>().ok().and_then(|h| parse_work_surface_height(h).ok()) {
                Some(height) => self.work_surface_height.update(height, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid LUXCALC_WORK_SURFACE_HEIGHT value '{}': expected meters between 0 and 1.2",
                    height_str
                ),
            }
        }

        // LUXCALC_TARGET_WATTAGE
        if let Ok(wattage_str) = env::var("LUXCALC_TARGET_WATTAGE") {
            match wattage_str.parse::<u32>().ok().and_then(|w| parse_target_wattage(w).ok()) {
                Some(wattage) => self.target_wattage.update(wattage, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid LUXCALC_TARGET_WATTAGE value '{}': expected watts between 3 and 100",
                    wattage_str
                ),
            }
        }

        // LUXCALC_LAMPS_PER_FIXTURE
        if let Ok(lamps_str) = env::var("LUXCALC_LAMPS_PER_FIXTURE") {
            match lamps_str.parse::<u32>().ok().and_then(|l| parse_lamps_per_fixture(l).ok()) {
                Some(lamps) => self.lamps_per_fixture.update(lamps, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid LUXCALC_LAMPS_PER_FIXTURE value '{}': expected a positive integer",
                    lamps_str
                ),
            }
        }

        // LUXCALC_SHARE_BASE_URL
        if let Ok(url) = env::var("LUXCALC_SHARE_BASE_URL") {
            self.share_base_url.update(url, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(height) = overrides.work_surface_height {
            self.work_surface_height.update(height, ConfigSource::Cli);
        }

        if let Some(wattage) = overrides.target_wattage {
            self.target_wattage.update(wattage, ConfigSource::Cli);
        }

        if let Some(lamps) = overrides.lamps_per_fixture {
            self.lamps_per_fixture.update(lamps, ConfigSource::Cli);
        }

        if let Some(url) = overrides.share_base_url {
            self.share_base_url.update(url, ConfigSource::Cli);
        }
    }

    /// Calculator defaults with the configured work surface height and target wattage
    pub fn default_state(&self) -> CalculatorState {
        CalculatorState {
            work_surface_height: self.work_surface_height.value,
            target_wattage: self.target_wattage.value,
            ..Default::default()
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "work_surface_height".to_string(),
            (format!("{} m", self.work_surface_height.value), self.work_surface_height.source),
        );

        map.insert(
            "target_wattage".to_string(),
            (format!("{} W", self.target_wattage.value), self.target_wattage.source),
        );

        map.insert(
            "lamps_per_fixture".to_string(),
            (self.lamps_per_fixture.value.to_string(), self.lamps_per_fixture.source),
        );

        map.insert(
            "share_base_url".to_string(),
            (self.share_base_url.value.clone(), self.share_base_url.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    work_surface_height: Option<f64>,
    target_wattage: Option<u32>,
    lamps_per_fixture: Option<u32>,
    share_base_url: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub work_surface_height: Option<f64>,
    pub target_wattage: Option<u32>,
    pub lamps_per_fixture: Option<u32>,
    pub share_base_url: Option<String>,
}

/// Validate a work plane height (m)
pub fn parse_work_surface_height(height: f64) -> Result<f64> {
    if height.is_finite() && (0.0..=1.2).contains(&height) {
        Ok(height)
    } else {
        Err(LuxcalcError::ConfigInvalid {
            key: "work_surface_height".to_string(),
            reason: format!("{} is outside 0-1.2 m", height),
        })
    }
}

/// Validate a target bulb wattage (W)
pub fn parse_target_wattage(wattage: u32) -> Result<u32> {
    if (3..=100).contains(&wattage) {
        Ok(wattage)
    } else {
        Err(LuxcalcError::ConfigInvalid {
            key: "target_wattage".to_string(),
            reason: format!("{} is outside 3-100 W", wattage),
        })
    }
}

/// Validate a lamps-per-fixture count
pub fn parse_lamps_per_fixture(lamps: u32) -> Result<u32> {
    if lamps > 0 {
        Ok(lamps)
    } else {
        Err(LuxcalcError::ConfigInvalid {
            key: "lamps_per_fixture".to_string(),
            reason: "must be at least 1".to_string(),
        })
    }
}
