//! Workspace-local persistence of the calculator state and configuration.
//!
//! Layout on disk:
//!
//! ```text
//! <workspace>/.luxcalc/config.toml   optional layered config file
//! <workspace>/.luxcalc/state.json    last saved CalculatorState
//! ```

use anyhow::{Context, Result};
use luxcalc_core::config::LayeredConfig;
use luxcalc_core::models::{CalculatorState, SavedState};
use std::fs;
use std::path::{Path, PathBuf};

const LUXCALC_DIR: &str = ".luxcalc";

pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(LUXCALC_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir().join("config.toml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir().join("state.json")
    }

    /// Layered config: defaults, then config.toml if present, then environment
    pub fn load_config(&self) -> Result<LayeredConfig> {
        let config = LayeredConfig::with_defaults()
            .load_from_optional_file(self.config_path())
            .with_context(|| format!("Failed to load {}", self.config_path().display()))?
            .load_from_env();
        Ok(config)
    }

    /// Load the saved state, if any
    pub fn load_saved(&self) -> Result<Option<SavedState>> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let saved: SavedState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(saved))
    }

    /// Saved state, or the configured defaults when nothing has been saved
    pub fn load_state_or_default(&self, config: &LayeredConfig) -> Result<CalculatorState> {
        match self.load_saved()? {
            Some(saved) => Ok(saved.state),
            None => Ok(config.default_state()),
        }
    }

    pub fn save_state(&self, state: &CalculatorState) -> Result<SavedState> {
        fs::create_dir_all(self.dir())
            .with_context(|| format!("Failed to create {}", self.dir().display()))?;

        let saved = SavedState::now(state.clone());
        let content = serde_json::to_string_pretty(&saved)?;
        write_file(&self.state_path(), &content)?;

        tracing::info!(path = %self.state_path().display(), "Saved calculator state");
        Ok(saved)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
