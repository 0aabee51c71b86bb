//! User-facing failure reports
//!
//! Engine errors are mapped onto a headline, the reason, numbered fixes and a
//! help command. Anything else is reported with its message only.

use console::style;
use luxcalc_core::LuxcalcError;

/// A failure as reported on stderr
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<&'static str>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), context: None, suggestions: Vec::new(), help_command: None }
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn help(mut self, command: &'static str) -> Self {
        self.help_command = Some(command);
        self
    }

    /// Multi-line report, styled when stderr is a terminal
    pub fn report(&self) -> String {
        let mut lines =
            vec![format!("{} {}", style("✗").red().bold(), style(&self.message).red().bold())];

        if let Some(context) = &self.context {
            lines.push(String::new());
            lines.push(context.clone());
        }

        if !self.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(style("To fix this:").yellow().bold().to_string());
            lines.extend(
                self.suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, suggestion)| format!("  {}. {}", i + 1, suggestion)),
            );
        }

        if let Some(command) = self.help_command {
            lines.push(String::new());
            let label = style("Need help? Run:").cyan();
            lines.push(format!("{} {}", label, style(command).cyan().bold()));
        }

        lines.join("\n")
    }
}

/// Create error for an identifier missing from a reference table
pub fn unknown_identifier(kind: &str, id: &str, catalog: &str) -> CliError {
    CliError::new(format!("Unknown {}: {}", kind, id))
        .context(format!("'{}' is not in the {} table.", id, kind))
        .suggest(format!("List valid values: luxcalc catalog {}", catalog))
        .help("luxcalc calculate --help")
}

/// Create error for an input outside the calculator's bounds
pub fn invalid_input(field: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid {}", field))
        .context(format!("The value is outside the accepted range.\n\nReason: {}", reason))
        .suggest("Lengths and widths: 1-20 m")
        .suggest("Ceiling height: 2.2-4 m, work surface height: 0-1.2 m")
        .suggest("Target wattage: 3-100 W")
        .suggest("Layout grids: at most 10000 fixtures")
        .help("luxcalc calculate --help")
}

/// Create error for a share link that could not be decoded
pub fn invalid_share_link(key: &str, reason: &str) -> CliError {
    CliError::new("Invalid share link")
        .context(format!("Parameter '{}' could not be read.\n\nReason: {}", key, reason))
        .suggest("Links look like: http://localhost:5173/?l=4&w=3&rt=living&bt=led-neutral")
        .suggest("Or pass a bare query: l=4&w=3")
        .help("luxcalc state import --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .suggest("Check .luxcalc/config.toml for syntax errors")
        .suggest("Or unset the matching LUXCALC_* environment variable")
        .help("luxcalc config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(err) = error.downcast_ref::<LuxcalcError>() {
        return from_luxcalc(err);
    }

    let message = format!("{:#}", error);

    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .context(format!("Error: {}", message))
            .suggest("Check the --workspace path and try again")
    } else if message.contains("Permission denied") {
        CliError::new("Permission denied")
            .context(format!("Error: {}", message))
            .suggest("Check permissions on the .luxcalc directory")
    } else if message.contains("state.json") {
        CliError::new("Saved state is unreadable")
            .context(format!("Error: {}", message))
            .suggest("Restore defaults: luxcalc state reset")
    } else {
        CliError::new(message)
    }
}

fn from_luxcalc(error: &LuxcalcError) -> CliError {
    match error {
        LuxcalcError::UnknownRoomType { id } => unknown_identifier("room type", id, "rooms"),
        LuxcalcError::UnknownBulbType { id } => unknown_identifier("bulb type", id, "bulbs"),
        LuxcalcError::UnknownSurfaceColor { id } => {
            unknown_identifier("surface color", id, "surfaces")
        }
        LuxcalcError::InvalidInput { field, reason } => invalid_input(field, reason),
        LuxcalcError::InvalidShareQuery { key, reason } => invalid_share_link(key, reason),
        LuxcalcError::ConfigInvalid { key, reason } => invalid_config(key, reason),
        other => CliError::new(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_room_type_suggests_catalog() {
        let error = from_anyhow(anyhow::Error::new(LuxcalcError::UnknownRoomType {
            id: "garage".to_string(),
        }));

        assert_eq!(error.message, "Unknown room type: garage");
        assert!(error.suggestions.iter().any(|s| s.contains("luxcalc catalog rooms")));

        let report = error.report();
        assert!(report.contains("  1. List valid values: luxcalc catalog rooms"));
        assert!(report.contains("luxcalc calculate --help"));
    }

    #[test]
    fn test_invalid_input_keeps_reason() {
        let error = from_anyhow(anyhow::Error::new(LuxcalcError::InvalidInput {
            field: "length".to_string(),
            reason: "25 m is outside 1-20 m".to_string(),
        }));

        assert_eq!(error.message, "Invalid length");
        assert!(error.context.unwrap().contains("25 m"));
    }

    #[test]
    fn test_plain_error_passes_through() {
        let error = from_anyhow(anyhow::anyhow!("something odd"));
        assert_eq!(error.message, "something odd");
        assert!(error.suggestions.is_empty());
        assert!(!error.report().contains("To fix this:"));
    }
}
