//! Error types for LuxCalc

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LuxcalcError {
    // Reference table errors
    #[error("Unknown room type: {id}. Expected one of bedroom, living, kitchen, office, bathroom, nursery")]
    UnknownRoomType { id: String },

    #[error("Unknown bulb type: {id}. Expected one of led-warm, led-neutral, led-cold, fluorescent, incandescent")]
    UnknownBulbType { id: String },

    #[error("Unknown surface color: {id}. Expected one of white, light-beige, gray, dark")]
    UnknownSurfaceColor { id: String },

    // Input errors
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid share query parameter '{key}': {reason}")]
    InvalidShareQuery { key: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LuxcalcError {
    fn from(err: serde_json::Error) -> Self {
        LuxcalcError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LuxcalcError>;
