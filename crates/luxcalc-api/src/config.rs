use std::env;

use luxcalc_core::config::LayeredConfig;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    /// Calculator defaults and the share base URL
    pub calculator: LayeredConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            cors_origin: "http://localhost:5173".to_string(),
            calculator: LayeredConfig::with_defaults(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port =
            env::var("LUXCALC_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(defaults.port);

        let cors_origin = env::var("LUXCALC_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        Self {
            port,
            cors_origin,
            calculator: defaults.calculator.load_from_env(),
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("LUXCALC_PORT");
        env::remove_var("LUXCALC_CORS_ORIGIN");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 3001);
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.cors_origin, "http://localhost:5173");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("LUXCALC_PORT", "8080");
        env::set_var("LUXCALC_CORS_ORIGIN", "https://lux.example");

        let config = ApiConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "https://lux.example");

        env::remove_var("LUXCALC_PORT");
        env::remove_var("LUXCALC_CORS_ORIGIN");
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        env::set_var("LUXCALC_PORT", "not-a-port");
        assert_eq!(ApiConfig::from_env().port, 3001);
        env::remove_var("LUXCALC_PORT");
    }
}
