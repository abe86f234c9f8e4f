//! Configuration management
//!
//! Loads `preclear.yaml`, applies `PRECLEAR_*` environment overrides and
//! validates the result before anything starts.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PreclearError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/preclear.yaml";

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "PRECLEAR_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "PRECLEAR_PORT";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "PRECLEAR_LOG_LEVEL";
/// Environment variable overriding `logging.format`
pub const ENV_LOG_FORMAT: &str = "PRECLEAR_LOG_FORMAT";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PreclearError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| PreclearError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, fall back to defaults otherwise, then
    /// apply environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PRECLEAR_*` overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.app.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.app.server.port = port.trim().parse().map_err(|e| {
                PreclearError::Config(format!("Invalid {} '{}': {}", ENV_PORT, port, e))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.app.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.app.logging.format = format
                .parse()
                .map_err(|e| PreclearError::Config(format!("Invalid {}: {}", ENV_LOG_FORMAT, e)))?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Get fee schedule overrides
    pub fn pricing(&self) -> &PricingConfig {
        &self.app.pricing
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.app
            .server
            .validate()
            .map_err(|e| PreclearError::Config(format!("Server config error: {}", e)))?;

        self.app
            .logging
            .validate()
            .map_err(|e| PreclearError::Config(format!("Logging config error: {}", e)))?;

        self.app
            .pricing
            .validate()
            .map_err(|e| PreclearError::Config(format!("Pricing config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.app = self.app.merge(other.app);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| PreclearError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 9090
  workers: 2
  cors:
    allowed_origins: ["http://localhost:5173"]

logging:
  level: debug
  format: json

pricing:
  clearance:
    JP: { base: 10, threshold: 200, formalFee: 25, extraLineItemFee: 3, specialCommodityFee: 20 }
  pickup:
    ZA: 60
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:9090");
        assert_eq!(config.server().worker_count(), 2);
        assert!(!config.server().cors.allows_all_origins());
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.pricing().clearance["JP"].formal_fee, 25.0);
        assert_eq!(config.pricing().pickup["ZA"], 60.0);
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"pricing:\n  pickup:\n    ZA: -5\n")
            .unwrap();

        let err = Config::from_file(temp_file.path()).await.unwrap_err();
        assert!(matches!(err, PreclearError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.yaml")).await.unwrap();
        assert_eq!(config.server().port, default_port());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "3000"),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_FORMAT, "compact"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:3000");
        assert_eq!(config.logging().level, "warn");
        assert_eq!(config.logging().format, LogFormat::Compact);
    }

    #[test]
    fn test_bad_port_override() {
        let mut config = Config::default();
        let result = config.apply_overrides_from(|key| {
            (key == ENV_PORT).then(|| "eighty".to_string())
        });
        assert!(matches!(result, Err(PreclearError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.pricing().is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
    }
}
