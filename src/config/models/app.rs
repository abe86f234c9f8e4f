//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything `preclear.yaml` can hold
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Fee schedule overrides on top of the built-in tables
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.logging = self.logging.merge(other.logging);
        self.pricing = self.pricing.merge(other.pricing);
        self
    }
}
