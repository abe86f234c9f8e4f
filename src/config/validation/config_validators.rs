//! Configuration validators
//!
//! Validation implementations for every section of the service configuration.

use super::trait_def::Validate;
use crate::config::models::*;
use crate::services::pricing::DEFAULT_SCHEDULE_KEY;
use tracing::{debug, warn};

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.logging.validate()?;
        self.pricing.validate()?;

        debug!("Service configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }
        if self.allowed_origins.iter().any(|o| o.trim().is_empty()) {
            return Err("CORS origins cannot be empty strings".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Result<(), String> {
        for (code, schedule) in &self.clearance {
            validate_table_key(code)?;
            let names = [
                "base",
                "threshold",
                "formalFee",
                "extraLineItemFee",
                "specialCommodityFee",
            ];
            for (name, value) in names.iter().zip(schedule.values()) {
                validate_amount(value)
                    .map_err(|e| format!("Clearance schedule '{}' {}: {}", code, name, e))?;
            }
        }

        for (code, charge) in &self.pickup {
            validate_table_key(code)?;
            validate_amount(*charge).map_err(|e| format!("Pickup charge '{}': {}", code, e))?;
        }

        Ok(())
    }
}

/// Table keys are two ASCII letters or `default`
fn validate_table_key(code: &str) -> Result<(), String> {
    let code = code.trim();
    let is_code = code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
    if is_code || code.eq_ignore_ascii_case(DEFAULT_SCHEDULE_KEY) {
        Ok(())
    } else {
        Err(format!(
            "Fee table key '{}' must be a two-letter country code or '{}'",
            code, DEFAULT_SCHEDULE_KEY
        ))
    }
}

fn validate_amount(value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err("value must be a finite number".to_string());
    }
    if value < 0.0 {
        return Err(format!("value {} cannot be negative", value));
    }
    Ok(())
}
