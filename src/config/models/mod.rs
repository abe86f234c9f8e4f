//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod logging;
pub mod pricing;
pub mod server;

// Re-export all configuration types
pub use app::*;
pub use logging::*;
pub use pricing::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default log level directive
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub(crate) fn default_true() -> bool {
    true
}
