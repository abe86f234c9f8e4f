//! # Preclear
//!
//! Customs pre-clearance pricing and shipment workflow service.
//!
//! ## Features
//!
//! - **Clearance fees**: per-destination schedules with formal-entry,
//!   line-item and special-commodity surcharges
//! - **Pickup charges**: flat per-origin rates for scheduled pickups
//! - **Quotes**: full breakdowns that honor previously stored amounts
//! - **Shipment store**: typed workflow actions, notifications and chat
//!   threads with change events
//! - **HTTP API**: actix-web endpoints over all of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use preclear::services::pricing::{PricingInputs, compute_pricing};
//! use preclear::core::types::ServiceLevel;
//!
//! let breakdown = compute_pricing(&PricingInputs {
//!     customs_value: 1000.0,
//!     service_level: ServiceLevel::Express,
//!     dest_country: "US".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(breakdown.customs_clearance, 35.0);
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use preclear::{Config, Preclear};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/preclear.yaml").await?;
//!     Preclear::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::types::Shipment;
pub use services::pricing::{PricingBreakdown, PricingService, Quote};
pub use services::shipments::{ShipmentAction, ShipmentStore};
pub use utils::error::{PreclearError, Result};

use tracing::info;

/// Configured service ready to serve
pub struct Preclear {
    config: Config,
    server: server::HttpServer,
}

impl Preclear {
    /// Create a new service instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating Preclear instance");

        let server = server::builder::ServerBuilder::new()
            .with_config(config.clone())
            .build()?;

        Ok(Self { config, server })
    }

    /// Shipment store served by this instance
    pub fn store(&self) -> &ShipmentStore {
        &self.server.state().store
    }

    /// Run the HTTP server
    pub async fn run(self) -> Result<()> {
        info!("Starting Preclear");
        info!("Configuration: {:?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
