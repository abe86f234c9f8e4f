//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::pricing::PricingService;
use crate::services::shipments::ShipmentStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; actix clones the state into each worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Pricing over the configured fee tables
    pub pricing: Arc<PricingService>,
    /// Shipment cache shared by every worker
    pub store: ShipmentStore,
}

impl AppState {
    /// Build the state from configuration with an empty store
    pub fn new(config: Config) -> Self {
        let pricing = PricingService::from_config(config.pricing());
        Self::with_parts(config, pricing, ShipmentStore::new())
    }

    pub fn with_parts(config: Config, pricing: PricingService, store: ShipmentStore) -> Self {
        Self {
            config: Arc::new(config),
            pricing: Arc::new(pricing),
            store,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
