//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function used by the main binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::services::pricing::PricingService;
use crate::services::shipments::ShipmentStore;
use crate::utils::error::{PreclearError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    store: Option<ShipmentStore>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve an existing store instead of an empty one
    pub fn with_store(mut self, store: ShipmentStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PreclearError::Config("Configuration is required".to_string()))?;
        config.validate()?;

        let state = match self.store {
            Some(store) => {
                let pricing = PricingService::from_config(config.pricing());
                AppState::with_parts(config, pricing, store)
            }
            None => AppState::new(config),
        };
        Ok(HttpServer::with_state(state))
    }
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting Preclear pricing service");

    let server = ServerBuilder::new().with_config(config).build()?;
    let server_config = server.config();
    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/v1/pricing/quote - Quote a shipment");
    info!("   POST /api/v1/pricing/clearance - Clearance fee");
    info!("   GET  /api/v1/countries/{{input}} - Country lookup");
    info!("   POST /api/v1/shipments/actions - Shipment workflow actions");

    server.start().await
}
