//! Main pricing service implementation

use super::types::{FeeSchedules, PricingInputs, Quote};
use crate::config::PricingConfig;
use crate::core::country::format_currency;
use crate::core::types::Shipment;
use std::sync::Arc;
use tracing::{debug, info};

/// Currency assumed when a shipment declares none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Pricing service over a fixed set of fee tables
#[derive(Debug, Clone)]
pub struct PricingService {
    /// Tables are loaded once at startup and never mutated
    pub(super) schedules: Arc<FeeSchedules>,
}

impl PricingService {
    /// Create a pricing service over the given tables
    pub fn new(schedules: FeeSchedules) -> Self {
        info!(
            clearance_entries = schedules.clearance.len(),
            pickup_entries = schedules.pickup.len(),
            "Pricing service initialized"
        );
        Self {
            schedules: Arc::new(schedules),
        }
    }

    /// Built-in tables with the configured overrides applied
    pub fn from_config(config: &PricingConfig) -> Self {
        let schedules = FeeSchedules::with_overrides(&config.clearance, &config.pickup);
        if !config.is_empty() {
            info!(
                clearance_overrides = config.clearance.len(),
                pickup_overrides = config.pickup.len(),
                replaced_builtins = schedules.replaced_builtin_keys().len(),
                "Applying fee schedule overrides"
            );
        }
        Self::new(schedules)
    }

    /// The tables this service prices with
    pub fn schedules(&self) -> &FeeSchedules {
        &self.schedules
    }

    /// Quote a shipment, preferring any pricing already stored on it
    pub fn quote(&self, shipment: &Shipment) -> Quote {
        let inputs = PricingInputs::from_shipment(shipment);
        let resolved = self.schedules.resolve_pricing(shipment);
        let currency = shipment
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        debug!(
            shipment_id = %shipment.id,
            customs_value = inputs.customs_value,
            origin = %inputs.origin_country,
            destination = %inputs.dest_country,
            line_items = inputs.line_item_count,
            special = inputs.is_special_commodity,
            total = resolved.breakdown.total,
            fully_computed = resolved.sources.all_computed(),
            "Quoted shipment"
        );

        Quote {
            shipment_id: shipment.id.clone(),
            formatted_total: format_currency(resolved.breakdown.total, &currency),
            currency,
            inputs,
            breakdown: resolved.breakdown,
            sources: resolved.sources,
        }
    }

    /// Clearance fee for explicit inputs
    pub fn clearance(
        &self,
        dest_country: &str,
        customs_value: f64,
        line_item_count: u32,
        is_special_commodity: bool,
    ) -> f64 {
        self.schedules.calculate_clearance(
            dest_country,
            customs_value,
            line_item_count,
            is_special_commodity,
        )
    }

    /// Flat pickup charge for an origin country
    pub fn pickup_charge(&self, origin_country: &str) -> f64 {
        self.schedules.pickup_rate(origin_country)
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(FeeSchedules::default())
    }
}
