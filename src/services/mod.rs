//! Services module
//!
//! Business logic on top of the core types: pricing and the shipment store

pub mod pricing;
pub mod shipments;

pub use pricing::{FeeSchedules, PricingBreakdown, PricingService, Quote};
pub use shipments::{ShipmentAction, ShipmentStore, StoreEvent};
