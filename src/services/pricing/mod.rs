//! Customs pricing
//!
//! One place for the clearance and pickup fee tables and the arithmetic on
//! top of them. Callers either use the free functions (built-in tables) or a
//! [`PricingService`] built from configuration.

mod calculator;
mod resolve;
mod schedules;
mod service;
mod types;


pub use calculator::{
    BASE_PRICE_RATE, INCLUDED_LINE_ITEMS, TAX_RATE, calculate_clearance, calculate_pickup_charge,
    compute_pricing, round_half_up, service_level_multiplier,
};
pub use resolve::{
    FALLBACK_COUNTRY, SPECIAL_EXPORT_REASON, customs_value, is_special_commodity, resolve_pricing,
};
pub use schedules::{DEFAULT_CLEARANCE, DEFAULT_PICKUP_CHARGE};
pub use service::{DEFAULT_CURRENCY, PricingService};
pub use types::{
    ClearanceFeeSchedule, DEFAULT_SCHEDULE_KEY, FeeSchedules, PricingBreakdown, PricingInputs,
    PricingSource, PricingSources, Quote, ResolvedPricing,
};
