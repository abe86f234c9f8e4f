//! Pure fee calculations
//!
//! Every function here is total: any input produces a breakdown, and unknown
//! countries or service levels fall back to the default rates.

use super::types::{FeeSchedules, PricingBreakdown, PricingInputs};
use crate::core::types::ServiceLevel;

/// Share of the customs value charged as the base price
pub const BASE_PRICE_RATE: f64 = 0.05;
/// Tax applied to the subtotal
pub const TAX_RATE: f64 = 0.18;
/// Line items included before the per-item fee kicks in
pub const INCLUDED_LINE_ITEMS: u32 = 5;

/// Round half up to the nearest integer (2.5 -> 3, -2.5 -> -2)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Multiplier applied to the base price for a service level
pub fn service_level_multiplier(level: &ServiceLevel) -> f64 {
    match level {
        ServiceLevel::Standard => 1.0,
        ServiceLevel::Express => 1.5,
        ServiceLevel::Economy => 0.8,
        ServiceLevel::Freight => 0.7,
        ServiceLevel::Other(_) => 1.0,
    }
}

/// Customs clearance fee using the built-in tables
pub fn calculate_clearance(
    dest_country: &str,
    customs_value: f64,
    line_item_count: u32,
    is_special_commodity: bool,
) -> f64 {
    FeeSchedules::builtin().calculate_clearance(
        dest_country,
        customs_value,
        line_item_count,
        is_special_commodity,
    )
}

/// Pickup charge using the built-in tables
pub fn calculate_pickup_charge(origin_country: &str) -> f64 {
    FeeSchedules::builtin().pickup_rate(origin_country)
}

/// Price breakdown using the built-in tables
pub fn compute_pricing(inputs: &PricingInputs) -> PricingBreakdown {
    FeeSchedules::builtin().compute_pricing(inputs)
}

impl FeeSchedules {
    /// Clearance fee for a destination, rounded half up to a whole amount
    pub fn calculate_clearance(
        &self,
        dest_country: &str,
        customs_value: f64,
        line_item_count: u32,
        is_special_commodity: bool,
    ) -> f64 {
        let schedule = self.clearance_schedule(dest_country);

        let mut clearance = schedule.base;
        if customs_value > schedule.threshold {
            clearance += schedule.formal_fee;
        }
        if line_item_count > INCLUDED_LINE_ITEMS {
            clearance += f64::from(line_item_count - INCLUDED_LINE_ITEMS) * schedule.extra_line_item_fee;
        }
        if is_special_commodity {
            clearance += schedule.special_commodity_fee;
        }

        round_half_up(clearance)
    }

    /// Pickup charge for the inputs; zero unless the goods are picked up
    pub(crate) fn pickup_charge_for(&self, inputs: &PricingInputs) -> f64 {
        if inputs.pickup_type.is_scheduled() {
            self.pickup_rate(&inputs.origin_country)
        } else {
            0.0
        }
    }

    /// Assemble the full breakdown. A non-positive customs value yields all zeroes.
    pub fn compute_pricing(&self, inputs: &PricingInputs) -> PricingBreakdown {
        if inputs.customs_value.is_nan() || inputs.customs_value <= 0.0 {
            return PricingBreakdown::default();
        }

        let base_price = inputs.customs_value * BASE_PRICE_RATE;
        let service_charge = base_price * service_level_multiplier(&inputs.service_level);
        let customs_clearance = self.calculate_clearance(
            &inputs.dest_country,
            inputs.customs_value,
            inputs.line_item_count,
            inputs.is_special_commodity,
        );
        let pickup_charge = self.pickup_charge_for(inputs);

        let subtotal = base_price + service_charge + customs_clearance + pickup_charge;
        let tax = subtotal * TAX_RATE;

        PricingBreakdown {
            base_price,
            service_charge,
            customs_clearance,
            pickup_charge,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
