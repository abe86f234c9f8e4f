//! Type definitions for the pricing service

use crate::core::types::{PickupType, ServiceLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the fallback entry in both fee tables
pub const DEFAULT_SCHEDULE_KEY: &str = "default";

/// Customs clearance fees for one destination country
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceFeeSchedule {
    /// Flat fee charged on every clearance
    pub base: f64,
    /// Customs value above which the formal fee applies
    pub threshold: f64,
    /// Formal clearance fee
    pub formal_fee: f64,
    /// Fee per line item beyond the fifth
    pub extra_line_item_fee: f64,
    /// Surcharge for special commodities
    pub special_commodity_fee: f64,
}

impl ClearanceFeeSchedule {
    pub const fn new(
        base: f64,
        threshold: f64,
        formal_fee: f64,
        extra_line_item_fee: f64,
        special_commodity_fee: f64,
    ) -> Self {
        Self {
            base,
            threshold,
            formal_fee,
            extra_line_item_fee,
            special_commodity_fee,
        }
    }

    /// All fee values, in declaration order
    pub fn values(&self) -> [f64; 5] {
        [
            self.base,
            self.threshold,
            self.formal_fee,
            self.extra_line_item_fee,
            self.special_commodity_fee,
        ]
    }
}

/// Clearance and pickup tables. Both always contain a `default` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeSchedules {
    /// Destination code -> clearance schedule
    pub clearance: BTreeMap<String, ClearanceFeeSchedule>,
    /// Origin code -> flat pickup charge
    pub pickup: BTreeMap<String, f64>,
}

/// Everything the assembler needs, already derived from a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingInputs {
    pub customs_value: f64,
    pub service_level: ServiceLevel,
    pub pickup_type: PickupType,
    pub origin_country: String,
    pub dest_country: String,
    pub line_item_count: u32,
    pub is_special_commodity: bool,
}

/// Full price breakdown in the shipment currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub base_price: f64,
    pub service_charge: f64,
    pub customs_clearance: f64,
    pub pickup_charge: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Where a resolved breakdown field came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingSource {
    /// Persisted on the shipment
    Stored,
    /// Calculated from the fee tables
    #[default]
    Computed,
}

/// Per-field origin of a resolved breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingSources {
    pub base_price: PricingSource,
    pub service_charge: PricingSource,
    pub customs_clearance: PricingSource,
    pub pickup_charge: PricingSource,
    pub subtotal: PricingSource,
    pub tax: PricingSource,
    pub total: PricingSource,
}

impl PricingSources {
    /// True when no stored value was used
    pub fn all_computed(&self) -> bool {
        [
            self.base_price,
            self.service_charge,
            self.customs_clearance,
            self.pickup_charge,
            self.subtotal,
            self.tax,
            self.total,
        ]
        .iter()
        .all(|s| *s == PricingSource::Computed)
    }
}

/// Breakdown merged from stored and computed values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPricing {
    pub breakdown: PricingBreakdown,
    pub sources: PricingSources,
}

/// Quote returned to callers of the pricing service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub shipment_id: String,
    /// Currency code the amounts are expressed in
    pub currency: String,
    pub inputs: PricingInputs,
    pub breakdown: PricingBreakdown,
    pub sources: PricingSources,
    /// Total rendered for display, e.g. `$188.80`
    pub formatted_total: String,
}
