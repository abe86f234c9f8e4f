//! Pricing inputs derived from a shipment, and stored-vs-computed resolution

use super::calculator::{TAX_RATE, service_level_multiplier};
use super::types::{
    FeeSchedules, PricingBreakdown, PricingInputs, PricingSource, PricingSources, ResolvedPricing,
};
use crate::core::country::resolve_country_code;
use crate::core::types::{Party, Shipment};

/// `reasonForExport` value that marks a product as a special commodity
pub const SPECIAL_EXPORT_REASON: &str = "Special";

/// Country used when a shipment names none
pub const FALLBACK_COUNTRY: &str = "US";

impl PricingInputs {
    /// Derive calculator inputs from a shipment record
    pub fn from_shipment(shipment: &Shipment) -> Self {
        Self {
            customs_value: customs_value(shipment),
            service_level: shipment.service_level.clone().unwrap_or_default(),
            pickup_type: shipment.pickup_type.clone().unwrap_or_default(),
            origin_country: party_country(
                shipment.shipper.as_ref(),
                shipment.origin_country.as_deref(),
            ),
            dest_country: party_country(
                shipment.consignee.as_ref(),
                shipment.dest_country.as_deref(),
            ),
            line_item_count: shipment.line_item_count(),
            is_special_commodity: is_special_commodity(shipment),
        }
    }
}

/// Declared customs value, then shipment value, then the sum of product lines
pub fn customs_value(shipment: &Shipment) -> f64 {
    [shipment.customs_value, shipment.value]
        .into_iter()
        .flatten()
        .find(|v| *v > 0.0)
        .unwrap_or_else(|| shipment.declared_line_value())
}

/// Special when any product is exported for the `Special` reason or the
/// shipment is explicitly flagged
pub fn is_special_commodity(shipment: &Shipment) -> bool {
    shipment.special_commodity == Some(true)
        || shipment
            .products()
            .any(|p| p.reason_for_export.as_deref() == Some(SPECIAL_EXPORT_REASON))
}

fn party_country(party: Option<&Party>, explicit: Option<&str>) -> String {
    let raw = party
        .and_then(|p| p.country.as_deref())
        .filter(|c| !c.trim().is_empty())
        .or(explicit.filter(|c| !c.trim().is_empty()))
        .unwrap_or(FALLBACK_COUNTRY);
    resolve_country_code(raw)
}

fn pick(stored: Option<f64>, source: &mut PricingSource, computed: impl FnOnce() -> f64) -> f64 {
    match stored.filter(|v| v.is_finite()) {
        Some(value) => {
            *source = PricingSource::Stored;
            value
        }
        None => computed(),
    }
}

impl FeeSchedules {
    /// Merge a shipment's stored pricing with freshly computed values.
    ///
    /// Each stored field wins over its computed counterpart. Fields that are
    /// computed build on the already-resolved fields before them, so a stored
    /// base price feeds the service charge and a stored subtotal feeds the tax.
    /// The shipment-level `pricingTotal` wins over `pricing.total`.
    pub fn resolve_pricing(&self, shipment: &Shipment) -> ResolvedPricing {
        let inputs = PricingInputs::from_shipment(shipment);
        let computed = self.compute_pricing(&inputs);
        let stored = shipment.pricing.unwrap_or_default();
        let mut sources = PricingSources::default();

        let base_price = pick(stored.base_price, &mut sources.base_price, || {
            computed.base_price
        });
        let service_charge = pick(stored.service_charge, &mut sources.service_charge, || {
            base_price * service_level_multiplier(&inputs.service_level)
        });
        let customs_clearance = pick(
            stored.customs_clearance,
            &mut sources.customs_clearance,
            || computed.customs_clearance,
        );
        let pickup_charge = pick(stored.pickup_charge, &mut sources.pickup_charge, || {
            computed.pickup_charge
        });
        let subtotal = pick(stored.subtotal, &mut sources.subtotal, || {
            base_price + service_charge + customs_clearance + pickup_charge
        });
        let tax = pick(stored.tax, &mut sources.tax, || subtotal * TAX_RATE);
        let total = pick(
            shipment.pricing_total.or(stored.total),
            &mut sources.total,
            || subtotal + tax,
        );

        ResolvedPricing {
            breakdown: PricingBreakdown {
                base_price,
                service_charge,
                customs_clearance,
                pickup_charge,
                subtotal,
                tax,
                total,
            },
            sources,
        }
    }
}

/// Resolved breakdown for a shipment using the built-in tables
pub fn resolve_pricing(shipment: &Shipment) -> PricingBreakdown {
    FeeSchedules::builtin().resolve_pricing(shipment).breakdown
}
