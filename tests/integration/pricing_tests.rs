//! Pricing integration tests
//!
//! Quotes computed from whole shipment documents, the way the store and the
//! HTTP layer hand them to the pricing service.

#[cfg(test)]
mod tests {
    use crate::assert_amount;
    use crate::common::ShipmentFactory;
    use preclear::core::types::{PickupType, ServiceLevel, Shipment, StoredPricing};
    use preclear::services::pricing::{
        FeeSchedules, PricingBreakdown, PricingService, PricingSource, resolve_pricing,
    };

    // ==================== Computed quotes ====================

    #[test]
    fn test_sample_shipment_quote() {
        let service = PricingService::default();
        let quote = service.quote(&ShipmentFactory::create("SHP-100"));

        assert_eq!(quote.inputs.origin_country, "US");
        assert_eq!(quote.inputs.dest_country, "IN");
        assert_eq!(quote.inputs.line_item_count, 2);
        assert!(!quote.inputs.is_special_commodity);

        assert_amount!(quote.breakdown.base_price, 250.0);
        assert_amount!(quote.breakdown.service_charge, 250.0);
        assert_amount!(quote.breakdown.customs_clearance, 50.0);
        assert_amount!(quote.breakdown.pickup_charge, 35.0);
        assert_amount!(quote.breakdown.subtotal, 585.0);
        assert_amount!(quote.breakdown.tax, 105.3);
        assert_amount!(quote.breakdown.total, 690.3);
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.formatted_total, "$690.30");
        assert!(quote.sources.all_computed());
    }

    #[test]
    fn test_line_item_surcharge_and_declared_value() {
        let shipment = ShipmentFactory::with_line_items("SHP-101", 8);
        let breakdown = resolve_pricing(&shipment);

        // 8 lines of 100 with no explicit customs value
        assert_amount!(breakdown.base_price, 40.0);
        assert_amount!(breakdown.customs_clearance, 350.0);
        assert_amount!(breakdown.subtotal, 465.0);
    }

    #[test]
    fn test_special_commodity_surcharge() {
        let breakdown = resolve_pricing(&ShipmentFactory::special("SHP-102"));
        assert_amount!(breakdown.customs_clearance, 1550.0);
    }

    #[test]
    fn test_express_drop_off_to_named_country() {
        let shipment = Shipment {
            customs_value: Some(1000.0),
            service_level: Some(ServiceLevel::Express),
            pickup_type: Some(PickupType::DropOff),
            consignee: Some(ShipmentFactory::party("Berlin GmbH", "germany")),
            ..ShipmentFactory::create("SHP-103")
        };
        let breakdown = resolve_pricing(&shipment);

        assert_amount!(breakdown.service_charge, 75.0);
        assert_amount!(breakdown.customs_clearance, 60.0);
        assert_amount!(breakdown.pickup_charge, 0.0);
        assert_amount!(breakdown.total, 218.3);
    }

    #[test]
    fn test_unknown_destination_uses_default_schedule() {
        let shipment = Shipment {
            customs_value: Some(2000.0),
            service_level: Some(ServiceLevel::Economy),
            shipper: Some(ShipmentFactory::party("Osaka KK", "JP")),
            consignee: Some(ShipmentFactory::party("Nowhere Ltd", "ZZ")),
            ..ShipmentFactory::create("SHP-104")
        };
        let breakdown = resolve_pricing(&shipment);

        assert_amount!(breakdown.service_charge, 80.0);
        assert_amount!(breakdown.customs_clearance, 80.0);
        assert_amount!(breakdown.pickup_charge, 50.0);
        assert_amount!(breakdown.total, 365.8);
    }

    #[test]
    fn test_worthless_shipment_prices_to_zero() {
        let mut shipment = ShipmentFactory::with_line_items("SHP-105", 3);
        for product in &mut shipment.packages[0].products {
            product.total_value = Some(0.0);
        }

        assert_eq!(resolve_pricing(&shipment), PricingBreakdown::default());
    }

    // ==================== Stored pricing ====================

    #[test]
    fn test_stored_fields_take_precedence() {
        let shipment = Shipment {
            pricing_total: Some(999.0),
            ..ShipmentFactory::with_stored_pricing(
                "SHP-106",
                StoredPricing {
                    customs_clearance: Some(0.0),
                    total: Some(1.0),
                    ..Default::default()
                },
            )
        };
        let resolved = FeeSchedules::builtin().resolve_pricing(&shipment);

        assert_amount!(resolved.breakdown.customs_clearance, 0.0);
        assert_amount!(resolved.breakdown.subtotal, 535.0);
        assert_amount!(resolved.breakdown.total, 999.0);
        assert_eq!(resolved.sources.customs_clearance, PricingSource::Stored);
        assert_eq!(resolved.sources.total, PricingSource::Stored);
        assert_eq!(resolved.sources.subtotal, PricingSource::Computed);
    }

    #[test]
    fn test_stored_pricing_survives_json() {
        let json = r#"{
            "id": "SHP-107",
            "customsValue": "5000",
            "consignee": { "country": "IN" },
            "pricing": { "basePrice": "100", "customsClearance": 0 }
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        let breakdown = resolve_pricing(&shipment);

        assert_amount!(breakdown.base_price, 100.0);
        assert_amount!(breakdown.service_charge, 100.0);
        assert_amount!(breakdown.customs_clearance, 0.0);
    }
}
