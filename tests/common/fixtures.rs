//! Test fixtures and data factories
//!
//! Provides factory methods for creating shipments with sensible defaults.
//! All factories create real objects, not mocks.

use preclear::core::types::{
    Package, Party, PickupType, Product, ServiceLevel, Shipment, StoredPricing,
};

/// Factory for creating test shipments
pub struct ShipmentFactory;

impl ShipmentFactory {
    /// US to India, standard service, scheduled pickup, two product lines
    /// worth 5000 in total
    pub fn create(id: &str) -> Shipment {
        Shipment {
            title: Some("Electronic Components".to_string()),
            currency: Some("USD".to_string()),
            value: Some(5000.0),
            customs_value: Some(5000.0),
            service_level: Some(ServiceLevel::Standard),
            pickup_type: Some(PickupType::ScheduledPickup),
            shipper: Some(Self::party("TechCorp", "United States")),
            consignee: Some(Self::party("Bharat Imports", "India")),
            packages: vec![Package {
                package_type: Some("Box".to_string()),
                weight: Some(12.5),
                products: vec![
                    Self::product("Microcontroller", 3000.0),
                    Self::product("Sensor kit", 2000.0),
                ],
                ..Default::default()
            }],
            shipper_name: Some("TechCorp".to_string()),
            ..Shipment::new(id)
        }
    }

    /// Shipment with `count` product lines of 100 each and no explicit
    /// customs value
    pub fn with_line_items(id: &str, count: usize) -> Shipment {
        let mut shipment = Self::create(id);
        shipment.customs_value = None;
        shipment.value = None;
        shipment.packages[0].products = (0..count)
            .map(|i| Self::product(&format!("Part {}", i), 100.0))
            .collect();
        shipment
    }

    /// Shipment carrying a product exported for the `Special` reason
    pub fn special(id: &str) -> Shipment {
        let mut shipment = Self::create(id);
        shipment.packages[0].products[0].reason_for_export = Some("Special".to_string());
        shipment
    }

    /// Shipment with previously persisted pricing
    pub fn with_stored_pricing(id: &str, pricing: StoredPricing) -> Shipment {
        Shipment {
            pricing: Some(pricing),
            ..Self::create(id)
        }
    }

    pub fn party(company: &str, country: &str) -> Party {
        Party {
            company: Some(company.to_string()),
            country: Some(country.to_string()),
            ..Default::default()
        }
    }

    pub fn product(name: &str, total_value: f64) -> Product {
        Product {
            name: Some(name.to_string()),
            qty: Some(1.0),
            unit_price: Some(total_value),
            total_value: Some(total_value),
            reason_for_export: Some("Sale".to_string()),
            ..Default::default()
        }
    }
}
