//! Shipment record and its nested parts

use super::de::lenient_f64;
use super::workflow::{
    AiApproval, BrokerApproval, PaymentStatus, PickupType, ServiceLevel, ShipmentStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shipment as exchanged with the backend and the shipper/broker views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipment {
    pub id: String,
    pub title: Option<String>,
    pub product_name: Option<String>,
    /// Declared currency code
    pub currency: Option<String>,
    /// Declared shipment value
    #[serde(deserialize_with = "lenient_f64")]
    pub value: Option<f64>,
    /// Customs value; usually the sum of product line values
    #[serde(deserialize_with = "lenient_f64")]
    pub customs_value: Option<f64>,
    pub service_level: Option<ServiceLevel>,
    pub pickup_type: Option<PickupType>,
    /// Explicit origin, used when the shipper address has no country
    pub origin_country: Option<String>,
    /// Explicit destination, used when the consignee address has no country
    pub dest_country: Option<String>,
    pub shipper: Option<Party>,
    pub consignee: Option<Party>,
    pub packages: Vec<Package>,
    /// Previously computed pricing persisted with the shipment
    pub pricing: Option<StoredPricing>,
    /// Persisted grand total; wins over `pricing.total`
    #[serde(deserialize_with = "lenient_f64")]
    pub pricing_total: Option<f64>,
    pub special_commodity: Option<bool>,

    pub status: ShipmentStatus,
    pub ai_approval: AiApproval,
    #[serde(deserialize_with = "lenient_f64")]
    pub ai_score: Option<f64>,
    pub ai_evaluated_at: Option<DateTime<Utc>>,
    pub broker_approval: BrokerApproval,
    pub broker_reviewed_at: Option<DateTime<Utc>>,
    pub broker_notes: Option<String>,
    /// Pre-clear token issued on broker approval
    pub token: Option<String>,
    pub token_generated_at: Option<DateTime<Utc>>,

    pub payment_status: Option<PaymentStatus>,
    #[serde(deserialize_with = "lenient_f64")]
    pub payment_amount: Option<f64>,
    pub payment_date: Option<DateTime<Utc>>,
    pub booking_date: Option<DateTime<Utc>>,
    pub estimated_delivery: Option<String>,

    pub documents: Vec<DocumentEntry>,
    pub shipper_id: Option<String>,
    pub shipper_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Create an empty draft shipment
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        }
    }

    /// Iterate over every product line across all packages
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.packages.iter().flat_map(|pkg| pkg.products.iter())
    }

    /// Number of product lines across all packages
    pub fn line_item_count(&self) -> u32 {
        self.products().count() as u32
    }

    /// Sum of all product line values; missing values count as zero
    pub fn declared_line_value(&self) -> f64 {
        self.products().map(|p| p.total_value.unwrap_or(0.0)).sum()
    }

    /// Find a document entry by name
    pub fn document_mut(&mut self, name: &str) -> Option<&mut DocumentEntry> {
        self.documents.iter_mut().find(|d| d.name == name)
    }
}

/// Shipper or consignee contact and address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub company: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Physical package holding one or more product lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub length: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
    pub dim_unit: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub stackable: Option<bool>,
    pub products: Vec<Product>,
}

/// One product line (a customs line item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub hs_code: Option<String>,
    pub uom: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub qty: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub unit_price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_value: Option<f64>,
    pub origin_country: Option<String>,
    pub reason_for_export: Option<String>,
}

/// Pricing fields persisted on a shipment; any field may be absent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredPricing {
    #[serde(deserialize_with = "lenient_f64")]
    pub base_price: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub service_charge: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub customs_clearance: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub pickup_charge: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub subtotal: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub tax: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total: Option<f64>,
}

/// Document slot on a shipment (uploaded or requested by the broker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub uploaded: bool,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub requested: bool,
    pub requested_at: Option<DateTime<Utc>>,
}
