//! Workflow state tags carried by a shipment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall shipment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentStatus {
    #[default]
    Draft,
    DocumentsUploaded,
    AiReview,
    AiApproved,
    AwaitingBroker,
    DocumentRequested,
    TokenGenerated,
    Denied,
    ReadyForBooking,
    PaymentCompleted,
    /// Any status string this build does not know about
    #[serde(other)]
    Unknown,
}

impl ShipmentStatus {
    /// Wire name, e.g. `awaiting-broker`
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Draft => "draft",
            ShipmentStatus::DocumentsUploaded => "documents-uploaded",
            ShipmentStatus::AiReview => "ai-review",
            ShipmentStatus::AiApproved => "ai-approved",
            ShipmentStatus::AwaitingBroker => "awaiting-broker",
            ShipmentStatus::DocumentRequested => "document-requested",
            ShipmentStatus::TokenGenerated => "token-generated",
            ShipmentStatus::Denied => "denied",
            ShipmentStatus::ReadyForBooking => "ready-for-booking",
            ShipmentStatus::PaymentCompleted => "payment-completed",
            ShipmentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI compliance check outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AiApproval {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
}

/// Broker review outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BrokerApproval {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
    DocumentsRequested,
}

/// Payment progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// Requested service level; drives the service-charge multiplier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceLevel {
    #[default]
    Standard,
    Express,
    Economy,
    Freight,
    /// Unrecognized levels price like `Standard`
    Other(String),
}

impl ServiceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceLevel::Standard => "Standard",
            ServiceLevel::Express => "Express",
            ServiceLevel::Economy => "Economy",
            ServiceLevel::Freight => "Freight",
            ServiceLevel::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for ServiceLevel {
    fn from(value: &str) -> Self {
        // Matching is exact, like the lookup table it replaces
        match value {
            "Standard" => ServiceLevel::Standard,
            "Express" => ServiceLevel::Express,
            "Economy" => ServiceLevel::Economy,
            "Freight" => ServiceLevel::Freight,
            other => ServiceLevel::Other(other.to_string()),
        }
    }
}

impl Serialize for ServiceLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(ServiceLevel::from(value.as_str()))
    }
}

/// How the goods reach the carrier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickupType {
    ScheduledPickup,
    #[default]
    DropOff,
    Other(String),
}

impl PickupType {
    pub fn as_str(&self) -> &str {
        match self {
            PickupType::ScheduledPickup => "Scheduled Pickup",
            PickupType::DropOff => "Drop-off",
            PickupType::Other(s) => s.as_str(),
        }
    }

    /// Pickup charges only apply to scheduled pickups
    pub fn is_scheduled(&self) -> bool {
        matches!(self, PickupType::ScheduledPickup)
    }
}

impl From<&str> for PickupType {
    fn from(value: &str) -> Self {
        match value {
            "Scheduled Pickup" => PickupType::ScheduledPickup,
            "Drop-off" => PickupType::DropOff,
            other => PickupType::Other(other.to_string()),
        }
    }
}

impl Serialize for PickupType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PickupType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(PickupType::from(value.as_str()))
    }
}

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Shipper,
    Broker,
    Admin,
}
