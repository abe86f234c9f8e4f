//! Notification and chat message records kept next to the shipments

use crate::core::types::{Role, Shipment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    ShipmentCreated,
    BrokerApprovalRequest,
    BrokerApproved,
    DocumentsRequested,
}

/// Notification addressed to one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub shipment_id: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub recipient_role: Role,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        recipient_role: Role,
        shipment_id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("notif-{}", Uuid::new_v4()),
            kind,
            title: title.into(),
            message: message.into(),
            shipment_id: shipment_id.into(),
            timestamp: Utc::now(),
            read: false,
            recipient_role,
        }
    }
}

/// Kind of chat entry on a shipment thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    #[default]
    Message,
    System,
    DocumentRequest,
}

/// One entry of a shipment chat thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub shipment_id: String,
    pub sender: Role,
    pub sender_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub read: bool,
}

impl ChatMessage {
    pub fn new(
        shipment_id: impl Into<String>,
        sender: Role,
        sender_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            shipment_id: shipment_id.into(),
            sender,
            sender_name: sender_name.into(),
            message: message.into(),
            timestamp: Utc::now(),
            kind: MessageKind::Message,
            read: false,
        }
    }

    /// Message posted by the broker desk on behalf of the system
    pub fn from_broker(
        shipment_id: impl Into<String>,
        kind: MessageKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            ..Self::new(shipment_id, Role::Broker, BROKER_DESK_NAME, message)
        }
    }

    /// Fold a newer copy of the same message into this one. Empty text
    /// fields keep their current value and a read message stays read.
    pub(super) fn merge(&mut self, update: ChatMessage) {
        let read = self.read || update.read;
        let sender_name = std::mem::take(&mut self.sender_name);
        let message = std::mem::take(&mut self.message);
        *self = update;
        if self.sender_name.is_empty() {
            self.sender_name = sender_name;
        }
        if self.message.is_empty() {
            self.message = message;
        }
        self.read = read;
    }
}

/// Display name used for messages the broker workflow posts
pub const BROKER_DESK_NAME: &str = "Customs Broker";

/// Document the broker asks the shipper for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedDocument {
    pub name: String,
    #[serde(rename = "type", default)]
    pub doc_type: Option<String>,
}

/// Destination requirements for a product category, maintained by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportExportRule {
    pub id: String,
    pub country: String,
    pub country_code: String,
    pub product_category: String,
    #[serde(default)]
    pub hs_code_range: Option<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub banned_products: Vec<String>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub max_weight: Option<f64>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Everything behind the store lock
#[derive(Debug, Default)]
pub(super) struct StoreState {
    /// Shipments by id, kept in id order
    pub shipments: BTreeMap<String, Shipment>,
    pub notifications: Vec<Notification>,
    pub messages: Vec<ChatMessage>,
    pub import_export_rules: Vec<ImportExportRule>,
}
