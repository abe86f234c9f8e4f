//! Change events broadcast by the shipment store

use super::store::ShipmentStore;
use super::types::{ChatMessage, Notification};
use crate::core::types::{Role, ShipmentStatus};
use serde::Serialize;
use tokio::sync::broadcast;

/// Something changed in the store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    ShipmentSaved {
        id: String,
        status: ShipmentStatus,
        created: bool,
    },
    ShipmentRemoved { id: String },
    /// Shipments, notifications and messages were all dropped
    Cleared,
    /// The shipment cache was swapped for a new listing
    Replaced { count: usize },
    /// Shipments were dropped; notifications and messages kept
    ShipmentsReset,
    NotificationAdded(Notification),
    MessageAdded(ChatMessage),
    MessagesReplaced { shipment_id: String, count: usize },
    MessagesRead {
        shipment_id: String,
        reader: Role,
        count: usize,
    },
    RuleSaved { id: String, created: bool },
    RuleRemoved { id: String },
}

impl ShipmentStore {
    /// Subscribe to store change events
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_sender.subscribe()
    }
}
