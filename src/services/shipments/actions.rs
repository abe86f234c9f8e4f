//! Typed store actions

use super::types::RequestedDocument;
use crate::core::types::{Shipment, ShipmentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every mutation the shipment store accepts.
///
/// On the wire the variant name goes in an `action` field, e.g.
/// `{"action": "broker-approve", "id": "SHP-002", "notes": "ok"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "action",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ShipmentAction {
    /// Insert or replace a shipment
    Save { shipment: Box<Shipment> },
    Remove { id: String },
    /// Drop every shipment, notification and message
    Clear,
    UpdateStatus { id: String, status: ShipmentStatus },
    /// Outcome of the AI compliance check
    RecordAiResult {
        id: String,
        approved: bool,
        #[serde(default)]
        score: Option<f64>,
    },
    RequestBrokerApproval { id: String },
    BrokerApprove {
        id: String,
        #[serde(default)]
        notes: Option<String>,
    },
    BrokerDeny { id: String, reason: String },
    BrokerRequestDocuments {
        id: String,
        documents: Vec<RequestedDocument>,
        #[serde(default)]
        message: String,
    },
    UploadDocument {
        id: String,
        name: String,
        #[serde(default)]
        doc_type: Option<String>,
    },
    Book {
        id: String,
        #[serde(default)]
        booking_date: Option<DateTime<Utc>>,
        #[serde(default)]
        estimated_delivery: Option<String>,
        amount: f64,
    },
    CompletePayment { id: String },
}

impl ShipmentAction {
    /// Wire name of the action
    pub fn name(&self) -> &'static str {
        match self {
            ShipmentAction::Save { .. } => "save",
            ShipmentAction::Remove { .. } => "remove",
            ShipmentAction::Clear => "clear",
            ShipmentAction::UpdateStatus { .. } => "update-status",
            ShipmentAction::RecordAiResult { .. } => "record-ai-result",
            ShipmentAction::RequestBrokerApproval { .. } => "request-broker-approval",
            ShipmentAction::BrokerApprove { .. } => "broker-approve",
            ShipmentAction::BrokerDeny { .. } => "broker-deny",
            ShipmentAction::BrokerRequestDocuments { .. } => "broker-request-documents",
            ShipmentAction::UploadDocument { .. } => "upload-document",
            ShipmentAction::Book { .. } => "book",
            ShipmentAction::CompletePayment { .. } => "complete-payment",
        }
    }

    /// Target shipment id, if the action has one
    pub fn shipment_id(&self) -> Option<&str> {
        match self {
            ShipmentAction::Save { shipment } => Some(shipment.id.as_str()),
            ShipmentAction::Clear => None,
            ShipmentAction::Remove { id }
            | ShipmentAction::UpdateStatus { id, .. }
            | ShipmentAction::RecordAiResult { id, .. }
            | ShipmentAction::RequestBrokerApproval { id }
            | ShipmentAction::BrokerApprove { id, .. }
            | ShipmentAction::BrokerDeny { id, .. }
            | ShipmentAction::BrokerRequestDocuments { id, .. }
            | ShipmentAction::UploadDocument { id, .. }
            | ShipmentAction::Book { id, .. }
            | ShipmentAction::CompletePayment { id } => Some(id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action: ShipmentAction = serde_json::from_str(
            r#"{"action": "broker-request-documents", "id": "SHP-4",
                "documents": [{"name": "Safety Certificate", "type": "certificate"}],
                "message": "Needed for CNC machines"}"#,
        )
        .unwrap();

        match &action {
            ShipmentAction::BrokerRequestDocuments {
                id,
                documents,
                message,
            } => {
                assert_eq!(id, "SHP-4");
                assert_eq!(documents[0].doc_type.as_deref(), Some("certificate"));
                assert_eq!(message, "Needed for CNC machines");
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(action.name(), "broker-request-documents");
        assert_eq!(action.shipment_id(), Some("SHP-4"));
    }

    #[test]
    fn test_optional_fields_default() {
        let action: ShipmentAction =
            serde_json::from_str(r#"{"action": "record-ai-result", "id": "SHP-1", "approved": true}"#)
                .unwrap();
        assert_eq!(
            action,
            ShipmentAction::RecordAiResult {
                id: "SHP-1".to_string(),
                approved: true,
                score: None,
            }
        );

        let clear: ShipmentAction = serde_json::from_str(r#"{"action": "clear"}"#).unwrap();
        assert_eq!(clear.shipment_id(), None);
    }

    #[test]
    fn test_save_carries_shipment() {
        let action: ShipmentAction =
            serde_json::from_str(r#"{"action": "save", "shipment": {"id": "SHP-7", "value": "12"}}"#)
                .unwrap();
        match action {
            ShipmentAction::Save { shipment } => assert_eq!(shipment.value, Some(12.0)),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
