//! Shipment workflow integration tests
//!
//! Drives the store with wire-format actions and checks the shipments,
//! notifications, chat threads and events that come out the other side.

#[cfg(test)]
mod tests {
    use crate::common::ShipmentFactory;
    use crate::{assert_err, assert_ok};
    use preclear::core::types::{BrokerApproval, PaymentStatus, Role, ShipmentStatus};
    use preclear::services::pricing::PricingService;
    use preclear::services::shipments::{
        MessageKind, NotificationKind, ShipmentAction, ShipmentStore, StoreEvent, is_valid_token,
    };
    use preclear::PreclearError;
    use serde_json::json;

    fn action(value: serde_json::Value) -> ShipmentAction {
        serde_json::from_value(value).unwrap()
    }

    fn saved_store(id: &str) -> ShipmentStore {
        let store = ShipmentStore::new();
        assert_ok!(store.dispatch(ShipmentAction::Save {
            shipment: Box::new(ShipmentFactory::create(id)),
        }));
        store
    }

    // ==================== Happy path ====================

    #[test]
    fn test_quote_to_payment() {
        let store = saved_store("SHP-200");
        let pricing = PricingService::default();

        let created = store.notifications(Role::Broker);
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "New Shipment Created");
        assert_eq!(
            created[0].message,
            "SHP-200: Electronic Components - United States → India"
        );

        assert_ok!(store.dispatch(action(json!({
            "action": "record-ai-result", "id": "SHP-200", "approved": true, "score": 91.5
        }))));
        assert_ok!(store.dispatch(action(json!({
            "action": "request-broker-approval", "id": "SHP-200"
        }))));
        let approved = assert_ok!(store.dispatch(action(json!({
            "action": "broker-approve", "id": "SHP-200", "notes": "Cleared"
        }))))
        .unwrap();
        let token = approved.token.clone().unwrap();
        assert!(is_valid_token(&token));
        assert_eq!(approved.broker_notes.as_deref(), Some("Cleared"));

        let quote = pricing.quote(&approved);
        let booked = assert_ok!(store.dispatch(action(json!({
            "action": "book",
            "id": "SHP-200",
            "estimatedDelivery": "2024-12-10",
            "amount": quote.breakdown.total
        }))))
        .unwrap();
        assert_eq!(booked.status, ShipmentStatus::ReadyForBooking);
        assert_eq!(booked.payment_amount, Some(quote.breakdown.total));
        assert_eq!(booked.estimated_delivery.as_deref(), Some("2024-12-10"));

        let paid = assert_ok!(store.dispatch(action(json!({
            "action": "complete-payment", "id": "SHP-200"
        }))))
        .unwrap();
        assert_eq!(paid.status, ShipmentStatus::PaymentCompleted);
        assert_eq!(paid.payment_status, Some(PaymentStatus::Completed));
        assert_eq!(paid.token.as_deref(), Some(token.as_str()));

        let shipper = store.notifications(Role::Shipper);
        assert_eq!(shipper.len(), 1);
        assert_eq!(shipper[0].kind, NotificationKind::BrokerApproved);
        assert_eq!(store.notifications(Role::Admin).len(), 3);
    }

    // ==================== Broker outcomes ====================

    #[test]
    fn test_document_round_trip_then_approval() {
        let store = saved_store("SHP-201");
        assert_ok!(store.dispatch(action(json!({
            "action": "record-ai-result", "id": "SHP-201", "approved": true
        }))));
        assert_ok!(store.dispatch(action(json!({
            "action": "request-broker-approval", "id": "SHP-201"
        }))));

        let requested = assert_ok!(store.dispatch(action(json!({
            "action": "broker-request-documents",
            "id": "SHP-201",
            "documents": [
                { "name": "Certificate of Origin", "type": "certificate" },
                { "name": "Packing List" }
            ],
            "message": "Please attach both."
        }))))
        .unwrap();
        assert_eq!(requested.status, ShipmentStatus::DocumentRequested);
        assert_eq!(store.with_document_requests().len(), 1);

        let thread = store.messages("SHP-201");
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].kind, MessageKind::DocumentRequest);
        assert_eq!(
            thread[0].message,
            "Documents requested: Certificate of Origin, Packing List. Please attach both."
        );

        assert_ok!(store.dispatch(action(json!({
            "action": "upload-document", "id": "SHP-201", "name": "Packing List"
        }))));
        assert!(store.notifications(Role::Shipper).is_empty());

        let uploaded = assert_ok!(store.dispatch(action(json!({
            "action": "upload-document", "id": "SHP-201", "name": "Certificate of Origin"
        }))))
        .unwrap();
        assert_eq!(uploaded.status, ShipmentStatus::DocumentRequested);
        assert!(uploaded.documents.iter().all(|d| d.uploaded));

        let shipper = store.notifications(Role::Shipper);
        assert_eq!(shipper.len(), 1);
        assert_eq!(shipper[0].title, "Documents Uploaded");

        let resubmitted = assert_ok!(store.dispatch(action(json!({
            "action": "request-broker-approval", "id": "SHP-201"
        }))))
        .unwrap();
        assert_eq!(resubmitted.status, ShipmentStatus::AwaitingBroker);
        assert_eq!(resubmitted.broker_approval, BrokerApproval::Pending);
    }

    #[test]
    fn test_denied_shipment_cannot_book() {
        let store = saved_store("SHP-202");
        let denied = assert_ok!(store.dispatch(action(json!({
            "action": "broker-deny", "id": "SHP-202", "reason": "Restricted goods"
        }))))
        .unwrap();
        assert_eq!(denied.status, ShipmentStatus::Denied);
        assert_eq!(store.messages("SHP-202")[0].message, "Shipment denied: Restricted goods");

        let err = assert_err!(store.dispatch(action(json!({
            "action": "book", "id": "SHP-202", "amount": 100.0
        }))));
        assert!(matches!(err, PreclearError::Conflict(_)));
    }

    #[test]
    fn test_unknown_action_is_rejected_on_the_wire() {
        let result: Result<ShipmentAction, _> =
            serde_json::from_value(json!({ "action": "teleport", "id": "SHP-1" }));
        assert!(result.is_err());
    }

    // ==================== Events ====================

    #[tokio::test]
    async fn test_event_stream_follows_workflow() {
        let store = ShipmentStore::new();
        let mut events = store.subscribe();

        assert_ok!(store.dispatch(ShipmentAction::Save {
            shipment: Box::new(ShipmentFactory::create("SHP-203")),
        }));
        assert_ok!(store.dispatch(ShipmentAction::BrokerDeny {
            id: "SHP-203".to_string(),
            reason: "Incomplete".to_string(),
        }));
        assert_ok!(store.dispatch(ShipmentAction::Remove {
            id: "SHP-203".to_string(),
        }));

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }

        assert!(matches!(
            seen.as_slice(),
            [
                StoreEvent::ShipmentSaved { created: true, .. },
                StoreEvent::NotificationAdded(_),
                StoreEvent::ShipmentSaved {
                    status: ShipmentStatus::Denied,
                    created: false,
                    ..
                },
                StoreEvent::MessageAdded(_),
                StoreEvent::ShipmentRemoved { .. },
            ]
        ));
        assert!(store.is_empty());
    }
}
