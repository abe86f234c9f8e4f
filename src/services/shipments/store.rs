//! In-memory shipment store

use super::actions::ShipmentAction;
use super::events::StoreEvent;
use super::token::generate_token;
use super::types::{
    ChatMessage, ImportExportRule, MessageKind, Notification, NotificationKind,
    RequestedDocument, StoreState,
};
use crate::core::types::{
    AiApproval, BrokerApproval, DocumentEntry, PaymentStatus, Role, Shipment, ShipmentStatus,
};
use crate::utils::error::{PreclearError, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

/// Buffered events per subscriber before it starts lagging
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Client-side cache of shipments plus the notifications and chat messages
/// the workflow produces
#[derive(Debug, Clone)]
pub struct ShipmentStore {
    /// Consolidated store data - single lock for shipments, notifications and messages
    pub(super) state: Arc<RwLock<StoreState>>,
    /// Event broadcaster for changes
    pub(super) event_sender: broadcast::Sender<StoreEvent>,
}

impl ShipmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create an empty store whose subscribers buffer `capacity` events
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (event_sender, _) = broadcast::channel(capacity.max(1));
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            event_sender,
        }
    }

    /// Create a store pre-filled with shipments, e.g. from a backend listing
    pub fn with_shipments(shipments: impl IntoIterator<Item = Shipment>) -> Self {
        let store = Self::new();
        store.replace_all(shipments);
        store
    }

    // ==================== Reads ====================

    /// All shipments, ordered by id
    pub fn all(&self) -> Vec<Shipment> {
        self.state.read().shipments.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<Shipment> {
        self.state.read().shipments.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().shipments.is_empty()
    }

    pub fn by_status(&self, status: ShipmentStatus) -> Vec<Shipment> {
        self.filtered(|s| s.status == status)
    }

    /// AI-approved shipments the broker has not reviewed yet
    pub fn awaiting_broker(&self) -> Vec<Shipment> {
        self.filtered(|s| {
            s.ai_approval == AiApproval::Approved
                && matches!(
                    s.broker_approval,
                    BrokerApproval::Pending | BrokerApproval::NotStarted
                )
        })
    }

    /// Shipments waiting on documents the broker asked for
    pub fn with_document_requests(&self) -> Vec<Shipment> {
        self.by_status(ShipmentStatus::DocumentRequested)
    }

    /// Notifications addressed to `role`; admins see every notification
    pub fn notifications(&self, role: Role) -> Vec<Notification> {
        self.state
            .read()
            .notifications
            .iter()
            .filter(|n| role == Role::Admin || n.recipient_role == role)
            .cloned()
            .collect()
    }

    /// Chat thread for a shipment, oldest first
    pub fn messages(&self, shipment_id: &str) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .state
            .read()
            .messages
            .iter()
            .filter(|m| m.shipment_id == shipment_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Unread messages `reader` received, across every thread
    pub fn unread_message_count(&self, reader: Role) -> usize {
        self.state
            .read()
            .messages
            .iter()
            .filter(|m| m.sender != reader && !m.read)
            .count()
    }

    pub fn import_export_rules(&self) -> Vec<ImportExportRule> {
        self.state.read().import_export_rules.clone()
    }

    /// Rules that apply to shipments bound for `country_code`
    pub fn rules_for_country(&self, country_code: &str) -> Vec<ImportExportRule> {
        self.state
            .read()
            .import_export_rules
            .iter()
            .filter(|r| r.country_code.eq_ignore_ascii_case(country_code))
            .cloned()
            .collect()
    }

    fn filtered(&self, predicate: impl Fn(&Shipment) -> bool) -> Vec<Shipment> {
        self.state
            .read()
            .shipments
            .values()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }

    // ==================== Writes ====================

    /// Apply an action. Returns the affected shipment, or `None` for `Clear`.
    pub fn dispatch(&self, action: ShipmentAction) -> Result<Option<Shipment>> {
        debug!(
            action = action.name(),
            shipment_id = action.shipment_id().unwrap_or("-"),
            "Dispatching store action"
        );

        let mut events = Vec::new();
        let result = {
            let mut state = self.state.write();
            state.apply(action, &mut events)
        };
        self.publish(events);
        result
    }

    /// Replace the cached shipments wholesale
    pub fn replace_all(&self, shipments: impl IntoIterator<Item = Shipment>) {
        let count = {
            let mut state = self.state.write();
            state.shipments = shipments
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect();
            state.shipments.len()
        };
        info!(shipments = count, "Shipment cache replaced");
        self.publish(vec![StoreEvent::Replaced { count }]);
    }

    /// Drop the cached shipments but keep notifications and messages
    pub fn reset_shipments_only(&self) {
        let dropped = {
            let mut state = self.state.write();
            let dropped = state.shipments.len();
            state.shipments.clear();
            dropped
        };
        info!(shipments = dropped, "Shipment cache reset");
        self.publish(vec![StoreEvent::ShipmentsReset]);
    }

    /// Add a chat message, or merge it into the stored one with the same id
    pub fn add_message(&self, message: ChatMessage) -> ChatMessage {
        let stored = {
            let mut state = self.state.write();
            match state.messages.iter().position(|m| m.id == message.id) {
                Some(index) => {
                    let existing = &mut state.messages[index];
                    existing.merge(message);
                    existing.clone()
                }
                None => {
                    state.messages.push(message.clone());
                    message
                }
            }
        };
        self.publish(vec![StoreEvent::MessageAdded(stored.clone())]);
        stored
    }

    /// Replace a shipment's whole chat thread, e.g. after fetching it again.
    /// Every message must belong to `shipment_id`.
    pub fn set_messages_for_shipment(
        &self,
        shipment_id: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<usize> {
        if let Some(stray) = messages.iter().find(|m| m.shipment_id != shipment_id) {
            return Err(PreclearError::bad_request(format!(
                "Message {} belongs to shipment {}, not {}",
                stray.id, stray.shipment_id, shipment_id
            )));
        }

        let count = messages.len();
        {
            let mut state = self.state.write();
            state.messages.retain(|m| m.shipment_id != shipment_id);
            state.messages.extend(messages);
        }
        self.publish(vec![StoreEvent::MessagesReplaced {
            shipment_id: shipment_id.to_string(),
            count,
        }]);
        Ok(count)
    }

    /// Mark the messages `reader` received on a thread as read. Returns how
    /// many changed.
    pub fn mark_messages_read(&self, shipment_id: &str, reader: Role) -> usize {
        let mut count = 0;
        {
            let mut state = self.state.write();
            let unread = state
                .messages
                .iter_mut()
                .filter(|m| m.shipment_id == shipment_id && m.sender != reader && !m.read);
            for message in unread {
                message.read = true;
                count += 1;
            }
        }
        if count > 0 {
            self.publish(vec![StoreEvent::MessagesRead {
                shipment_id: shipment_id.to_string(),
                reader,
                count,
            }]);
        }
        count
    }

    pub fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let mut state = self.state.write();
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| {
                PreclearError::not_found(format!("Notification not found: {}", notification_id))
            })?;
        notification.read = true;
        Ok(())
    }

    pub fn clear_notifications(&self) {
        self.state.write().notifications.clear();
    }

    // ==================== Import/export rules ====================

    /// Add a rule. An empty id gets a generated one; a taken id is a conflict.
    pub fn add_import_export_rule(&self, mut rule: ImportExportRule) -> Result<ImportExportRule> {
        validate_rule(&rule)?;
        if rule.id.trim().is_empty() {
            rule.id = format!("rule-{}", Uuid::new_v4());
        }
        rule.last_updated = Some(Utc::now());

        {
            let mut state = self.state.write();
            if state.import_export_rules.iter().any(|r| r.id == rule.id) {
                return Err(PreclearError::conflict(format!(
                    "Import/export rule already exists: {}",
                    rule.id
                )));
            }
            state.import_export_rules.push(rule.clone());
        }
        info!(rule_id = %rule.id, country = %rule.country_code, "Import/export rule added");
        self.publish(vec![StoreEvent::RuleSaved {
            id: rule.id.clone(),
            created: true,
        }]);
        Ok(rule)
    }

    /// Replace the rule stored under `id`; the stored id is kept
    pub fn update_import_export_rule(
        &self,
        id: &str,
        mut rule: ImportExportRule,
    ) -> Result<ImportExportRule> {
        validate_rule(&rule)?;
        rule.id = id.to_string();
        rule.last_updated = Some(Utc::now());

        {
            let mut state = self.state.write();
            let slot = state
                .import_export_rules
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| rule_not_found(id))?;
            *slot = rule.clone();
        }
        debug!(rule_id = %id, "Import/export rule updated");
        self.publish(vec![StoreEvent::RuleSaved {
            id: rule.id.clone(),
            created: false,
        }]);
        Ok(rule)
    }

    pub fn delete_import_export_rule(&self, id: &str) -> Result<ImportExportRule> {
        let removed = {
            let mut state = self.state.write();
            let index = state
                .import_export_rules
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| rule_not_found(id))?;
            state.import_export_rules.remove(index)
        };
        info!(rule_id = %id, "Import/export rule deleted");
        self.publish(vec![StoreEvent::RuleRemoved { id: id.to_string() }]);
        Ok(removed)
    }

    /// Events are sent once the write lock is released. A send only fails
    /// when nobody is subscribed.
    fn publish(&self, events: Vec<StoreEvent>) {
        for event in events {
            let _ = self.event_sender.send(event);
        }
    }
}

impl Default for ShipmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    fn shipment_mut(&mut self, id: &str) -> Result<&mut Shipment> {
        self.shipments
            .get_mut(id)
            .ok_or_else(|| PreclearError::not_found(format!("Shipment not found: {}", id)))
    }

    fn notify(&mut self, events: &mut Vec<StoreEvent>, notification: Notification) {
        events.push(StoreEvent::NotificationAdded(notification.clone()));
        self.notifications.push(notification);
    }

    fn post(&mut self, events: &mut Vec<StoreEvent>, message: ChatMessage) {
        events.push(StoreEvent::MessageAdded(message.clone()));
        self.messages.push(message);
    }

    fn apply(
        &mut self,
        action: ShipmentAction,
        events: &mut Vec<StoreEvent>,
    ) -> Result<Option<Shipment>> {
        let now = Utc::now();

        match action {
            ShipmentAction::Save { shipment } => self.save(*shipment, now, events).map(Some),

            ShipmentAction::Remove { id } => {
                let removed = self
                    .shipments
                    .remove(&id)
                    .ok_or_else(|| PreclearError::not_found(format!("Shipment not found: {}", id)))?;
                events.push(StoreEvent::ShipmentRemoved { id });
                Ok(Some(removed))
            }

            ShipmentAction::Clear => {
                self.shipments.clear();
                self.notifications.clear();
                self.messages.clear();
                events.push(StoreEvent::Cleared);
                Ok(None)
            }

            ShipmentAction::UpdateStatus { id, status } => {
                let shipment = self.shipment_mut(&id)?;
                shipment.status = status;
                Ok(Some(touch(shipment, now, events)))
            }

            ShipmentAction::RecordAiResult {
                id,
                approved,
                score,
            } => {
                let shipment = self.shipment_mut(&id)?;
                shipment.ai_score = score;
                shipment.ai_evaluated_at = Some(now);
                if approved {
                    shipment.ai_approval = AiApproval::Approved;
                    shipment.status = ShipmentStatus::AiApproved;
                } else {
                    shipment.ai_approval = AiApproval::Rejected;
                    shipment.status = ShipmentStatus::Denied;
                }
                Ok(Some(touch(shipment, now, events)))
            }

            ShipmentAction::RequestBrokerApproval { id } => {
                let shipment = self.shipment_mut(&id)?;
                if shipment.ai_approval != AiApproval::Approved {
                    return Err(PreclearError::conflict(format!(
                        "Shipment {} has not passed the AI compliance check",
                        id
                    )));
                }
                shipment.broker_approval = BrokerApproval::Pending;
                shipment.status = ShipmentStatus::AwaitingBroker;
                let saved = touch(shipment, now, events);

                self.notify(
                    events,
                    Notification::new(
                        NotificationKind::BrokerApprovalRequest,
                        Role::Broker,
                        &saved.id,
                        "New Broker Approval Request",
                        format!("{}: {} - Ready for review", saved.id, display_name(&saved)),
                    ),
                );
                Ok(Some(saved))
            }

            ShipmentAction::BrokerApprove { id, notes } => {
                let token = generate_token();
                let shipment = self.shipment_mut(&id)?;
                shipment.broker_approval = BrokerApproval::Approved;
                shipment.broker_reviewed_at = Some(now);
                shipment.broker_notes = notes;
                shipment.token = Some(token.clone());
                shipment.token_generated_at = Some(now);
                shipment.status = ShipmentStatus::TokenGenerated;
                let saved = touch(shipment, now, events);

                info!(shipment_id = %saved.id, token = %token, "Pre-clear token issued");
                self.notify(
                    events,
                    Notification::new(
                        NotificationKind::BrokerApproved,
                        Role::Shipper,
                        &saved.id,
                        "Broker Approved Your Shipment",
                        format!("{}: Token generated - {}", saved.id, token),
                    ),
                );
                Ok(Some(saved))
            }

            ShipmentAction::BrokerDeny { id, reason } => {
                let shipment = self.shipment_mut(&id)?;
                shipment.broker_approval = BrokerApproval::Rejected;
                shipment.broker_reviewed_at = Some(now);
                shipment.broker_notes = Some(reason.clone());
                shipment.status = ShipmentStatus::Denied;
                let saved = touch(shipment, now, events);

                self.post(
                    events,
                    ChatMessage::from_broker(
                        &saved.id,
                        MessageKind::System,
                        format!("Shipment denied: {}", reason),
                    ),
                );
                Ok(Some(saved))
            }

            ShipmentAction::BrokerRequestDocuments {
                id,
                documents,
                message,
            } => {
                if documents.is_empty() {
                    return Err(PreclearError::bad_request(
                        "At least one document must be requested",
                    ));
                }
                let shipment = self.shipment_mut(&id)?;
                shipment.broker_approval = BrokerApproval::DocumentsRequested;
                shipment.broker_reviewed_at = Some(now);
                shipment.broker_notes = Some(message.clone());
                shipment.status = ShipmentStatus::DocumentRequested;
                for doc in &documents {
                    request_document(shipment, doc, now);
                }
                let saved = touch(shipment, now, events);

                let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
                self.post(
                    events,
                    ChatMessage::from_broker(
                        &saved.id,
                        MessageKind::DocumentRequest,
                        format!("Documents requested: {}. {}", names.join(", "), message),
                    ),
                );
                Ok(Some(saved))
            }

            ShipmentAction::UploadDocument { id, name, doc_type } => {
                if name.trim().is_empty() {
                    return Err(PreclearError::bad_request("Document name is required"));
                }
                let shipment = self.shipment_mut(&id)?;
                match shipment.document_mut(&name) {
                    Some(doc) => {
                        doc.uploaded = true;
                        doc.uploaded_at = Some(now);
                    }
                    None => shipment.documents.push(DocumentEntry {
                        name,
                        doc_type,
                        uploaded: true,
                        uploaded_at: Some(now),
                        ..Default::default()
                    }),
                }

                let requests_satisfied = shipment
                    .documents
                    .iter()
                    .filter(|d| d.requested)
                    .all(|d| d.uploaded);
                // Status stays `document-requested`; the shipper picks the next step
                let ready_for_review =
                    requests_satisfied && shipment.status == ShipmentStatus::DocumentRequested;
                let saved = touch(shipment, now, events);

                if ready_for_review {
                    self.notify(
                        events,
                        Notification::new(
                            NotificationKind::DocumentsRequested,
                            Role::Shipper,
                            &saved.id,
                            "Documents Uploaded",
                            format!(
                                "All requested documents uploaded for shipment {}. You can now re-run AI check or send to broker.",
                                saved.id
                            ),
                        ),
                    );
                }
                Ok(Some(saved))
            }

            ShipmentAction::Book {
                id,
                booking_date,
                estimated_delivery,
                amount,
            } => {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(PreclearError::bad_request(format!(
                        "Invalid payment amount: {}",
                        amount
                    )));
                }
                let shipment = self.shipment_mut(&id)?;
                if shipment.token.is_none() {
                    return Err(PreclearError::conflict(format!(
                        "Shipment {} has no pre-clear token",
                        id
                    )));
                }
                shipment.booking_date = booking_date;
                shipment.estimated_delivery = estimated_delivery;
                shipment.payment_amount = Some(amount);
                shipment.payment_status = Some(PaymentStatus::Pending);
                shipment.status = ShipmentStatus::ReadyForBooking;
                Ok(Some(touch(shipment, now, events)))
            }

            ShipmentAction::CompletePayment { id } => {
                let shipment = self.shipment_mut(&id)?;
                shipment.payment_status = Some(PaymentStatus::Completed);
                shipment.payment_date = Some(now);
                shipment.booking_date = Some(now);
                shipment.status = ShipmentStatus::PaymentCompleted;
                Ok(Some(touch(shipment, now, events)))
            }
        }
    }

    fn save(
        &mut self,
        mut shipment: Shipment,
        now: DateTime<Utc>,
        events: &mut Vec<StoreEvent>,
    ) -> Result<Shipment> {
        if shipment.id.trim().is_empty() {
            return Err(PreclearError::bad_request("Shipment id is required"));
        }

        let created = !self.shipments.contains_key(&shipment.id);
        shipment.updated_at = Some(now);
        if shipment.created_at.is_none() {
            shipment.created_at = Some(now);
        }
        self.shipments.insert(shipment.id.clone(), shipment.clone());
        events.push(StoreEvent::ShipmentSaved {
            id: shipment.id.clone(),
            status: shipment.status,
            created,
        });

        if created {
            let origin = route_end(
                shipment.shipper.as_ref().and_then(|p| p.country.as_deref()),
                shipment.origin_country.as_deref(),
            );
            let destination = route_end(
                shipment.consignee.as_ref().and_then(|p| p.country.as_deref()),
                shipment.dest_country.as_deref(),
            );
            let message = format!(
                "{}: {} - {} → {}",
                shipment.id,
                display_name(&shipment),
                origin,
                destination
            );
            self.notify(
                events,
                Notification::new(
                    NotificationKind::ShipmentCreated,
                    Role::Broker,
                    &shipment.id,
                    "New Shipment Created",
                    message,
                ),
            );
        }
        Ok(shipment)
    }
}

/// Stamp `updatedAt`, record the save event and hand back a snapshot
fn validate_rule(rule: &ImportExportRule) -> Result<()> {
    if rule.country_code.trim().is_empty() {
        return Err(PreclearError::bad_request("Import/export rule needs a countryCode"));
    }
    if rule.product_category.trim().is_empty() {
        return Err(PreclearError::bad_request(
            "Import/export rule needs a productCategory",
        ));
    }
    let limits = [rule.max_value, rule.max_weight];
    if limits.into_iter().flatten().any(|limit| !limit.is_finite() || limit < 0.0) {
        return Err(PreclearError::bad_request(
            "Import/export rule limits must be non-negative numbers",
        ));
    }
    Ok(())
}

fn rule_not_found(id: &str) -> PreclearError {
    PreclearError::not_found(format!("Import/export rule not found: {}", id))
}

fn touch(shipment: &mut Shipment, now: DateTime<Utc>, events: &mut Vec<StoreEvent>) -> Shipment {
    shipment.updated_at = Some(now);
    events.push(StoreEvent::ShipmentSaved {
        id: shipment.id.clone(),
        status: shipment.status,
        created: false,
    });
    shipment.clone()
}

fn request_document(shipment: &mut Shipment, doc: &RequestedDocument, now: DateTime<Utc>) {
    match shipment.document_mut(&doc.name) {
        Some(existing) => {
            existing.requested = true;
            existing.requested_at = Some(now);
        }
        None => shipment.documents.push(DocumentEntry {
            name: doc.name.clone(),
            doc_type: doc.doc_type.clone(),
            requested: true,
            requested_at: Some(now),
            ..Default::default()
        }),
    }
}

fn display_name(shipment: &Shipment) -> &str {
    shipment
        .product_name
        .as_deref()
        .or(shipment.title.as_deref())
        .unwrap_or("Shipment")
}

fn route_end<'a>(party_country: Option<&'a str>, explicit: Option<&'a str>) -> &'a str {
    party_country
        .filter(|c| !c.trim().is_empty())
        .or(explicit.filter(|c| !c.trim().is_empty()))
        .unwrap_or("unknown")
}
