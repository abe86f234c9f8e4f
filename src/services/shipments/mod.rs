//! Shipment store
//!
//! Typed state container for shipments, their notifications, chat threads
//! and the import/export rules. Shipment mutations go through
//! [`ShipmentAction`]s; changes are broadcast as [`StoreEvent`]s.

mod actions;
mod events;
mod store;
mod token;
mod types;


pub use actions::ShipmentAction;
pub use events::StoreEvent;
pub use store::{DEFAULT_EVENT_CAPACITY, ShipmentStore};
pub use token::{TOKEN_PREFIX, generate_token, is_valid_token};
pub use types::{
    BROKER_DESK_NAME, ChatMessage, ImportExportRule, MessageKind, Notification, NotificationKind,
    RequestedDocument,
};
