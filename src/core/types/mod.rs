//! Core type definition module
//!
//! Shipment records as exchanged with the brokerage backend.

mod de;
pub mod shipment;
pub mod workflow;

// Re-export all public types
pub use shipment::*;
pub use workflow::*;
