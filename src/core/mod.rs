//! Core domain types shared by the pricing service, the shipment store and the API
//!
//! Nothing in here does I/O.

pub mod country;
pub mod types;
