//! Common test utilities for preclear
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::ShipmentFactory;
//!
//! let shipment = ShipmentFactory::create("SHP-100");
//! ```

pub mod fixtures;

pub use fixtures::ShipmentFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

/// Assert two amounts agree to the cent
#[macro_export]
macro_rules! assert_amount {
    ($actual:expr, $expected:expr) => {
        let (actual, expected): (f64, f64) = ($actual, $expected);
        assert!(
            (actual - expected).abs() < 0.005,
            "amount mismatch: {} != {}",
            actual,
            expected
        );
    };
}
