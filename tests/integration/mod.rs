//! Integration tests for preclear
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod api_tests;
pub mod config_tests;
pub mod pricing_tests;
pub mod store_workflow_tests;
