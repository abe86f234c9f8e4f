//! Fee schedule overrides

use crate::services::pricing::ClearanceFeeSchedule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entries replacing or extending the built-in fee tables.
///
/// Keys are two-letter country codes or `default`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Destination code -> clearance schedule
    pub clearance: HashMap<String, ClearanceFeeSchedule>,
    /// Origin code -> flat pickup charge
    pub pickup: HashMap<String, f64>,
}

impl PricingConfig {
    /// True when nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.clearance.is_empty() && self.pickup.is_empty()
    }

    /// Merge override tables, with other taking precedence per code
    pub fn merge(mut self, other: Self) -> Self {
        self.clearance.extend(other.clearance);
        self.pickup.extend(other.pickup);
        self
    }
}
