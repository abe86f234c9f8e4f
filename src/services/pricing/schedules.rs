//! Built-in fee tables and table lookups

use super::types::{ClearanceFeeSchedule, DEFAULT_SCHEDULE_KEY, FeeSchedules};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

const INDIA: ClearanceFeeSchedule = ClearanceFeeSchedule::new(50.0, 10_000.0, 2_000.0, 100.0, 1_500.0);
const UNITED_STATES: ClearanceFeeSchedule = ClearanceFeeSchedule::new(0.0, 800.0, 35.0, 5.0, 25.0);
const EUROPE: ClearanceFeeSchedule = ClearanceFeeSchedule::new(20.0, 150.0, 40.0, 5.0, 30.0);

/// Schedule applied to destinations without their own entry
pub const DEFAULT_CLEARANCE: ClearanceFeeSchedule =
    ClearanceFeeSchedule::new(30.0, 100.0, 50.0, 5.0, 30.0);

/// Pickup charge for origins without their own entry
pub const DEFAULT_PICKUP_CHARGE: f64 = 50.0;

const EUROPEAN_DESTINATIONS: [&str; 7] = ["GB", "FR", "DE", "IT", "ES", "NL", "BE"];

const PICKUP_CHARGES: [(&str, f64); 16] = [
    ("IN", 250.0),
    ("US", 35.0),
    ("GB", 25.0),
    ("FR", 28.0),
    ("DE", 30.0),
    ("IT", 27.0),
    ("ES", 26.0),
    ("NL", 32.0),
    ("BE", 29.0),
    ("CN", 40.0),
    ("JP", 50.0),
    ("SG", 45.0),
    ("AU", 55.0),
    ("CA", 40.0),
    ("MX", 38.0),
    ("BR", 42.0),
];

static BUILTIN: Lazy<FeeSchedules> = Lazy::new(|| {
    let mut clearance = BTreeMap::new();
    clearance.insert("IN".to_string(), INDIA);
    clearance.insert("US".to_string(), UNITED_STATES);
    for code in EUROPEAN_DESTINATIONS {
        clearance.insert(code.to_string(), EUROPE);
    }
    clearance.insert(DEFAULT_SCHEDULE_KEY.to_string(), DEFAULT_CLEARANCE);

    let mut pickup: BTreeMap<String, f64> = PICKUP_CHARGES
        .iter()
        .map(|(code, charge)| (code.to_string(), *charge))
        .collect();
    pickup.insert(DEFAULT_SCHEDULE_KEY.to_string(), DEFAULT_PICKUP_CHARGE);

    FeeSchedules { clearance, pickup }
});

impl FeeSchedules {
    /// Shared built-in tables
    pub fn builtin() -> &'static FeeSchedules {
        &BUILTIN
    }

    /// Copy of the built-in tables with `clearance` and `pickup` entries
    /// replacing or extending them. Replacing a built-in value logs a warning.
    pub fn with_overrides(
        clearance: &HashMap<String, ClearanceFeeSchedule>,
        pickup: &HashMap<String, f64>,
    ) -> Self {
        let mut schedules = BUILTIN.clone();
        for (code, schedule) in clearance {
            let key = table_key(code);
            if let Some(builtin) = schedules.clearance.insert(key.clone(), *schedule) {
                if builtin != *schedule {
                    warn!(
                        country = %key,
                        builtin = ?builtin,
                        configured = ?schedule,
                        "Clearance override replaces built-in schedule"
                    );
                }
            }
        }
        for (code, charge) in pickup {
            let key = table_key(code);
            if let Some(builtin) = schedules.pickup.insert(key.clone(), *charge) {
                if builtin != *charge {
                    warn!(
                        country = %key,
                        builtin,
                        configured = *charge,
                        "Pickup override replaces built-in charge"
                    );
                }
            }
        }
        schedules
    }

    /// Table keys whose configured value differs from the built-in one
    pub fn replaced_builtin_keys(&self) -> Vec<String> {
        let clearance = self
            .clearance
            .iter()
            .filter(|(key, schedule)| {
                BUILTIN
                    .clearance
                    .get(*key)
                    .is_some_and(|builtin| builtin != *schedule)
            })
            .map(|(key, _)| format!("clearance.{key}"));
        let pickup = self
            .pickup
            .iter()
            .filter(|(key, charge)| {
                BUILTIN
                    .pickup
                    .get(*key)
                    .is_some_and(|builtin| builtin != *charge)
            })
            .map(|(key, _)| format!("pickup.{key}"));
        clearance.chain(pickup).collect()
    }

    /// Clearance schedule for a destination code, falling back to `default`.
    ///
    /// The code is only uppercased. Country names must be resolved by the
    /// caller; an unresolved name prices with the `default` schedule.
    pub fn clearance_schedule(&self, dest_country: &str) -> ClearanceFeeSchedule {
        self.clearance
            .get(&dest_country.to_uppercase())
            .or_else(|| self.clearance.get(DEFAULT_SCHEDULE_KEY))
            .copied()
            .unwrap_or(DEFAULT_CLEARANCE)
    }

    /// Flat pickup charge for an origin code, falling back to `default`
    pub fn pickup_rate(&self, origin_country: &str) -> f64 {
        self.pickup
            .get(&origin_country.to_uppercase())
            .or_else(|| self.pickup.get(DEFAULT_SCHEDULE_KEY))
            .copied()
            .unwrap_or(DEFAULT_PICKUP_CHARGE)
    }
}

impl Default for FeeSchedules {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Normalize a configured table key: `default` stays lowercase, codes are uppercased
pub(crate) fn table_key(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.eq_ignore_ascii_case(DEFAULT_SCHEDULE_KEY) {
        DEFAULT_SCHEDULE_KEY.to_string()
    } else {
        trimmed.to_ascii_uppercase()
    }
}
