//! Lenient deserializers for loosely typed JSON fields
//!
//! The shipment form sends some numbers as strings (`"value": "5000"`) and
//! others as numbers; both shapes must land in the same field.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
    Bool(bool),
}

/// Deserialize an optional number that may be encoded as a string.
///
/// Blank or unparsable strings become `None`.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrString::Number(n)) if n.is_finite() => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}
