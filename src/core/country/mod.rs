//! Country code resolution
//!
//! User-entered country values arrive either as ISO-style codes ("US") or as
//! display names ("United States"). Fee schedules are keyed by code, so every
//! lookup goes through [`resolve_country_code`] first.

mod currency;

#[cfg(test)]
mod tests;

pub use currency::{Currency, currency_for_country, currency_info, format_currency};

/// Countries offered by the shipment form, as `(code, name)` pairs
pub const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("MX", "Mexico"),
    ("BR", "Brazil"),
    ("AR", "Argentina"),
    ("GB", "United Kingdom"),
    ("IE", "Ireland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("ES", "Spain"),
    ("PT", "Portugal"),
    ("IT", "Italy"),
    ("CH", "Switzerland"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("DK", "Denmark"),
    ("FI", "Finland"),
    ("PL", "Poland"),
    ("CN", "China"),
    ("IN", "India"),
    ("HK", "Hong Kong"),
    ("TW", "Taiwan"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("SG", "Singapore"),
    ("MY", "Malaysia"),
    ("TH", "Thailand"),
    ("VN", "Vietnam"),
    ("PH", "Philippines"),
    ("ID", "Indonesia"),
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("AE", "United Arab Emirates"),
    ("SA", "Saudi Arabia"),
    ("QA", "Qatar"),
    ("ZA", "South Africa"),
    ("KE", "Kenya"),
    ("NG", "Nigeria"),
];

/// Normalize a user-entered country value to its code.
///
/// Known codes and names match case-insensitively. Anything else is returned
/// trimmed and uppercased so that table lookups stay deterministic; an empty
/// input stays empty.
pub fn resolve_country_code(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some((code, _)) = COUNTRIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(trimmed))
    {
        return (*code).to_string();
    }

    if let Some((code, _)) = COUNTRIES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
    {
        return (*code).to_string();
    }

    trimmed.to_uppercase()
}

/// Display name for a country code
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, name)| *name)
}

/// Whether the code is one of the known countries
pub fn is_known_country(code: &str) -> bool {
    country_name(code).is_some()
}
