//! Tests for country resolution and currency formatting

use super::*;

#[test]
fn test_resolve_known_code_any_case() {
    assert_eq!(resolve_country_code("US"), "US");
    assert_eq!(resolve_country_code("us"), "US");
    assert_eq!(resolve_country_code("  fr "), "FR");
}

#[test]
fn test_resolve_by_name() {
    assert_eq!(resolve_country_code("United States"), "US");
    assert_eq!(resolve_country_code("india"), "IN");
    assert_eq!(resolve_country_code("UNITED KINGDOM"), "GB");
}

#[test]
fn test_resolve_unknown_passes_through_uppercased() {
    assert_eq!(resolve_country_code("zz"), "ZZ");
    assert_eq!(resolve_country_code("Atlantis"), "ATLANTIS");
    assert_eq!(resolve_country_code(""), "");
    assert_eq!(resolve_country_code("   "), "");
}

#[test]
fn test_country_name() {
    assert_eq!(country_name("JP"), Some("Japan"));
    assert_eq!(country_name("jp"), Some("Japan"));
    assert_eq!(country_name("XX"), None);
    assert!(is_known_country("NG"));
    assert!(!is_known_country("default"));
}

#[test]
fn test_country_table_has_unique_codes() {
    let mut codes: Vec<&str> = COUNTRIES.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), COUNTRIES.len());
}

#[test]
fn test_currency_for_country() {
    assert_eq!(currency_for_country("US").code, "USD");
    assert_eq!(currency_for_country("Germany").code, "EUR");
    assert_eq!(currency_for_country("in").code, "INR");
    assert_eq!(currency_for_country("JP").symbol, "¥");
    assert_eq!(currency_for_country("ZZ").code, "USD");
    assert_eq!(currency_for_country("").code, "USD");
}

#[test]
fn test_currency_info() {
    let gbp = currency_info("gbp").unwrap();
    assert_eq!(gbp.symbol, "£");
    assert_eq!(gbp.name, "British Pound");
    assert!(currency_info("XYZ").is_none());
}

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(188.8, "USD"), "$188.80");
    assert_eq!(format_currency(0.0, "EUR"), "€0.00");
    assert_eq!(format_currency(1_000_000.0, "INR"), "₹1,000,000.00");
    assert_eq!(format_currency(1234.4, "JPY"), "¥1,234");
    assert_eq!(format_currency(99.0, "CHF"), "CHF 99.00");
}

#[test]
fn test_format_currency_negative_and_unknown() {
    assert_eq!(format_currency(-12.0, "USD"), "-$12.00");
    assert_eq!(format_currency(1234.5, "xyz"), "1,234.50 XYZ");
    assert_eq!(format_currency(f64::NAN, "USD"), "$0.00");
}
