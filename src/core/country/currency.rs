//! Currency lookup and formatting

use serde::Serialize;

/// Currency metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
    /// English name
    pub name: &'static str,
    /// Minor unit digits shown when formatting
    #[serde(skip)]
    pub decimals: usize,
}

const fn currency(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    decimals: usize,
) -> Currency {
    Currency {
        code,
        symbol,
        name,
        decimals,
    }
}

const USD: Currency = currency("USD", "$", "US Dollar", 2);
const EUR: Currency = currency("EUR", "€", "Euro", 2);

const CURRENCIES: &[Currency] = &[
    USD,
    EUR,
    currency("GBP", "£", "British Pound", 2),
    currency("INR", "₹", "Indian Rupee", 2),
    currency("CNY", "CN¥", "Chinese Yuan", 2),
    currency("JPY", "¥", "Japanese Yen", 0),
    currency("CAD", "CA$", "Canadian Dollar", 2),
    currency("AUD", "A$", "Australian Dollar", 2),
    currency("SGD", "S$", "Singapore Dollar", 2),
    currency("CHF", "CHF", "Swiss Franc", 2),
    currency("MXN", "MX$", "Mexican Peso", 2),
    currency("BRL", "R$", "Brazilian Real", 2),
    currency("ARS", "ARS", "Argentine Peso", 2),
    currency("SEK", "SEK", "Swedish Krona", 2),
    currency("NOK", "NOK", "Norwegian Krone", 2),
    currency("DKK", "DKK", "Danish Krone", 2),
    currency("PLN", "PLN", "Polish Zloty", 2),
    currency("HKD", "HK$", "Hong Kong Dollar", 2),
    currency("TWD", "NT$", "New Taiwan Dollar", 2),
    currency("KRW", "₩", "South Korean Won", 0),
    currency("MYR", "MYR", "Malaysian Ringgit", 2),
    currency("THB", "THB", "Thai Baht", 2),
    currency("VND", "₫", "Vietnamese Dong", 0),
    currency("PHP", "₱", "Philippine Peso", 2),
    currency("IDR", "IDR", "Indonesian Rupiah", 2),
    currency("NZD", "NZ$", "New Zealand Dollar", 2),
    currency("AED", "AED", "UAE Dirham", 2),
    currency("SAR", "SAR", "Saudi Riyal", 2),
    currency("QAR", "QAR", "Qatari Riyal", 2),
    currency("ZAR", "ZAR", "South African Rand", 2),
    currency("KES", "KES", "Kenyan Shilling", 2),
    currency("NGN", "₦", "Nigerian Naira", 2),
];

/// Look up a currency by its ISO code
pub fn currency_info(code: &str) -> Option<Currency> {
    let code = code.trim();
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Currency used in a country; unknown countries price in US dollars
pub fn currency_for_country(country: &str) -> Currency {
    let code = super::resolve_country_code(country);
    let currency_code = match code.as_str() {
        "US" => "USD",
        "CA" => "CAD",
        "MX" => "MXN",
        "BR" => "BRL",
        "AR" => "ARS",
        "GB" => "GBP",
        "IE" | "FR" | "DE" | "NL" | "BE" | "ES" | "PT" | "IT" | "FI" => "EUR",
        "CH" => "CHF",
        "SE" => "SEK",
        "NO" => "NOK",
        "DK" => "DKK",
        "PL" => "PLN",
        "CN" => "CNY",
        "IN" => "INR",
        "HK" => "HKD",
        "TW" => "TWD",
        "JP" => "JPY",
        "KR" => "KRW",
        "SG" => "SGD",
        "MY" => "MYR",
        "TH" => "THB",
        "VN" => "VND",
        "PH" => "PHP",
        "ID" => "IDR",
        "AU" => "AUD",
        "NZ" => "NZD",
        "AE" => "AED",
        "SA" => "SAR",
        "QA" => "QAR",
        "ZA" => "ZAR",
        "KE" => "KES",
        "NG" => "NGN",
        _ => return USD,
    };

    currency_info(currency_code).unwrap_or(USD)
}

/// Format an amount for display, e.g. `$1,234.50`.
///
/// Unknown currency codes fall back to `1,234.50 XYZ`.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    match currency_info(currency_code) {
        Some(currency) => {
            let digits = group_thousands(amount.abs(), currency.decimals);
            let sign = if amount < 0.0 && digits.chars().any(|c| c != '0' && c.is_ascii_digit()) {
                "-"
            } else {
                ""
            };
            // Alphabetic symbols read better separated from the amount
            let separator = if currency.symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                " "
            } else {
                ""
            };
            format!("{}{}{}{}", sign, currency.symbol, separator, digits)
        }
        None => {
            let digits = group_thousands(amount.abs(), 2);
            let sign = if amount < 0.0 { "-" } else { "" };
            format!("{}{} {}", sign, digits, currency_code.trim().to_uppercase())
        }
    }
}

fn group_thousands(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount);
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), Some(fraction.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}
