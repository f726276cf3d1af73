//! Currency catalog and en-US currency formatting.
//!
//! The catalog ([`currencies`]) is the fixed list offered in selection UI.
//! The formatter ([`format_currency`]) keeps its own ISO 4217 table of display
//! symbols and fraction digits; the two are independent and a catalog code is
//! not guaranteed to be formattable, nor the other way around.
//!
//! Output always follows en-US punctuation (`,` grouping, `.` decimal point),
//! whatever the currency's home region.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

/// Currency used when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A supported currency as shown in selection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn currency(code: &'static str, symbol: &'static str, name: &'static str) -> Currency {
    Currency { code, symbol, name }
}

static CATALOG: [Currency; 12] = [
    currency("USD", "$", "US Dollar"),
    currency("EUR", "€", "Euro"),
    currency("GBP", "£", "British Pound"),
    currency("EGP", "E£", "Egyptian Pound"),
    currency("SAR", "SAR", "Saudi Riyal"),
    currency("AED", "AED", "UAE Dirham"),
    currency("KWD", "KWD", "Kuwaiti Dinar"),
    currency("QAR", "QAR", "Qatari Riyal"),
    currency("BHD", "BHD", "Bahraini Dinar"),
    currency("OMR", "OMR", "Omani Rial"),
    currency("JOD", "JOD", "Jordanian Dinar"),
    currency("TRY", "₺", "Turkish Lira"),
];

static CATALOG_BY_CODE: LazyLock<BTreeMap<&'static str, &'static Currency>> =
    LazyLock::new(|| CATALOG.iter().map(|c| (c.code, c)).collect());

/// Returns the supported currencies in declaration order.
pub fn currencies() -> &'static [Currency] {
    &CATALOG
}

/// Looks up a catalog entry by its exact code.
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    CATALOG_BY_CODE.get(code).copied()
}

/// Returns true if `code` is one of the catalog codes.
pub fn is_supported(code: &str) -> bool {
    CATALOG_BY_CODE.contains_key(code)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("unsupported currency code: {0}")]
    UnsupportedCode(String),
}

/// Display symbol and minor-unit digits used by the formatter.
struct FormatRule {
    symbol: &'static str,
    digits: usize,
}

const fn rule(symbol: &'static str, digits: usize) -> FormatRule {
    FormatRule { symbol, digits }
}

// en-US display symbols; codes without a localized symbol render as the code.
static FORMAT_RULES: LazyLock<BTreeMap<&'static str, FormatRule>> = LazyLock::new(|| {
    BTreeMap::from([
        ("AED", rule("AED", 2)),
        ("AUD", rule("A$", 2)),
        ("BHD", rule("BHD", 3)),
        ("BRL", rule("R$", 2)),
        ("CAD", rule("CA$", 2)),
        ("CHF", rule("CHF", 2)),
        ("CNY", rule("CN¥", 2)),
        ("DKK", rule("DKK", 2)),
        ("DZD", rule("DZD", 2)),
        ("EGP", rule("EGP", 2)),
        ("EUR", rule("€", 2)),
        ("GBP", rule("£", 2)),
        ("HKD", rule("HK$", 2)),
        ("IDR", rule("IDR", 2)),
        ("ILS", rule("₪", 2)),
        ("INR", rule("₹", 2)),
        ("IQD", rule("IQD", 0)),
        ("JOD", rule("JOD", 3)),
        ("JPY", rule("¥", 0)),
        ("KRW", rule("₩", 0)),
        ("KWD", rule("KWD", 3)),
        ("LBP", rule("LBP", 0)),
        ("LYD", rule("LYD", 3)),
        ("MAD", rule("MAD", 2)),
        ("MXN", rule("MX$", 2)),
        ("NOK", rule("NOK", 2)),
        ("NZD", rule("NZ$", 2)),
        ("OMR", rule("OMR", 3)),
        ("PHP", rule("₱", 2)),
        ("PKR", rule("PKR", 2)),
        ("PLN", rule("PLN", 2)),
        ("QAR", rule("QAR", 2)),
        ("RUB", rule("RUB", 2)),
        ("SAR", rule("SAR", 2)),
        ("SEK", rule("SEK", 2)),
        ("SGD", rule("SGD", 2)),
        ("THB", rule("THB", 2)),
        ("TND", rule("TND", 3)),
        ("TRY", rule("TRY", 2)),
        ("TWD", rule("NT$", 2)),
        ("USD", rule("$", 2)),
        ("VND", rule("₫", 0)),
        ("XAF", rule("FCFA", 0)),
        ("ZAR", rule("ZAR", 2)),
    ])
});

/// Formats `amount` as a currency string using en-US conventions.
///
/// `code` is matched case-insensitively against the formatter's ISO 4217
/// table. The catalog is not consulted, so callers should restrict input to
/// catalog codes.
///
/// # Errors
///
/// Returns [`CurrencyError::UnsupportedCode`] if the formatter does not
/// recognize `code`.
///
/// # Examples
///
/// ```
/// use clinic_dashboard::utils::currency::format_currency;
///
/// assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
/// assert!(format_currency(100.0, "ZZZ").is_err());
/// ```
pub fn format_currency(amount: f64, code: &str) -> Result<String, CurrencyError> {
    let normalized = code.to_ascii_uppercase();
    let rule = FORMAT_RULES
        .get(normalized.as_str())
        .ok_or_else(|| CurrencyError::UnsupportedCode(code.to_string()))?;

    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };

    let number = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "∞".to_string()
    } else {
        // Display for f64 is the shortest round-trip decimal and never uses exponents.
        let (integer, fraction) = round_decimal(&amount.abs().to_string(), rule.digits);
        if fraction.is_empty() {
            group_thousands(&integer)
        } else {
            format!("{}.{}", group_thousands(&integer), fraction)
        }
    };

    let separator = if rule.symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        "\u{a0}"
    } else {
        ""
    };

    Ok(format!("{sign}{}{separator}{number}", rule.symbol))
}

/// Rounds a plain decimal string half away from zero to `digits` fraction digits.
fn round_decimal(decimal: &str, digits: usize) -> (String, String) {
    let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));

    if fraction.len() <= digits {
        return (integer.to_string(), format!("{fraction:0<digits$}"));
    }

    let round_up = fraction.as_bytes()[digits] >= b'5';
    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let text = String::from_utf8_lossy(&kept).into_owned();
    (text[..split].to_string(), text[split..].to_string())
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_usd_grouping_and_padding() {
        assert_eq!(format_currency(1234.5, "USD").unwrap(), "$1,234.50");
    }

    #[test]
    fn test_format_eur_zero() {
        assert_eq!(format_currency(0.0, "EUR").unwrap(), "€0.00");
    }

    #[test]
    fn test_format_negative_alphabetic_symbol() {
        assert_eq!(format_currency(-5.0, "SAR").unwrap(), "-SAR\u{a0}5.00");
    }

    #[test]
    fn test_format_keeps_en_us_separators_for_any_currency() {
        assert_eq!(
            format_currency(1234567.891, "EGP").unwrap(),
            "EGP\u{a0}1,234,567.89"
        );
        assert_eq!(format_currency(9876.5, "EUR").unwrap(), "€9,876.50");
    }

    #[test]
    fn test_format_unknown_code_fails() {
        assert_eq!(
            format_currency(100.0, "ZZZ"),
            Err(CurrencyError::UnsupportedCode("ZZZ".to_string()))
        );
        assert!(format_currency(100.0, "").is_err());
    }

    #[test]
    fn test_format_code_is_case_insensitive() {
        assert_eq!(format_currency(10.0, "usd").unwrap(), "$10.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_currency(1.005, "USD").unwrap(), "$1.01");
        assert_eq!(format_currency(999.995, "USD").unwrap(), "$1,000.00");
        assert_eq!(format_currency(-2.345, "USD").unwrap(), "-$2.35");
        assert_eq!(format_currency(1.004, "USD").unwrap(), "$1.00");
    }

    #[test]
    fn test_format_zero_and_three_digit_currencies() {
        assert_eq!(format_currency(1234.5, "JPY").unwrap(), "¥1,235");
        assert_eq!(format_currency(1.2345, "KWD").unwrap(), "KWD\u{a0}1.235");
        assert_eq!(format_currency(7.0, "BHD").unwrap(), "BHD\u{a0}7.000");
    }

    #[test]
    fn test_format_large_values() {
        assert_eq!(
            format_currency(1e15, "USD").unwrap(),
            "$1,000,000,000,000,000.00"
        );
    }

    #[test]
    fn test_format_negative_zero_keeps_sign() {
        assert_eq!(format_currency(-0.0, "USD").unwrap(), "-$0.00");
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let first: Vec<Currency> = currencies().to_vec();
        let second: Vec<Currency> = currencies().to_vec();
        assert_eq!(first, second);
        assert_eq!(first[0].code, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_catalog_codes_are_unique() {
        let codes: HashSet<&str> = currencies().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), currencies().len());
    }

    #[test]
    fn test_catalog_lookup() {
        let sar = find_currency("SAR").unwrap();
        assert_eq!(sar.name, "Saudi Riyal");
        assert!(is_supported("AED"));
        assert!(!is_supported("sar"));
        assert!(find_currency("ZZZ").is_none());
    }

    #[test]
    fn test_catalog_symbol_is_independent_of_formatter() {
        // The catalog shows E£ while the formatter renders the ISO code.
        assert_eq!(find_currency("EGP").unwrap().symbol, "E£");
        assert!(format_currency(1.0, "EGP").unwrap().starts_with("EGP"));
    }

    #[test]
    fn test_every_catalog_code_is_formattable() {
        for currency in currencies() {
            assert!(format_currency(1.0, currency.code).is_ok(), "{}", currency.code);
        }
    }
}
