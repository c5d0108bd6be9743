//! Display formatting for valuation outputs.
//!
//! Currency figures are thousands-separated with zero decimals,
//! percentages carry one decimal, multiples one decimal plus an "x"
//! suffix. These strings are what the presentation shell and exports
//! show verbatim.

use crate::domain::{Currency, Decimal};

/// Render `value` with exactly `dp` decimal places (no separators).
fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp).to_canonical_string();
    if dp == 0 {
        return rounded;
    }
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rounded, String::new()),
    };
    format!("{}.{:0<width$}", int_part, frac_part, width = dp as usize)
}

/// Thousands-separated integer rendering, e.g. 1234567.89 -> "1,234,568".
pub fn thousands(value: Decimal) -> String {
    let rounded = value.round_dp(0).to_canonical_string();
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Currency rendering: code prefix, thousands separators, zero decimals.
pub fn currency(currency: Currency, value: Decimal) -> String {
    format!("{} {}", currency.code(), thousands(value))
}

/// Percent rendering with one decimal, e.g. 0.25 -> "25.0%".
pub fn percent(value: Decimal) -> String {
    format!("{}%", fixed(value * Decimal::hundred(), 1))
}

/// Multiple rendering with one decimal, e.g. 4.77 -> "4.8x".
pub fn multiple(value: Decimal) -> String {
    format!("{}x", fixed(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(Decimal::from_int(0)), "0");
        assert_eq!(thousands(Decimal::from_int(999)), "999");
        assert_eq!(thousands(Decimal::from_int(1_000)), "1,000");
        assert_eq!(thousands(Decimal::from_int(10_000_000)), "10,000,000");
        assert_eq!(thousands(Decimal::from_int(-1_234_567)), "-1,234,567");
    }

    #[test]
    fn test_thousands_rounds_to_zero_decimals() {
        assert_eq!(thousands(Decimal::from_str("1234567.89").unwrap()), "1,234,568");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(
            currency(Currency::Usd, Decimal::from_int(100_000_000)),
            "USD 100,000,000"
        );
        assert_eq!(currency(Currency::Eur, Decimal::from_int(42)), "EUR 42");
    }

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent(Decimal::from_str("0.25").unwrap()), "25.0%");
        assert_eq!(percent(Decimal::from_str("0.1").unwrap()), "10.0%");
        assert_eq!(percent(Decimal::from_str("0.3047").unwrap()), "30.5%");
        assert_eq!(percent(Decimal::zero()), "0.0%");
    }

    #[test]
    fn test_multiple_one_decimal_with_suffix() {
        assert_eq!(multiple(Decimal::from_str("4.768").unwrap()), "4.8x");
        assert_eq!(multiple(Decimal::from_int(2)), "2.0x");
        assert_eq!(multiple(Decimal::zero()), "0.0x");
    }
}
