//! Decimal-string money helpers.
//!
//! The EasyStore REST API represents every monetary value as a
//! decimal-formatted string (e.g. `"129.99"`). Those strings are the source
//! of truth: amounts are parsed to [`Decimal`] only for display and
//! aggregation, and nothing is ever written back upstream.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a decimal-string amount, falling back to zero on malformed input.
///
/// The upstream API is trusted to send well-formed values; a zero fallback
/// keeps aggregation total rather than failing the whole page over one bad
/// field.
#[must_use]
pub fn parse_amount(value: &str) -> Decimal {
    Decimal::from_str(value.trim()).unwrap_or(Decimal::ZERO)
}

/// Sum a sequence of decimal-string amounts.
pub fn sum_amounts<'a, I>(values: I) -> Decimal
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(parse_amount).sum()
}

/// Average of decimal-string amounts, formatted to two decimal places.
///
/// Returns the literal `"0"` for an empty sequence rather than dividing by
/// zero.
#[must_use]
pub fn average_amount<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<&str> = values.into_iter().collect();
    if values.is_empty() {
        return "0".to_string();
    }
    let count = Decimal::from(values.len());
    let total = sum_amounts(values);
    // Display formatting truncates; round first so .666 becomes .67
    format!("{:.2}", (total / count).round_dp(2))
}

/// Format a decimal amount as a display price with thousands separators
/// (e.g. `$1,234.56`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        let remaining = int_part.len() - i;
        grouped.push(c);
        if remaining > 1 && remaining % 3 == 1 {
            grouped.push(',');
        }
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("129.99"), Decimal::from_str("129.99").unwrap());
        assert_eq!(parse_amount(" 45.00 "), Decimal::from_str("45").unwrap());
    }

    #[test]
    fn test_parse_amount_malformed_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("not-a-number"), Decimal::ZERO);
    }

    #[test]
    fn test_sum_amounts() {
        let total = sum_amounts(["129.99", "249.00", "59.00"]);
        assert_eq!(total, Decimal::from_str("437.99").unwrap());
    }

    #[test]
    fn test_average_amount_empty_is_literal_zero() {
        assert_eq!(average_amount([]), "0");
    }

    #[test]
    fn test_average_amount_two_decimals() {
        // (540 + 1250 + 45) / 3 = 611.666... -> 611.67
        assert_eq!(average_amount(["540.00", "1250.00", "45.00"]), "611.67");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Decimal::from_str("1418.99").unwrap()), "$1,418.99");
        assert_eq!(format_amount(Decimal::from_str("1234567.5").unwrap()), "$1,234,567.50");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
        assert_eq!(format_amount(Decimal::from_str("59").unwrap()), "$59.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(Decimal::from_str("-1200.5").unwrap()), "-$1,200.50");
    }
}
