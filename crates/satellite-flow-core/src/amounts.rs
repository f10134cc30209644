//! Confirmed-amount arithmetic.
//!
//! The upstream deposit monitor reports amounts as display strings in atomic
//! units ("123.456 FOO"). Everything here is exact decimal math; binary
//! floating point never touches a money path.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};

/// Strip everything that is not `[0-9.]` from the monitor string and parse
/// the remainder. Returns `None` for empty or unparseable leftovers.
pub fn parse_confirmed_atomic(raw: &str) -> Option<BigDecimal> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    BigDecimal::from_str(&digits).ok()
}

/// Convert an atomic-unit amount to whole-token units: `atomic / 10^decimals`.
pub fn adjust_by_decimals(atomic: &BigDecimal, decimals: u32) -> BigDecimal {
    // 10^-decimals as an exact decimal; avoids division entirely.
    let unit = BigDecimal::new(BigInt::from(1), i64::from(decimals));
    atomic * unit
}

/// Amount forwarded to the destination after the bridge keeps the minimum
/// deposit as its fee.
pub fn subtract_fee(adjusted: &BigDecimal, min_deposit: &BigDecimal) -> BigDecimal {
    adjusted - min_deposit
}

/// Render with at most three decimal places, trailing zeros trimmed.
pub fn format_amount(value: &BigDecimal) -> String {
    let rounded = value.with_scale_round(3, RoundingMode::HalfUp);
    let mut text = rounded.to_string();
    if text.contains('.') {
        text = text
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

/// Estimated minutes until arrival on the destination chain.
pub fn eta_minutes(destination_chain_name: &str) -> u8 {
    if destination_chain_name.eq_ignore_ascii_case("ethereum") {
        5
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("literal decimal")
    }

    #[test]
    fn parse_strips_non_numeric_characters() {
        assert_eq!(parse_confirmed_atomic("123.456 FOO"), Some(dec("123.456")));
        assert_eq!(parse_confirmed_atomic("1,000uusd"), Some(dec("1000")));
        assert_eq!(parse_confirmed_atomic("no digits here"), None);
        assert_eq!(parse_confirmed_atomic(""), None);
    }

    #[test]
    fn adjust_matches_six_decimal_anchor() {
        // "123.456 FOO" at 6 decimals adjusts to exactly 0.000123456.
        let atomic = parse_confirmed_atomic("123.456 FOO").expect("parse");
        assert_eq!(adjust_by_decimals(&atomic, 6), dec("0.000123456"));
    }

    #[test]
    fn fee_subtraction_is_exact() {
        let adjusted = dec("10.5");
        assert_eq!(subtract_fee(&adjusted, &dec("0.1")), dec("10.4"));
    }

    #[test]
    fn format_rounds_to_three_places_and_trims() {
        assert_eq!(format_amount(&dec("0.000123456")), "0");
        assert_eq!(format_amount(&dec("1.2345")), "1.235");
        assert_eq!(format_amount(&dec("1.2300")), "1.23");
        assert_eq!(format_amount(&dec("10")), "10");
        assert_eq!(format_amount(&dec("-0.0001")), "0");
    }

    #[test]
    fn ethereum_eta_is_case_insensitive() {
        assert_eq!(eta_minutes("Ethereum"), 5);
        assert_eq!(eta_minutes("ETHEREUM"), 5);
        assert_eq!(eta_minutes("ethereum"), 5);
        assert_eq!(eta_minutes("Avalanche"), 3);
        assert_eq!(eta_minutes("terra"), 3);
    }
}
