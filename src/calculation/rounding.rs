//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("2.675").unwrap()), Decimal::from_str("2.68").unwrap());
/// assert_eq!(round2(Decimal::from_str("-2.675").unwrap()), Decimal::from_str("-2.68").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("0.135")), dec("0.14"));
        assert_eq!(round2(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round2(dec("180.2884615")), dec("180.29"));
        assert_eq!(round2(dec("10.004999")), dec("10.00"));
    }

    #[test]
    fn test_already_rounded_value_unchanged() {
        assert_eq!(round2(dec("10500.00")), dec("10500.00"));
        assert_eq!(round2(Decimal::ZERO), Decimal::ZERO);
    }
}
