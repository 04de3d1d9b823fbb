//! Deduction calculations.

use rust_decimal::Decimal;

use super::round2;
use crate::models::DeductionSet;

/// Pay withheld for unpaid absence: `round2(reference / working_days × days_absent)`.
///
/// Both countries use gross salary as the reference. A zero divisor yields zero.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::absence_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = absence_deduction(Decimal::from(5200), Decimal::from(26), Decimal::from(2));
/// assert_eq!(amount, Decimal::from_str("400.00").unwrap());
/// ```
pub fn absence_deduction(
    reference_salary: Decimal,
    working_days_per_month: Decimal,
    days_absent: Decimal,
) -> Decimal {
    if working_days_per_month.is_zero() {
        return Decimal::ZERO;
    }
    round2(reference_salary / working_days_per_month * days_absent)
}

/// Exact sum of the present deductions.
pub fn total_deductions(deductions: &DeductionSet) -> Decimal {
    deductions.total()
}
