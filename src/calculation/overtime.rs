//! Hourly rate and overtime pay.
//!
//! ## Rate Structure
//!
//! The hourly rate is basic salary divided by the working hours of a month
//! (`working_days_per_month × hours_per_day`). Each overtime entry is paid at
//! the hourly rate times the country's multiplier for its category:
//!
//! | Category | Qatar | Saudi Arabia |
//! |----------|-------|--------------|
//! | Regular  | 125%  | 150%         |
//! | Weekend  | 150%  | 200%         |
//! | Holiday  | 150%  | 150%         |

use rust_decimal::Decimal;

use super::round2;
use crate::config::CountryRules;
use crate::models::OvertimeEntry;

/// Basic salary per working hour, unrounded.
///
/// A zero divisor yields zero rather than panicking.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// let rate = hourly_rate(Decimal::from(4800), Decimal::from(30), Decimal::from(8));
/// assert_eq!(rate, Decimal::from(20));
/// ```
pub fn hourly_rate(basic: Decimal, working_days_per_month: Decimal, hours_per_day: Decimal) -> Decimal {
    let monthly_hours = working_days_per_month * hours_per_day;
    if monthly_hours.is_zero() {
        return Decimal::ZERO;
    }
    basic / monthly_hours
}

/// Overtime pay for a set of entries, rounded once after summing.
///
/// # Arguments
///
/// * `basic` - The basic monthly salary
/// * `entries` - Overtime hours by category
/// * `rules` - The country rules supplying the divisors and multipliers
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::overtime_amount;
/// use wps_payroll::config::CountryRules;
/// use wps_payroll::models::{OvertimeCategory, OvertimeEntry};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entries = vec![OvertimeEntry::new(OvertimeCategory::Regular, Decimal::from(10))];
/// let amount = overtime_amount(Decimal::from(3000), &entries, &CountryRules::qatar());
/// assert_eq!(amount, Decimal::from_str("180.29").unwrap());
/// ```
pub fn overtime_amount(basic: Decimal, entries: &[OvertimeEntry], rules: &CountryRules) -> Decimal {
    let rate = hourly_rate(basic, rules.working_days_per_month, rules.hours_per_day);

    let total: Decimal = entries
        .iter()
        .map(|entry| rate * entry.hours * rules.overtime.for_category(entry.category))
        .sum();

    round2(total)
}
