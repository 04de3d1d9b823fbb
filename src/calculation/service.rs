//! Years of service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::round2;

/// Average days per year used to convert tenure in days to years (365.25).
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Tenure in years between `join_date` and `as_of`, rounded to two decimals.
///
/// The distance is absolute, so a join date after `as_of` still yields a
/// non-negative tenure.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::years_of_service;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let joined = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// assert_eq!(years_of_service(joined, today), Decimal::from_str("5.00").unwrap());
/// ```
pub fn years_of_service(join_date: NaiveDate, as_of: NaiveDate) -> Decimal {
    let days = (as_of - join_date).num_days().abs();
    round2(Decimal::from(days) / DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partial_year() {
        // 182 days / 365.25 = 0.4983
        assert_eq!(years_of_service(date(2026, 1, 1), date(2026, 7, 2)), dec("0.50"));
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(years_of_service(date(2026, 1, 1), date(2026, 1, 1)), Decimal::ZERO);
    }

    #[test]
    fn test_future_join_date_is_absolute() {
        assert_eq!(
            years_of_service(date(2027, 1, 1), date(2026, 1, 1)),
            years_of_service(date(2026, 1, 1), date(2027, 1, 1))
        );
    }

    #[test]
    fn test_ten_years_across_leap_days() {
        // 3653 days / 365.25 = 10.0013
        assert_eq!(years_of_service(date(2016, 1, 1), date(2026, 1, 1)), dec("10.00"));
    }
}
