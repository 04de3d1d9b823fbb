//! End-of-service gratuity.
//!
//! ## Qatar
//!
//! Three weeks' basic pay (21/30 of a month) per year of service, with no
//! gratuity before one year. On resignation the amount is discounted:
//! - under 2 years: nothing
//! - 2 to 5 years: one third of the full amount for the completed years
//! - 5 to 10 years: two thirds of the 5-year amount plus the full rate beyond 5
//! - 10 years and more: the full employer formula
//!
//! ## Saudi Arabia
//!
//! Half a month's basic pay per year for the first five years, a full month
//! per year after that, with no gratuity before one year. On resignation:
//! - under 2 years: nothing
//! - 2 to 5 years: one third of the full amount
//! - 5 to 10 years: two thirds of the full amount
//! - 10 years and more: the full amount

use rust_decimal::Decimal;

use super::round2;
use crate::models::SeparationReason;

const QATAR_DAYS_PER_YEAR: Decimal = Decimal::from_parts(21, 0, 0, false, 0);
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const FULL_RATE_YEARS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

fn years(n: i64) -> Decimal {
    Decimal::from(n)
}

fn qatar_full_rate(basic: Decimal, years_of_service: Decimal) -> Decimal {
    basic * QATAR_DAYS_PER_YEAR * years_of_service / DAYS_PER_MONTH
}

fn saudi_full_rate(basic: Decimal, years_of_service: Decimal) -> Decimal {
    let half_month = basic / Decimal::TWO;
    if years_of_service <= FULL_RATE_YEARS {
        half_month * years_of_service
    } else {
        half_month * FULL_RATE_YEARS + basic * (years_of_service - FULL_RATE_YEARS)
    }
}

/// Qatar end-of-service gratuity, rounded to two decimals.
///
/// Only [`SeparationReason::Resignation`] is discounted; every other reason
/// uses the employer formula.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::qatar_gratuity;
/// use wps_payroll::models::SeparationReason;
/// use rust_decimal::Decimal;
///
/// let eos = qatar_gratuity(Decimal::from(5000), Decimal::from(3), SeparationReason::EmployerInitiated);
/// assert_eq!(eos, Decimal::from(10500));
/// ```
pub fn qatar_gratuity(basic: Decimal, years_of_service: Decimal, reason: SeparationReason) -> Decimal {
    if years_of_service < years(1) {
        return Decimal::ZERO;
    }

    if !reason.is_employee_initiated() {
        return round2(qatar_full_rate(basic, years_of_service));
    }

    let amount = if years_of_service < years(2) {
        Decimal::ZERO
    } else if years_of_service < years(5) {
        qatar_full_rate(basic, years_of_service.floor()) / Decimal::from(3)
    } else if years_of_service < years(10) {
        let first_five = qatar_full_rate(basic, FULL_RATE_YEARS) * Decimal::TWO / Decimal::from(3);
        first_five + qatar_full_rate(basic, years_of_service - FULL_RATE_YEARS)
    } else {
        // No discount from ten years, matching the employer formula.
        // TODO: confirm with the labour-law advisor whether the 10+ year resignation tier is undiscounted.
        qatar_full_rate(basic, years_of_service)
    };

    round2(amount)
}

/// Saudi end-of-service gratuity, rounded to two decimals.
///
/// Employer termination, contract end and mutual agreement all pay the full
/// amount; resignation is discounted by tenure.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::saudi_gratuity;
/// use wps_payroll::models::SeparationReason;
/// use rust_decimal::Decimal;
///
/// let eos = saudi_gratuity(Decimal::from(6000), Decimal::from(8), SeparationReason::ContractEnd);
/// assert_eq!(eos, Decimal::from(33000));
/// ```
pub fn saudi_gratuity(basic: Decimal, years_of_service: Decimal, reason: SeparationReason) -> Decimal {
    if years_of_service < years(1) {
        return Decimal::ZERO;
    }

    let full = saudi_full_rate(basic, years_of_service);
    if !reason.is_employee_initiated() {
        return round2(full);
    }

    let amount = if years_of_service < years(2) {
        Decimal::ZERO
    } else if years_of_service < years(5) {
        full / Decimal::from(3)
    } else if years_of_service < years(10) {
        full * Decimal::TWO / Decimal::from(3)
    } else {
        full
    };

    round2(amount)
}
