//! Saudi statutory social-insurance (GOSI) contributions.
//!
//! The contribution base is basic salary plus housing allowance, capped. For
//! nationals the employee pays pension and unemployment shares and the
//! employer pays pension, unemployment and occupational hazard. For
//! non-nationals only the employer's hazard share applies. Every share is
//! rounded to the cent on its own before totals are summed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round2;
use crate::config::ContributionRates;
use crate::models::Nationality;

/// The contribution split for one employee and one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContribution {
    /// Capped basic + housing.
    pub contribution_base: Decimal,
    /// Employee pension share.
    pub employee_pension: Decimal,
    /// Employee unemployment share.
    pub employee_unemployment: Decimal,
    /// Sum of the employee shares; deducted from net pay.
    pub employee_total: Decimal,
    /// Employer pension share.
    pub employer_pension: Decimal,
    /// Employer unemployment share.
    pub employer_unemployment: Decimal,
    /// Employer occupational hazard share.
    pub employer_hazard: Decimal,
    /// Sum of the employer shares.
    pub employer_total: Decimal,
    /// Employee total plus employer total.
    pub total: Decimal,
}

/// `min(basic + housing, cap)`.
pub fn contribution_base(basic: Decimal, housing: Decimal, rates: &ContributionRates) -> Decimal {
    (basic + housing).min(rates.base_cap)
}

/// Computes the contribution split for one employee.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::statutory_contribution;
/// use wps_payroll::config::CountryRules;
/// use wps_payroll::models::Nationality;
/// use rust_decimal::Decimal;
///
/// let rules = CountryRules::saudi_arabia();
/// let rates = rules.contributions.as_ref().unwrap();
/// let gosi = statutory_contribution(Decimal::from(6000), Decimal::from(2000), Nationality::National, rates);
/// assert_eq!(gosi.employee_total, Decimal::from(800));
/// assert_eq!(gosi.employer_total, Decimal::from(960));
/// ```
pub fn statutory_contribution(
    basic: Decimal,
    housing: Decimal,
    nationality: Nationality,
    rates: &ContributionRates,
) -> StatutoryContribution {
    let base = contribution_base(basic, housing, rates);
    let share = |rate: Decimal| round2(base * rate);

    let (employee_pension, employee_unemployment, employer_pension, employer_unemployment) =
        match nationality {
            Nationality::National => (
                share(rates.employee_pension),
                share(rates.employee_unemployment),
                share(rates.employer_pension),
                share(rates.employer_unemployment),
            ),
            Nationality::NonNational => {
                (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
            }
        };
    let employer_hazard = share(rates.employer_hazard);

    let employee_total = employee_pension + employee_unemployment;
    let employer_total = employer_pension + employer_unemployment + employer_hazard;

    StatutoryContribution {
        contribution_base: base,
        employee_pension,
        employee_unemployment,
        employee_total,
        employer_pension,
        employer_unemployment,
        employer_hazard,
        employer_total,
        total: employee_total + employer_total,
    }
}
