//! Salary component model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The seven fixed monthly compensation fields of an employee.
///
/// Missing fields deserialize as zero.
///
/// # Example
///
/// ```
/// use wps_payroll::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let components = SalaryComponents {
///     basic: Decimal::new(500000, 2),
///     housing: Decimal::new(150000, 2),
///     ..Default::default()
/// };
/// assert_eq!(components.allowances_total(), Decimal::new(150000, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryComponents {
    /// Basic salary; the reference for overtime, gratuity and contributions.
    pub basic: Decimal,
    /// Housing allowance.
    pub housing: Decimal,
    /// Food allowance.
    pub food: Decimal,
    /// Transport allowance.
    pub transport: Decimal,
    /// Mobile allowance.
    pub mobile: Decimal,
    /// Utility allowance.
    pub utility: Decimal,
    /// Any other allowances.
    pub other: Decimal,
}

impl SalaryComponents {
    /// Sum of every allowance, excluding basic salary.
    pub fn allowances_total(&self) -> Decimal {
        self.housing + self.food + self.transport + self.mobile + self.utility + self.other
    }
}
