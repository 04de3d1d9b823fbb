//! Gross and net salary.

use rust_decimal::Decimal;

use super::round2;
use crate::models::SalaryComponents;

/// Exact sum of the seven salary components.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::gross_salary;
/// use wps_payroll::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let components = SalaryComponents {
///     basic: Decimal::from(3000),
///     housing: Decimal::from(1000),
///     transport: Decimal::from(300),
///     ..Default::default()
/// };
/// assert_eq!(gross_salary(&components), Decimal::from(4300));
/// ```
pub fn gross_salary(components: &SalaryComponents) -> Decimal {
    components.basic + components.allowances_total()
}

/// Net pay: `round2(gross + overtime + bonus - deductions)`.
pub fn net_salary(
    gross: Decimal,
    overtime: Decimal,
    total_deductions: Decimal,
    bonus: Decimal,
) -> Decimal {
    round2(gross + overtime + bonus - total_deductions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_gross_sums_all_seven_components() {
        let components = SalaryComponents {
            basic: dec("3000.00"),
            housing: dec("1000.00"),
            food: dec("300.00"),
            transport: dec("200.00"),
            mobile: dec("100.00"),
            utility: dec("150.00"),
            other: dec("50.55"),
        };
        assert_eq!(gross_salary(&components), dec("4800.55"));
    }

    #[test]
    fn test_gross_of_empty_components_is_zero() {
        assert_eq!(gross_salary(&SalaryComponents::default()), Decimal::ZERO);
    }

    #[test]
    fn test_net_includes_overtime_and_bonus() {
        let net = net_salary(dec("4800.00"), dec("180.29"), dec("500.00"), dec("250.00"));
        assert_eq!(net, dec("4730.29"));
    }

    #[test]
    fn test_net_can_go_negative() {
        let net = net_salary(dec("1000.00"), Decimal::ZERO, dec("1200.00"), Decimal::ZERO);
        assert_eq!(net, dec("-200.00"));
    }
}
