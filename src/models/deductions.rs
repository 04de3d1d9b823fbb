//! Deduction set model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The deductions taken from one payroll record.
///
/// Absent fields count as zero. `statutory_contribution` is the employee
/// share of the Saudi social-insurance contribution and stays `None` for
/// Qatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionSet {
    /// Deduction for unpaid absence days.
    pub absence: Option<Decimal>,
    /// Loan installment recovery.
    pub loan: Option<Decimal>,
    /// Salary advance recovery.
    pub advance: Option<Decimal>,
    /// Disciplinary penalty.
    pub penalty: Option<Decimal>,
    /// Anything else.
    pub other: Option<Decimal>,
    /// Employee share of the statutory social-insurance contribution.
    pub statutory_contribution: Option<Decimal>,
}

impl DeductionSet {
    /// Exact sum of the present fields.
    ///
    /// # Example
    ///
    /// ```
    /// use wps_payroll::models::DeductionSet;
    /// use rust_decimal::Decimal;
    ///
    /// let deductions = DeductionSet {
    ///     loan: Some(Decimal::new(50000, 2)),
    ///     penalty: Some(Decimal::new(2550, 2)),
    ///     ..Default::default()
    /// };
    /// assert_eq!(deductions.total(), Decimal::new(52550, 2));
    /// ```
    pub fn total(&self) -> Decimal {
        [
            self.absence,
            self.loan,
            self.advance,
            self.penalty,
            self.other,
            self.statutory_contribution,
        ]
        .into_iter()
        .flatten()
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_set_totals_zero() {
        assert_eq!(DeductionSet::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_includes_statutory_contribution() {
        let deductions = DeductionSet {
            absence: Some(dec("230.77")),
            advance: Some(dec("1000.00")),
            other: Some(dec("15.50")),
            statutory_contribution: Some(dec("800.00")),
            ..Default::default()
        };
        assert_eq!(deductions.total(), dec("2046.27"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_absent() {
        let deductions: DeductionSet = serde_json::from_str(r#"{"loan": "300.00"}"#).unwrap();
        assert_eq!(deductions.loan, Some(dec("300.00")));
        assert_eq!(deductions.absence, None);
        assert_eq!(deductions.total(), dec("300.00"));
    }
}
