//! Roster totals shown before an export is submitted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round2;
use crate::models::ComplianceEmployee;

/// Column totals and completeness counts for a compliance roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WpsSummary {
    /// Number of employees.
    pub total_employees: usize,
    /// Sum of basic salaries.
    pub total_basic: Decimal,
    /// Sum of allowances.
    pub total_allowances: Decimal,
    /// Sum of overtime pay.
    pub total_overtime: Decimal,
    /// Sum of deductions.
    pub total_deductions: Decimal,
    /// Sum of net salaries.
    pub total_net: Decimal,
    /// Employees whose identity number is blank.
    pub missing_national_ids: usize,
    /// Employees whose IBAN is blank.
    pub missing_ibans: usize,
}

impl WpsSummary {
    /// Summarizes a roster. Each amount is rounded to the cent before it is
    /// added, so the totals match the encoded files.
    pub fn of(employees: &[ComplianceEmployee]) -> Self {
        employees.iter().fold(Self::default(), |mut summary, e| {
            summary.total_employees += 1;
            summary.total_basic += round2(e.basic);
            summary.total_allowances += round2(e.allowances);
            summary.total_overtime += round2(e.overtime);
            summary.total_deductions += round2(e.deductions);
            summary.total_net += round2(e.net);
            if e.national_id.trim().is_empty() {
                summary.missing_national_ids += 1;
            }
            if e.iban.trim().is_empty() {
                summary.missing_ibans += 1;
            }
            summary
        })
    }

    /// Returns true when every employee has an identity number and IBAN.
    pub fn is_complete(&self) -> bool {
        self.missing_national_ids == 0 && self.missing_ibans == 0
    }
}
