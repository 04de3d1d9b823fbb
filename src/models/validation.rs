//! Pre-payroll validation result models.
//!
//! Issues and results are immutable values: the validator builds them and
//! hands them out, nothing mutates them afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether an issue blocks the payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks export until fixed.
    Error,
    /// Should be reviewed, does not block.
    Warning,
}

/// The rule family an issue was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// A required field is absent.
    MissingData,
    /// A regulated field is expired or malformed.
    Compliance,
    /// The salary setup is absent or invalid.
    SalaryStructure,
    /// A banking field would be rejected by the WPS file.
    Wps,
}

/// A single finding raised by the pre-payroll validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Error or warning.
    pub severity: Severity,
    /// Rule family.
    pub category: IssueCategory,
    /// The employee concerned; `None` for system-level issues.
    pub employee_id: Option<String>,
    /// The employee's organization code.
    pub employee_code: Option<String>,
    /// The employee's display name.
    pub employee_name: Option<String>,
    /// Stable machine-readable code (e.g., `MISSING_IBAN`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// The offending field, when there is one.
    pub field_name: Option<String>,
}

/// The outcome of validating one organization's roster for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were raised.
    pub passed: bool,
    /// Blocking issues, in roster order.
    pub errors: Vec<ValidationIssue>,
    /// Non-blocking issues, in roster order.
    pub warnings: Vec<ValidationIssue>,
    /// `errors.len()`.
    pub total_errors: usize,
    /// `warnings.len()`.
    pub total_warnings: usize,
    /// Employees without any error.
    pub valid_employees: usize,
    /// Employees on the active roster.
    pub total_employees: usize,
}

impl ValidationResult {
    /// Builds a result from the two issue lists, deriving every count.
    ///
    /// An employee with several errors is subtracted from the valid count once.
    pub fn from_issues(
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
        total_employees: usize,
    ) -> Self {
        let employees_with_errors: HashSet<&str> = errors
            .iter()
            .filter_map(|issue| issue.employee_id.as_deref())
            .collect();
        let valid_employees = total_employees.saturating_sub(employees_with_errors.len());

        Self {
            passed: errors.is_empty(),
            total_errors: errors.len(),
            total_warnings: warnings.len(),
            valid_employees,
            total_employees,
            errors,
            warnings,
        }
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|issue| issue.code == code)
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|issue| issue.code == code)
    }

    /// All errors raised for one employee.
    pub fn errors_for<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.errors
            .iter()
            .filter(move |issue| issue.employee_id.as_deref() == Some(employee_id))
    }
}
