//! The pre-payroll validator.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::rules::{check_banking, check_document_expiry, check_identity, check_salary_structure};
use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::{
    Country, IssueCategory, PayPeriod, SalaryComponentRecord, Severity, ValidationIssue,
    ValidationResult,
};
use crate::store::EmployeeDirectory;

/// Validates an organization's roster and salary setups before a payroll run.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use wps_payroll::config::PayrollConfig;
/// use wps_payroll::models::{Country, EmployeeRecord, PayPeriod};
/// use wps_payroll::store::InMemoryStore;
/// use wps_payroll::validation::PrePayrollValidator;
///
/// let mut store = InMemoryStore::new();
/// store.add_employee("org_1", EmployeeRecord::new("emp_1", "EMP-1", "Ravi", "Kumar"));
///
/// let validator = PrePayrollValidator::new(PayrollConfig::default());
/// let result = validator
///     .validate(
///         &store,
///         "org_1",
///         PayPeriod::new(3, 2026).unwrap(),
///         Country::Qatar,
///         NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     )
///     .unwrap();
///
/// assert!(!result.passed);
/// assert!(result.has_error("MISSING_QID"));
/// assert!(result.has_error("MISSING_SALARY"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrePayrollValidator {
    config: PayrollConfig,
}

impl PrePayrollValidator {
    /// Creates a validator over the given country rules.
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Runs every rule over the active roster.
    ///
    /// # Arguments
    ///
    /// * `directory` - Source of the roster and salary setups
    /// * `organization_id` - The organization being paid
    /// * `period` - The pay period
    /// * `country` - Whose rules apply
    /// * `as_of` - The date document expiry is judged against
    ///
    /// # Returns
    ///
    /// The collected issues, errors and warnings in roster order. A failure to
    /// read the roster is returned as an error; a failure to read the salary
    /// setups becomes a `SALARY_LOAD_ERROR` warning and the salary rules are
    /// skipped.
    pub fn validate<D: EmployeeDirectory + ?Sized>(
        &self,
        directory: &D,
        organization_id: &str,
        period: PayPeriod,
        country: Country,
        as_of: NaiveDate,
    ) -> PayrollResult<ValidationResult> {
        let rules = self.config.rules(country);
        let employees = directory.active_employees(organization_id)?;

        let salaries = match directory.salary_components(organization_id, country) {
            Ok(records) => Some(records),
            Err(error) => {
                warn!(
                    organization_id,
                    %country,
                    error = %error,
                    "Salary components could not be loaded"
                );
                None
            }
        };

        let mut issues: Vec<ValidationIssue> = employees
            .iter()
            .flat_map(|employee| {
                let mut found = check_identity(employee, rules);
                found.extend(check_banking(employee, rules));
                found.extend(check_document_expiry(employee, rules, as_of));
                if let Some(records) = &salaries {
                    let own: Vec<&SalaryComponentRecord> = records
                        .iter()
                        .filter(|s| s.is_active && s.country == country && s.employee_id == employee.id)
                        .collect();
                    found.extend(check_salary_structure(employee, &own));
                }
                found
            })
            .collect();

        if salaries.is_none() {
            issues.push(salary_load_warning());
        }

        let (errors, warnings): (Vec<_>, Vec<_>) = issues
            .into_iter()
            .partition(|issue| issue.severity == Severity::Error);

        let result = ValidationResult::from_issues(errors, warnings, employees.len());

        info!(
            organization_id,
            %period,
            %country,
            total_employees = result.total_employees,
            valid_employees = result.valid_employees,
            errors = result.total_errors,
            warnings = result.total_warnings,
            passed = result.passed,
            "Pre-payroll validation complete"
        );

        Ok(result)
    }
}

fn salary_load_warning() -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Warning,
        category: IssueCategory::SalaryStructure,
        employee_id: None,
        employee_code: None,
        employee_name: None,
        code: "SALARY_LOAD_ERROR".to_string(),
        message: "Could not load salary components".to_string(),
        field_name: None,
    }
}
