//! Individual validation rules.
//!
//! Each rule looks at one employee and returns the issues it raises, errors
//! and warnings mixed, in a deterministic order.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::CountryRules;
use crate::models::{
    Country, EmployeeRecord, IssueCategory, SalaryComponentRecord, Severity, ValidationIssue,
};

/// Code token and label of a country's national identity document.
fn national_id_naming(country: Country) -> (&'static str, &'static str) {
    match country {
        Country::Qatar => ("QID", "Qatar ID"),
        Country::SaudiArabia => ("SAUDI_ID", "Muqeem ID / Iqama"),
    }
}

fn issue(
    employee: &EmployeeRecord,
    severity: Severity,
    category: IssueCategory,
    code: impl Into<String>,
    message: impl Into<String>,
    field_name: &str,
) -> ValidationIssue {
    ValidationIssue {
        severity,
        category,
        employee_id: Some(employee.id.clone()),
        employee_code: Some(employee.employee_code.clone()),
        employee_name: Some(employee.full_name()),
        code: code.into(),
        message: message.into(),
        field_name: Some(field_name.to_string()),
    }
}

/// National identity: present, and of the fixed length where the country sets one.
pub fn check_identity(employee: &EmployeeRecord, rules: &CountryRules) -> Vec<ValidationIssue> {
    let (token, label) = national_id_naming(rules.country);

    match employee.national_id() {
        None => vec![issue(
            employee,
            Severity::Error,
            IssueCategory::MissingData,
            format!("MISSING_{}", token),
            format!("Missing {}", label),
            "national_id",
        )],
        Some(id) => match rules.national_id_length {
            Some(expected) if id.chars().count() != expected => vec![issue(
                employee,
                Severity::Error,
                IssueCategory::Compliance,
                format!("INVALID_{}", token),
                format!(
                    "{} must be {} digits (current: {})",
                    label,
                    expected,
                    id.chars().count()
                ),
                "national_id",
            )],
            _ => Vec::new(),
        },
    }
}

/// IBAN present and well-formed; bank name present (warning only).
pub fn check_banking(employee: &EmployeeRecord, rules: &CountryRules) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match employee.iban() {
        None => issues.push(issue(
            employee,
            Severity::Error,
            IssueCategory::MissingData,
            "MISSING_IBAN",
            "Missing IBAN",
            "iban",
        )),
        Some(iban) if !rules.iban.matches(iban) => issues.push(issue(
            employee,
            Severity::Error,
            IssueCategory::Wps,
            "INVALID_IBAN",
            format!(
                "Invalid {} IBAN format (must start with {} and be {} characters, current: {} characters)",
                rules.country,
                rules.iban.prefix,
                rules.iban.length,
                iban.chars().count()
            ),
            "iban",
        )),
        Some(_) => {}
    }

    if employee.bank_name().is_none() {
        issues.push(issue(
            employee,
            Severity::Warning,
            IssueCategory::MissingData,
            "MISSING_BANK_NAME",
            "Missing Bank Name",
            "bank_name",
        ));
    }

    issues
}

/// Expired documents are errors, documents expiring within the warning window
/// are warnings. Documents without an expiry date are skipped.
pub fn check_document_expiry(
    employee: &EmployeeRecord,
    rules: &CountryRules,
    as_of: NaiveDate,
) -> Vec<ValidationIssue> {
    let (id_token, id_label) = national_id_naming(rules.country);
    let documents = [
        (employee.national_id_expiry, id_token, id_label, "national_id_expiry"),
        (employee.visa_expiry, "VISA", "Visa", "visa_expiry"),
        (employee.passport_expiry, "PASSPORT", "Passport", "passport_expiry"),
    ];

    documents
        .into_iter()
        .filter_map(|(expiry, token, label, field)| {
            let expiry = expiry?;
            if expiry < as_of {
                return Some(issue(
                    employee,
                    Severity::Error,
                    IssueCategory::Compliance,
                    format!("EXPIRED_{}", token),
                    format!("{} expired on {}", label, expiry),
                    field,
                ));
            }

            let days_left = (expiry - as_of).num_days();
            (days_left < rules.expiry_warning_days).then(|| {
                issue(
                    employee,
                    Severity::Warning,
                    IssueCategory::Compliance,
                    format!("{}_EXPIRING_SOON", token),
                    format!("{} expires in {} days", label, days_left),
                    field,
                )
            })
        })
        .collect()
}

/// Exactly one active salary setup, with a positive basic salary.
///
/// `salaries` must already be narrowed to this employee's active records for
/// the payroll country.
pub fn check_salary_structure(
    employee: &EmployeeRecord,
    salaries: &[&SalaryComponentRecord],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match salaries.len() {
        0 => issues.push(issue(
            employee,
            Severity::Error,
            IssueCategory::MissingData,
            "MISSING_SALARY",
            "No salary components configured",
            "salary_components",
        )),
        1 => {}
        n => issues.push(issue(
            employee,
            Severity::Error,
            IssueCategory::SalaryStructure,
            "DUPLICATE_SALARY",
            format!(
                "{} active salary component records configured, expected exactly one",
                n
            ),
            "salary_components",
        )),
    }

    issues.extend(
        salaries
            .iter()
            .filter(|salary| salary.components.basic <= Decimal::ZERO)
            .map(|_| {
                issue(
                    employee,
                    Severity::Error,
                    IssueCategory::SalaryStructure,
                    "INVALID_BASIC_SALARY",
                    "Basic salary must be greater than 0",
                    "basic",
                )
            }),
    );

    issues
}
