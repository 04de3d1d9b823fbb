//! Plain-text rendering of a validation result.

use crate::models::{ValidationIssue, ValidationResult};

const RULE_WIDTH: usize = 80;

/// Renders a validation result as a plain-text report.
///
/// The report opens with a banner and summary counts, followed by an
/// enumerated `ERRORS` section and a `WARNINGS` section. Empty sections are
/// left out. Issues without an employee are attributed to `System`.
///
/// # Example
///
/// ```
/// use wps_payroll::models::ValidationResult;
/// use wps_payroll::validation::validation_report;
///
/// let report = validation_report(&ValidationResult::from_issues(vec![], vec![], 4));
/// assert!(report.contains("Total Employees: 4"));
/// assert!(report.contains("Status: PASSED ✓"));
/// assert!(!report.contains("ERRORS"));
/// ```
pub fn validation_report(result: &ValidationResult) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        banner.clone(),
        "PAYROLL VALIDATION REPORT".to_string(),
        banner.clone(),
        String::new(),
        format!("Total Employees: {}", result.total_employees),
        format!("Valid Employees: {}", result.valid_employees),
        format!("Total Errors: {}", result.total_errors),
        format!("Total Warnings: {}", result.total_warnings),
        format!(
            "Status: {}",
            if result.passed { "PASSED ✓" } else { "FAILED ✗" }
        ),
        String::new(),
    ];

    push_section(
        &mut lines,
        "ERRORS (Must be fixed before processing payroll)",
        &result.errors,
    );
    push_section(&mut lines, "WARNINGS (Should be reviewed)", &result.warnings);

    lines.push(banner);
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }

    let rule = "-".repeat(RULE_WIDTH);
    lines.push(rule.clone());
    lines.push(title.to_string());
    lines.push(rule);

    for (idx, issue) in issues.iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {} - {}",
            idx + 1,
            issue.code,
            issue.employee_code.as_deref().unwrap_or("N/A"),
            issue.employee_name.as_deref().unwrap_or("System"),
        ));
        lines.push(format!("   {}", issue.message));
        if let Some(field) = &issue.field_name {
            lines.push(format!("   Field: {}", field));
        }
        lines.push(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueCategory, Severity};

    fn issue(severity: Severity, code: &str, employee: Option<(&str, &str)>) -> ValidationIssue {
        ValidationIssue {
            severity,
            category: IssueCategory::MissingData,
            employee_id: employee.map(|(code, _)| code.to_lowercase()),
            employee_code: employee.map(|(code, _)| code.to_string()),
            employee_name: employee.map(|(_, name)| name.to_string()),
            code: code.to_string(),
            message: format!("{} message", code),
            field_name: employee.map(|_| "iban".to_string()),
        }
    }

    #[test]
    fn test_failed_report_layout() {
        let result = ValidationResult::from_issues(
            vec![issue(Severity::Error, "MISSING_IBAN", Some(("EMP-1", "Ravi Kumar")))],
            vec![issue(Severity::Warning, "SALARY_LOAD_ERROR", None)],
            3,
        );

        let report = validation_report(&result);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "PAYROLL VALIDATION REPORT");
        assert!(lines.contains(&"Valid Employees: 2"));
        assert!(lines.contains(&"Status: FAILED ✗"));

        let errors_at = lines
            .iter()
            .position(|l| *l == "ERRORS (Must be fixed before processing payroll)")
            .unwrap();
        assert_eq!(lines[errors_at + 2], "1. [MISSING_IBAN] EMP-1 - Ravi Kumar");
        assert_eq!(lines[errors_at + 3], "   MISSING_IBAN message");
        assert_eq!(lines[errors_at + 4], "   Field: iban");

        assert!(lines.contains(&"1. [SALARY_LOAD_ERROR] N/A - System"));
        assert_eq!(*lines.last().unwrap(), "=".repeat(80));
    }

    #[test]
    fn test_warnings_follow_errors() {
        let result = ValidationResult::from_issues(
            vec![issue(Severity::Error, "MISSING_QID", Some(("EMP-1", "A B")))],
            vec![issue(Severity::Warning, "MISSING_BANK_NAME", Some(("EMP-2", "C D")))],
            2,
        );

        let report = validation_report(&result);
        let errors = report.find("ERRORS").unwrap();
        let warnings = report.find("WARNINGS").unwrap();
        assert!(errors < warnings);
    }
}
