//! Saudi labour-ministry wage file.
//!
//! ```text
//! MOLHSS Wage File
//! Establishment ID: {establishment id}
//! Period: {MM/YYYY}
//! Total Employees: {count}
//!
//! Iqama Number,Border Number,Employee Name,Basic Salary,Housing,Other Allowances,Total Salary,Deductions,Net Salary
//! {one line per employee}
//! ```
//!
//! Total salary is basic plus housing plus other allowances, before deductions.

use tracing::debug;

use super::format_amount;
use crate::error::PayrollResult;
use crate::models::{ComplianceDocument, ComplianceEmployee, Establishment, PayPeriod};

const COLUMNS: &str = "Iqama Number,Border Number,Employee Name,Basic Salary,Housing,Other Allowances,Total Salary,Deductions,Net Salary";

/// Renders the wage file, joined with `\n` and with no trailing newline.
///
/// Fails with [`PayrollError::FileGeneration`](crate::error::PayrollError::FileGeneration)
/// when the establishment id is blank.
pub fn to_molhss_file(
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    let document = ComplianceDocument::build(establishment, period, employees)?;

    let mut lines = vec![
        "MOLHSS Wage File".to_string(),
        format!("Establishment ID: {}", document.header.establishment.id),
        format!("Period: {}", document.header.period),
        format!("Total Employees: {}", document.header.employee_count),
        String::new(),
        COLUMNS.to_string(),
    ];

    for detail in &document.details {
        let employee = &detail.employee;
        let other = employee.other_allowances();
        lines.push(
            [
                employee.national_id.clone(),
                employee.border_number.clone().unwrap_or_default(),
                employee.name.clone(),
                format_amount(employee.basic),
                format_amount(employee.housing),
                format_amount(other),
                format_amount(employee.basic + employee.housing + other),
                format_amount(employee.deductions),
                format_amount(employee.net),
            ]
            .join(","),
        );
    }

    debug!(
        establishment_id = %establishment.id,
        %period,
        employees = document.details.len(),
        "Encoded wage file"
    );

    Ok(lines.join("\n"))
}
