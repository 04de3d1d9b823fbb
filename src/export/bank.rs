//! Minimal comma-delimited bank upload.
//!
//! ```text
//! HDR,{establishment id},{YYYYMM},{count},{total net}
//! D,{id},{iban},{basic},{allowances},{overtime},{deductions},{net}
//! FTR,{total net}
//! ```
//!
//! Unlike the other layouts this one tolerates no gaps: an empty roster, or
//! any employee without an identity number or IBAN, fails the whole file.

use tracing::debug;

use super::format_amount;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ComplianceDocument, ComplianceEmployee, Establishment, PayPeriod};

/// Encodes a roster as a minimal comma-delimited bank file.
///
/// # Errors
///
/// * [`PayrollError::FileGeneration`] if the establishment id is blank or the
///   roster is empty
/// * [`PayrollError::MissingData`] naming the first employee, in roster order,
///   whose identity number or IBAN is blank
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wps_payroll::error::PayrollError;
/// use wps_payroll::export::to_bank_file;
/// use wps_payroll::models::{ComplianceEmployee, Establishment, PayPeriod};
///
/// let employee = ComplianceEmployee {
///     national_id: "28435600123".to_string(),
///     name: "Ravi Kumar".to_string(),
///     iban: String::new(),
///     bank_code: None,
///     border_number: None,
///     housing: Decimal::ZERO,
///     basic: Decimal::new(3000, 0),
///     allowances: Decimal::ZERO,
///     overtime: Decimal::ZERO,
///     deductions: Decimal::ZERO,
///     net: Decimal::new(3000, 0),
/// };
///
/// let error = to_bank_file(
///     &Establishment::new("EST-100", "Doha Trading"),
///     PayPeriod::new(3, 2026).unwrap(),
///     &[employee],
/// ).unwrap_err();
///
/// assert!(matches!(error, PayrollError::MissingData { ref employee, .. } if employee == "Ravi Kumar"));
/// ```
pub fn to_bank_file(
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    let document = ComplianceDocument::build(establishment, period, employees)?;

    if document.details.is_empty() {
        return Err(PayrollError::FileGeneration {
            message: format!(
                "no employee records for establishment '{}' in {}",
                establishment.name, period
            ),
        });
    }

    let mut lines = Vec::with_capacity(document.details.len() + 2);
    lines.push(format!(
        "HDR,{},{},{},{}",
        document.header.establishment.id,
        document.header.period.yyyymm(),
        document.header.employee_count,
        format_amount(document.header.total_net),
    ));

    for detail in &document.details {
        let employee = &detail.employee;
        let national_id = required(employee, &employee.national_id, "national ID")?;
        let iban = required(employee, &employee.iban, "IBAN")?;

        lines.push(format!(
            "D,{},{},{},{},{},{},{}",
            national_id,
            iban,
            format_amount(employee.basic),
            format_amount(employee.allowances),
            format_amount(employee.overtime),
            format_amount(employee.deductions),
            format_amount(employee.net),
        ));
    }

    lines.push(format!("FTR,{}", format_amount(document.footer.total_net)));

    debug!(
        establishment_id = %establishment.id,
        %period,
        employees = document.details.len(),
        total_net = %document.footer.total_net,
        "Encoded comma-delimited bank file"
    );

    Ok(lines.join("\n"))
}

fn required<'a>(
    employee: &ComplianceEmployee,
    value: &'a str,
    field: &str,
) -> PayrollResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PayrollError::MissingData {
            employee: employee.name.clone(),
            field: field.to_string(),
        });
    }
    Ok(value)
}
