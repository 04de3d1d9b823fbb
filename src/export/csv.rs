//! Quoted CSV for bank portals and spreadsheet ingestion.
//!
//! Every cell is wrapped in double quotes, with embedded quotes doubled. The
//! encoder does not check completeness; blank identity or banking fields are
//! written as empty cells. The identity column is headed `QID` for Qatar and
//! `Iqama Number` for Saudi Arabia.

use tracing::debug;

use super::format_amount;
use crate::error::PayrollResult;
use crate::models::{ComplianceDocument, ComplianceEmployee, Country, Establishment, PayPeriod};

const HEADERS: [&str; 11] = [
    "Record No",
    "",
    "Employee Name",
    "IBAN",
    "Bank Code",
    "Basic Salary",
    "Allowances",
    "Deductions",
    "Net Salary",
    "Month",
    "Year",
];

fn identity_header(country: Country) -> &'static str {
    match country {
        Country::Qatar => "QID",
        Country::SaudiArabia => "Iqama Number",
    }
}

/// Encodes a roster as quoted CSV, one header row then one row per employee.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wps_payroll::export::to_csv;
/// use wps_payroll::models::{ComplianceEmployee, Country, Establishment, PayPeriod};
///
/// let employee = ComplianceEmployee {
///     national_id: "28435600123".to_string(),
///     name: "Ravi Kumar".to_string(),
///     iban: "QA58DOHB00001234567890ABCDEFG".to_string(),
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
/// let file = to_csv(
///     Country::Qatar,
///     &Establishment::new("EST-100", "Doha Trading"),
///     PayPeriod::new(3, 2026).unwrap(),
///     &[employee],
/// ).unwrap();
///
/// assert_eq!(
///     file.lines().nth(1).unwrap(),
///     r#""1","28435600123","Ravi Kumar","QA58DOHB00001234567890ABCDEFG","","3000.00","0.00","0.00","3000.00","3","2026""#
/// );
/// ```
pub fn to_csv(
    country: Country,
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    let document = ComplianceDocument::build(establishment, period, employees)?;

    let mut rows = Vec::with_capacity(document.details.len() + 1);
    let mut headers = HEADERS;
    headers[1] = identity_header(country);
    rows.push(quoted_row(headers.iter().map(|h| h.to_string())));

    for detail in &document.details {
        let employee = &detail.employee;
        rows.push(quoted_row([
            detail.sequence.to_string(),
            employee.national_id.clone(),
            employee.name.clone(),
            employee.iban.clone(),
            employee.bank_code.clone().unwrap_or_default(),
            format_amount(employee.basic),
            format_amount(employee.allowances),
            format_amount(employee.deductions),
            format_amount(employee.net),
            period.month().to_string(),
            period.year().to_string(),
        ]));
    }

    debug!(
        establishment_id = %establishment.id,
        %period,
        %country,
        employees = document.details.len(),
        "Encoded CSV salary file"
    );

    Ok(rows.join("\n"))
}

fn quoted_row(cells: impl IntoIterator<Item = String>) -> String {
    cells
        .into_iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
