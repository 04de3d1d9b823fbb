//! Fixed-field pipe-delimited salary information file.
//!
//! ```text
//! H|{establishment id}|{establishment name}|{MMYYYY}|{count}|{total net}
//! D|{seq:6}|{id:11}|{name:50}|{iban:30}|{bank code:3}|{basic:12}|{allowances:12}|{deductions:12}|{net:12}
//! T|{count}|{total net}
//! ```
//!
//! Text fields are space-padded on the right, the sequence, bank code and
//! amounts are zero-padded on the left. Names longer than 50 characters are
//! truncated before padding.

use rust_decimal::Decimal;
use tracing::debug;

use super::format_amount;
use crate::error::PayrollResult;
use crate::models::{ComplianceDetail, ComplianceDocument, ComplianceEmployee, Establishment, PayPeriod};

const ID_WIDTH: usize = 11;
const NAME_WIDTH: usize = 50;
const IBAN_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 12;
const DEFAULT_BANK_CODE: &str = "000";

/// Encodes a roster as a pipe-delimited salary information file.
///
/// Lines are joined with `\n`, with no trailing newline.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wps_payroll::export::to_sif;
/// use wps_payroll::models::{ComplianceEmployee, Establishment, PayPeriod};
///
/// let employee = ComplianceEmployee {
///     national_id: "28435600123".to_string(),
///     name: "Ravi Kumar".to_string(),
///     iban: "QA58DOHB00001234567890ABCDEFG".to_string(),
///     bank_code: Some("12".to_string()),
///     border_number: None,
///     housing: Decimal::ZERO,
///     basic: Decimal::new(300000, 2),
///     allowances: Decimal::new(100000, 2),
///     overtime: Decimal::ZERO,
///     deductions: Decimal::new(5000, 2),
///     net: Decimal::new(395000, 2),
/// };
///
/// let file = to_sif(
///     &Establishment::new("EST-100", "Doha Trading"),
///     PayPeriod::new(3, 2026).unwrap(),
///     &[employee],
/// ).unwrap();
///
/// let lines: Vec<&str> = file.lines().collect();
/// assert_eq!(lines[0], "H|EST-100|Doha Trading|032026|1|3950.00");
/// assert!(lines[1].starts_with("D|000001|28435600123|Ravi Kumar "));
/// assert!(lines[1].ends_with("|012|000003000.00|000001000.00|000000050.00|000003950.00"));
/// assert_eq!(lines[2], "T|1|3950.00");
/// ```
pub fn to_sif(
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    let document = ComplianceDocument::build(establishment, period, employees)?;

    let mut lines = Vec::with_capacity(document.details.len() + 2);
    lines.push(format!(
        "H|{}|{}|{}|{}|{}",
        document.header.establishment.id,
        document.header.establishment.name,
        document.header.period.mmyyyy(),
        document.header.employee_count,
        format_amount(document.header.total_net),
    ));
    lines.extend(document.details.iter().map(detail_line));
    lines.push(format!(
        "T|{}|{}",
        document.footer.employee_count,
        format_amount(document.footer.total_net),
    ));

    debug!(
        establishment_id = %establishment.id,
        %period,
        employees = document.details.len(),
        total_net = %document.footer.total_net,
        "Encoded pipe-delimited salary file"
    );

    Ok(lines.join("\n"))
}

fn detail_line(detail: &ComplianceDetail) -> String {
    let employee = &detail.employee;
    let name: String = employee.name.chars().take(NAME_WIDTH).collect();
    let bank_code = employee
        .bank_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(DEFAULT_BANK_CODE);

    format!(
        "D|{:06}|{:<id_w$}|{:<name_w$}|{:<iban_w$}|{:0>3}|{}|{}|{}|{}",
        detail.sequence,
        employee.national_id,
        name,
        employee.iban,
        bank_code,
        amount_field(employee.basic),
        amount_field(employee.allowances),
        amount_field(employee.deductions),
        amount_field(employee.net),
        id_w = ID_WIDTH,
        name_w = NAME_WIDTH,
        iban_w = IBAN_WIDTH,
    )
}

pub(super) fn amount_field(amount: Decimal) -> String {
    format!("{:0>width$}", format_amount(amount), width = AMOUNT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(name: &str, net: &str) -> ComplianceEmployee {
        ComplianceEmployee {
            national_id: "28435600123".to_string(),
            name: name.to_string(),
            iban: "QA58DOHB00001234567890ABCDEFG".to_string(),
            bank_code: None,
            border_number: None,
            housing: Decimal::ZERO,
            basic: dec("3000"),
            allowances: dec("1000.5"),
            overtime: dec("180.29"),
            deductions: dec("0"),
            net: dec(net),
        }
    }

    fn encode(employees: &[ComplianceEmployee]) -> String {
        to_sif(
            &Establishment::new("EST-100", "Doha Trading"),
            PayPeriod::new(1, 2026).unwrap(),
            employees,
        )
        .unwrap()
    }

    #[test]
    fn test_detail_field_widths() {
        let file = encode(&[employee("Ravi Kumar", "4180.79")]);
        let detail = file.lines().nth(1).unwrap();
        let fields: Vec<&str> = detail.split('|').collect();

        assert_eq!(fields.len(), 11);
        assert_eq!(fields[0], "D");
        assert_eq!(fields[1], "000001");
        assert_eq!(fields[2].len(), 11);
        assert_eq!(fields[3].len(), 50);
        assert_eq!(fields[3].trim_end(), "Ravi Kumar");
        assert_eq!(fields[4].len(), 30);
        assert_eq!(fields[5], "000");
        assert_eq!(fields[6], "000003000.00");
        assert_eq!(fields[7], "000001000.50");
        assert_eq!(fields[8], "000000000.00");
        assert_eq!(fields[9], "000004180.79");
    }

    #[test]
    fn test_long_name_is_truncated_to_fifty() {
        let long_name = "A".repeat(45) + "BCDEFGHIJ";
        let file = encode(&[employee(&long_name, "100")]);
        let name_field = file.lines().nth(1).unwrap().split('|').nth(3).unwrap();

        assert_eq!(name_field, "A".repeat(45) + "BCDEF");
    }

    #[test]
    fn test_footer_total_is_recomputed() {
        let file = encode(&[
            employee("One", "1000.005"),
            employee("Two", "2000.10"),
            employee("Three", "0.50"),
        ]);
        let lines: Vec<&str> = file.lines().collect();

        assert_eq!(lines[0], "H|EST-100|Doha Trading|012026|3|3000.61");
        assert_eq!(lines[4], "T|3|3000.61");
        assert_eq!(lines[3].split('|').nth(1), Some("000003"));
    }

    #[test]
    fn test_empty_roster_encodes_header_and_footer() {
        assert_eq!(encode(&[]), "H|EST-100|Doha Trading|012026|0|0.00\nT|0|0.00");
    }

    #[test]
    fn test_blank_establishment_id_names_establishment() {
        let error = to_sif(
            &Establishment::new("  ", "Doha Trading"),
            PayPeriod::new(1, 2026).unwrap(),
            &[employee("Ravi", "100")],
        )
        .unwrap_err();

        match error {
            PayrollError::FileGeneration { message } => assert!(message.contains("Doha Trading")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
