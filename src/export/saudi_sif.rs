//! Saudi pipe-delimited salary information file.
//!
//! ```text
//! SCH|{establishment id}|{MMYYYY}|{count}|{total net}
//! EMP|{seq:6}|{iqama:10}|{border:10}|{name:60}|{iban:24}|{basic:12}|{housing:12}|{other:12}|{deductions:12}|{net:12}
//! TRL|{count}|{total net}
//! ```
//!
//! Same padding rules as the Qatar layout: text on the right with spaces,
//! sequence and amounts on the left with zeros. Names are cut to 60 characters.
//! An absent border number is written as blanks.

use tracing::debug;

use super::format_amount;
use super::sif::amount_field;
use crate::error::PayrollResult;
use crate::models::{ComplianceDetail, ComplianceDocument, ComplianceEmployee, Establishment, PayPeriod};

const IQAMA_WIDTH: usize = 10;
const BORDER_WIDTH: usize = 10;
const NAME_WIDTH: usize = 60;
const IBAN_WIDTH: usize = 24;

/// Encodes a roster in the Saudi salary information layout.
///
/// Lines are joined with `\n`, with no trailing newline.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wps_payroll::export::to_saudi_sif;
/// use wps_payroll::models::{ComplianceEmployee, Establishment, PayPeriod};
///
/// let employee = ComplianceEmployee {
///     national_id: "2345678901".to_string(),
///     name: "Jose Reyes".to_string(),
///     iban: "SA0380000000608010167519".to_string(),
///     bank_code: None,
///     border_number: Some("3012345678".to_string()),
///     housing: Decimal::new(100000, 2),
///     basic: Decimal::new(400000, 2),
///     allowances: Decimal::new(130000, 2),
///     overtime: Decimal::ZERO,
///     deductions: Decimal::ZERO,
///     net: Decimal::new(530000, 2),
/// };
///
/// let file = to_saudi_sif(
///     &Establishment::new("7001234", "Riyadh Works"),
///     PayPeriod::new(4, 2026).unwrap(),
///     &[employee],
/// ).unwrap();
///
/// let lines: Vec<&str> = file.lines().collect();
/// assert_eq!(lines[0], "SCH|7001234|042026|1|5300.00");
/// assert!(lines[1].starts_with("EMP|000001|2345678901|3012345678|Jose Reyes "));
/// assert!(lines[1].ends_with("|000004000.00|000001000.00|000000300.00|000000000.00|000005300.00"));
/// assert_eq!(lines[2], "TRL|1|5300.00");
/// ```
pub fn to_saudi_sif(
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    let document = ComplianceDocument::build(establishment, period, employees)?;

    let mut lines = Vec::with_capacity(document.details.len() + 2);
    lines.push(format!(
        "SCH|{}|{}|{}|{}",
        document.header.establishment.id,
        document.header.period.mmyyyy(),
        document.header.employee_count,
        format_amount(document.header.total_net),
    ));
    lines.extend(document.details.iter().map(detail_line));
    lines.push(format!(
        "TRL|{}|{}",
        document.footer.employee_count,
        format_amount(document.footer.total_net),
    ));

    debug!(
        establishment_id = %establishment.id,
        %period,
        employees = document.details.len(),
        total_net = %document.footer.total_net,
        "Encoded Saudi salary file"
    );

    Ok(lines.join("\n"))
}

fn detail_line(detail: &ComplianceDetail) -> String {
    let employee = &detail.employee;
    let name: String = employee.name.chars().take(NAME_WIDTH).collect();

    format!(
        "EMP|{:06}|{:<iqama_w$}|{:<border_w$}|{:<name_w$}|{:<iban_w$}|{}|{}|{}|{}|{}",
        detail.sequence,
        employee.national_id,
        employee.border_number.as_deref().unwrap_or_default(),
        name,
        employee.iban,
        amount_field(employee.basic),
        amount_field(employee.housing),
        amount_field(employee.other_allowances()),
        amount_field(employee.deductions),
        amount_field(employee.net),
        iqama_w = IQAMA_WIDTH,
        border_w = BORDER_WIDTH,
        name_w = NAME_WIDTH,
        iban_w = IBAN_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(name: &str, border: Option<&str>, net: &str) -> ComplianceEmployee {
        ComplianceEmployee {
            national_id: "2345678901".to_string(),
            name: name.to_string(),
            iban: "SA0380000000608010167519".to_string(),
            bank_code: None,
            border_number: border.map(str::to_string),
            housing: dec("1000"),
            basic: dec("4000"),
            allowances: dec("1450.5"),
            overtime: Decimal::ZERO,
            deductions: dec("25"),
            net: dec(net),
        }
    }

    fn encode(employees: &[ComplianceEmployee]) -> String {
        to_saudi_sif(
            &Establishment::new("7001234", "Riyadh Works"),
            PayPeriod::new(4, 2026).unwrap(),
            employees,
        )
        .unwrap()
    }

    #[test]
    fn test_detail_field_widths() {
        let file = encode(&[employee("Jose Reyes", Some("3012345678"), "5425.50")]);
        let detail = file.lines().nth(1).unwrap();
        let fields: Vec<&str> = detail.split('|').collect();

        assert_eq!(fields.len(), 11);
        assert_eq!(fields[0], "EMP");
        assert_eq!(fields[1], "000001");
        assert_eq!(fields[2], "2345678901");
        assert_eq!(fields[3], "3012345678");
        assert_eq!(fields[4].len(), 60);
        assert_eq!(fields[4].trim_end(), "Jose Reyes");
        assert_eq!(fields[5].len(), 24);
        assert_eq!(fields[6], "000004000.00");
        assert_eq!(fields[7], "000001000.00");
        assert_eq!(fields[8], "000000450.50");
        assert_eq!(fields[9], "000000025.00");
        assert_eq!(fields[10], "000005425.50");
    }

    #[test]
    fn test_short_ids_are_space_padded() {
        let mut short = employee("Jose Reyes", None, "100");
        short.national_id = "12345".to_string();
        let file = encode(&[short]);
        let fields: Vec<&str> = file.lines().nth(1).unwrap().split('|').collect();

        assert_eq!(fields[2], "12345     ");
        assert_eq!(fields[3], " ".repeat(10));
    }

    #[test]
    fn test_long_name_is_truncated_to_sixty() {
        let long_name = "B".repeat(58) + "CDEFG";
        let file = encode(&[employee(&long_name, None, "100")]);
        let name_field = file.lines().nth(1).unwrap().split('|').nth(4).unwrap();

        assert_eq!(name_field, "B".repeat(58) + "CD");
    }

    #[test]
    fn test_header_and_trailer_totals() {
        let file = encode(&[
            employee("One", None, "1000.005"),
            employee("Two", None, "1000.005"),
        ]);
        let lines: Vec<&str> = file.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "SCH|7001234|042026|2|2000.02");
        assert_eq!(lines[3], "TRL|2|2000.02");
    }

    #[test]
    fn test_blank_establishment_id_names_establishment() {
        let error = to_saudi_sif(
            &Establishment::new(" ", "Riyadh Works"),
            PayPeriod::new(4, 2026).unwrap(),
            &[],
        )
        .unwrap_err();

        match error {
            PayrollError::FileGeneration { message } => assert!(message.contains("Riyadh Works")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
