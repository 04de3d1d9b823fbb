//! Joining payroll records with the roster to produce encoder input.

use std::collections::HashMap;

use crate::models::{ComplianceEmployee, EmployeeRecord, PayrollRecord};

/// Builds the compliance roster for a set of payroll records, in record order.
///
/// Identity and banking fields come from the employee record; blank or
/// absent values are carried as empty strings so the encoders (and the
/// strict bank layout in particular) can report them. Records whose employee
/// is not in `employees` are skipped.
pub fn compliance_roster(
    employees: &[EmployeeRecord],
    records: &[PayrollRecord],
) -> Vec<ComplianceEmployee> {
    let by_id: HashMap<&str, &EmployeeRecord> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    records
        .iter()
        .filter_map(|record| {
            let employee = by_id.get(record.employee_id.as_str())?;
            Some(ComplianceEmployee {
                national_id: employee.national_id().unwrap_or_default().to_string(),
                name: employee.full_name(),
                iban: employee.iban().unwrap_or_default().to_string(),
                bank_code: employee.bank_code().map(str::to_string),
                border_number: employee.border_number().map(str::to_string),
                basic: record.components.basic,
                housing: record.components.housing,
                allowances: record.components.allowances_total(),
                overtime: record.overtime_amount,
                deductions: record.total_deductions,
                net: record.net_salary,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, DeductionSet, PayPeriod, SalaryComponents};
    use rust_decimal::Decimal;

    fn record(employee_id: &str) -> PayrollRecord {
        let components = SalaryComponents {
            basic: Decimal::from(3000),
            housing: Decimal::from(1000),
            transport: Decimal::from(200),
            ..Default::default()
        };
        PayrollRecord::draft(
            "org_1",
            employee_id,
            Country::Qatar,
            PayPeriod::new(3, 2026).unwrap(),
            components,
            Decimal::from(4200),
            Decimal::from(50),
            Decimal::ZERO,
            DeductionSet::default(),
            Decimal::from(4250),
        )
    }

    #[test]
    fn test_joins_records_with_employees() {
        let mut ravi = EmployeeRecord::new("emp_1", "EMP-1", "Ravi", "Kumar");
        ravi.national_id = Some("28435600123".to_string());
        ravi.iban = Some(" ".to_string());
        ravi.border_number = Some("  ".to_string());
        let maria = EmployeeRecord::new("emp_2", "EMP-2", "Maria", "Santos");

        let roster = compliance_roster(&[maria, ravi], &[record("emp_1"), record("emp_9")]);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Ravi Kumar");
        assert_eq!(roster[0].national_id, "28435600123");
        assert_eq!(roster[0].iban, "");
        assert_eq!(roster[0].allowances, Decimal::from(1200));
        assert_eq!(roster[0].housing, Decimal::from(1000));
        assert_eq!(roster[0].border_number, None);
        assert_eq!(roster[0].overtime, Decimal::from(50));
        assert_eq!(roster[0].net, Decimal::from(4250));
    }
}
