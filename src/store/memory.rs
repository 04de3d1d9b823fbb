//! In-memory implementation of the store boundaries.

use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Country, EmployeeRecord, PayPeriod, PayrollRecord, SalaryComponentRecord};

use super::{EmployeeDirectory, PayrollStore};

/// Roster, salary setups and payroll records held in memory.
///
/// # Example
///
/// ```
/// use wps_payroll::models::{EmployeeRecord, PayPeriod};
/// use wps_payroll::store::{EmployeeDirectory, InMemoryStore, PayrollStore};
///
/// let mut store = InMemoryStore::new();
/// store.add_employee("org_1", EmployeeRecord::new("emp_001", "EMP-1", "Aisha", "Rahman"));
///
/// assert_eq!(store.active_employees("org_1").unwrap().len(), 1);
/// assert!(store.records("org_1", PayPeriod::new(3, 2026).unwrap()).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: HashMap<String, Vec<EmployeeRecord>>,
    salaries: HashMap<String, Vec<SalaryComponentRecord>>,
    records: Vec<PayrollRecord>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to an organization's roster.
    pub fn add_employee(&mut self, organization_id: &str, employee: EmployeeRecord) {
        self.employees
            .entry(organization_id.to_string())
            .or_default()
            .push(employee);
    }

    /// Appends a salary setup to an organization.
    pub fn add_salary(&mut self, organization_id: &str, salary: SalaryComponentRecord) {
        self.salaries
            .entry(organization_id.to_string())
            .or_default()
            .push(salary);
    }

    /// Every stored payroll record.
    pub fn all_records(&self) -> &[PayrollRecord] {
        &self.records
    }
}

impl EmployeeDirectory for InMemoryStore {
    fn active_employees(&self, organization_id: &str) -> PayrollResult<Vec<EmployeeRecord>> {
        Ok(self
            .employees
            .get(organization_id)
            .map(|roster| roster.iter().filter(|e| e.is_active).cloned().collect())
            .unwrap_or_default())
    }

    fn salary_components(
        &self,
        organization_id: &str,
        country: Country,
    ) -> PayrollResult<Vec<SalaryComponentRecord>> {
        Ok(self
            .salaries
            .get(organization_id)
            .map(|rows| rows.iter().filter(|s| s.country == country).cloned().collect())
            .unwrap_or_default())
    }
}

impl PayrollStore for InMemoryStore {
    fn records(&self, organization_id: &str, period: PayPeriod) -> PayrollResult<Vec<PayrollRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.organization_id == organization_id && r.period == period)
            .cloned()
            .collect())
    }

    fn insert_record(&mut self, record: PayrollRecord) -> PayrollResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn update_records(&mut self, records: Vec<PayrollRecord>) -> PayrollResult<()> {
        let mut slots = Vec::with_capacity(records.len());
        for record in &records {
            let slot = self
                .records
                .iter()
                .position(|r| r.id == record.id)
                .ok_or_else(|| PayrollError::Store {
                    message: format!("payroll record {} not found", record.id),
                })?;
            slots.push(slot);
        }

        for (slot, record) in slots.into_iter().zip(records) {
            self.records[slot] = record;
        }
        Ok(())
    }

    fn clear_period(&mut self, organization_id: &str, period: PayPeriod) -> PayrollResult<usize> {
        let before = self.records.len();
        self.records
            .retain(|r| !(r.organization_id == organization_id && r.period == period));
        Ok(before - self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeductionSet, PayrollStatus, SalaryComponents};
    use rust_decimal::Decimal;

    fn period(month: u32) -> PayPeriod {
        PayPeriod::new(month, 2026).unwrap()
    }

    fn record(organization_id: &str, month: u32) -> PayrollRecord {
        PayrollRecord::draft(
            organization_id,
            "emp_001",
            Country::Qatar,
            period(month),
            SalaryComponents::default(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            DeductionSet::default(),
            Decimal::ZERO,
        )
    }

    #[test]
    fn test_inactive_employees_are_not_listed() {
        let mut store = InMemoryStore::new();
        let mut leaver = EmployeeRecord::new("emp_002", "EMP-2", "Omar", "Haddad");
        leaver.is_active = false;
        store.add_employee("org_1", EmployeeRecord::new("emp_001", "EMP-1", "Aisha", "Rahman"));
        store.add_employee("org_1", leaver);

        let roster = store.active_employees("org_1").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "emp_001");
    }

    #[test]
    fn test_salaries_filtered_by_country() {
        let mut store = InMemoryStore::new();
        for (id, country) in [("s1", Country::Qatar), ("s2", Country::SaudiArabia)] {
            store.add_salary(
                "org_1",
                SalaryComponentRecord {
                    id: id.to_string(),
                    employee_id: "emp_001".to_string(),
                    country,
                    components: SalaryComponents::default(),
                    is_active: true,
                },
            );
        }

        let saudi = store.salary_components("org_1", Country::SaudiArabia).unwrap();
        assert_eq!(saudi.len(), 1);
        assert_eq!(saudi[0].id, "s2");
    }

    #[test]
    fn test_clear_period_only_touches_that_period() {
        let mut store = InMemoryStore::new();
        store.insert_record(record("org_1", 3)).unwrap();
        store.insert_record(record("org_1", 3)).unwrap();
        store.insert_record(record("org_1", 4)).unwrap();
        store.insert_record(record("org_2", 3)).unwrap();

        assert_eq!(store.clear_period("org_1", period(3)).unwrap(), 2);
        assert!(store.records("org_1", period(3)).unwrap().is_empty());
        assert_eq!(store.records("org_1", period(4)).unwrap().len(), 1);
        assert_eq!(store.records("org_2", period(3)).unwrap().len(), 1);
    }

    #[test]
    fn test_update_records_replaces_by_id() {
        let mut store = InMemoryStore::new();
        let mut stored = record("org_1", 3);
        store.insert_record(stored.clone()).unwrap();

        stored.approve().unwrap();
        store.update_records(vec![stored.clone()]).unwrap();

        assert_eq!(store.all_records(), &[stored]);
    }

    #[test]
    fn test_update_unknown_record_fails() {
        let mut store = InMemoryStore::new();
        let error = store.update_records(vec![record("org_1", 3)]).unwrap_err();
        assert!(matches!(error, PayrollError::Store { .. }));
    }

    #[test]
    fn test_update_with_one_unknown_record_changes_nothing() {
        let mut store = InMemoryStore::new();
        let mut known = record("org_1", 3);
        store.insert_record(known.clone()).unwrap();

        known.approve().unwrap();
        let error = store
            .update_records(vec![known, record("org_1", 3)])
            .unwrap_err();

        assert!(matches!(error, PayrollError::Store { .. }));
        assert_eq!(store.all_records()[0].status(), PayrollStatus::Draft);
    }
}
