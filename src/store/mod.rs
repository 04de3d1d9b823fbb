//! Boundaries to the external data source and payroll record store.
//!
//! The engine never owns persistence. It reads the roster through
//! [`EmployeeDirectory`] and writes results through [`PayrollStore`]; the
//! embedding application implements both against its database.
//! [`InMemoryStore`] implements them over plain collections.

mod memory;

pub use memory::InMemoryStore;

use crate::error::PayrollResult;
use crate::models::{Country, EmployeeRecord, PayPeriod, PayrollRecord, SalaryComponentRecord};

/// Read access to an organization's roster and salary setups.
pub trait EmployeeDirectory {
    /// The active employees of an organization, in roster order.
    fn active_employees(&self, organization_id: &str) -> PayrollResult<Vec<EmployeeRecord>>;

    /// The salary component records of an organization for one country.
    fn salary_components(
        &self,
        organization_id: &str,
        country: Country,
    ) -> PayrollResult<Vec<SalaryComponentRecord>>;
}

/// Storage for computed payroll records.
pub trait PayrollStore {
    /// All records of an organization for a period.
    fn records(&self, organization_id: &str, period: PayPeriod) -> PayrollResult<Vec<PayrollRecord>>;

    /// Persists one record.
    fn insert_record(&mut self, record: PayrollRecord) -> PayrollResult<()>;

    /// Replaces stored records by id, all or nothing: when any record cannot
    /// be written, none of them are.
    fn update_records(&mut self, records: Vec<PayrollRecord>) -> PayrollResult<()>;

    /// Removes every record of an organization for a period, returning how many were removed.
    fn clear_period(&mut self, organization_id: &str, period: PayPeriod) -> PayrollResult<usize>;
}
