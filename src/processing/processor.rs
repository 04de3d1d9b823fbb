//! The batch payroll processor.

use std::collections::HashMap;

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::outcome::{BatchFailure, BatchOutcome};
use crate::calculation::{PayrollCalculator, PayrollInput, calculator_for};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Country, DeductionSet, EmployeeRecord, OvertimeEntry, PayPeriod, PaymentConfirmation,
    PayrollRecord, PayrollStatus, SalaryComponentRecord,
};
use crate::store::{EmployeeDirectory, PayrollStore};

/// Period-specific inputs for one employee on top of the salary setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollAdjustments {
    /// Overtime worked in the period.
    pub overtime: Vec<OvertimeEntry>,
    /// Deductions applied in the period.
    pub deductions: DeductionSet,
    /// Unpaid days absent; when non-zero the absence deduction is derived from it.
    pub days_absent: Decimal,
    /// One-off bonus.
    pub bonus: Decimal,
}

/// Computes and stores approved payroll records for a period.
#[derive(Debug, Clone, Default)]
pub struct PayrollProcessor {
    config: PayrollConfig,
}

impl PayrollProcessor {
    /// Creates a processor over the given country rules.
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Processes payroll for every active employee of an organization.
    ///
    /// # Arguments
    ///
    /// * `directory` - Source of the roster and salary setups
    /// * `store` - Destination for the computed records
    /// * `organization_id` - The organization being paid
    /// * `period` - The pay period
    /// * `country` - Whose rules apply
    /// * `adjustments` - Overtime, deductions, absence and bonus keyed by employee id
    ///
    /// # Returns
    ///
    /// A [`BatchOutcome`] listing the records written and the employees that
    /// failed. Employees without exactly one active salary setup with a
    /// positive basic salary, and employees whose record could not be written,
    /// are reported as failures without affecting the others.
    ///
    /// # Errors
    ///
    /// * [`PayrollError::PeriodAlreadyProcessed`] if the store already holds
    ///   approved or paid records for the period; nothing is computed
    /// * Any error from reading the roster or salary setups
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use rust_decimal::Decimal;
    /// use wps_payroll::models::{Country, EmployeeRecord, PayPeriod, SalaryComponentRecord, SalaryComponents};
    /// use wps_payroll::processing::PayrollProcessor;
    /// use wps_payroll::store::InMemoryStore;
    ///
    /// let mut directory = InMemoryStore::new();
    /// directory.add_employee("org_1", EmployeeRecord::new("emp_1", "EMP-1", "Ravi", "Kumar"));
    /// directory.add_salary("org_1", SalaryComponentRecord {
    ///     id: "sal_1".to_string(),
    ///     employee_id: "emp_1".to_string(),
    ///     country: Country::Qatar,
    ///     components: SalaryComponents { basic: Decimal::from(3000), ..Default::default() },
    ///     is_active: true,
    /// });
    ///
    /// let mut records = InMemoryStore::new();
    /// let outcome = PayrollProcessor::default()
    ///     .process(&directory, &mut records, "org_1", PayPeriod::new(3, 2026).unwrap(), Country::Qatar, &HashMap::new())
    ///     .unwrap();
    ///
    /// assert_eq!(outcome.success_count, 1);
    /// assert_eq!(outcome.records[0].net_salary, Decimal::from(3000));
    /// ```
    pub fn process<D, S>(
        &self,
        directory: &D,
        store: &mut S,
        organization_id: &str,
        period: PayPeriod,
        country: Country,
        adjustments: &HashMap<String, PayrollAdjustments>,
    ) -> PayrollResult<BatchOutcome>
    where
        D: EmployeeDirectory + ?Sized,
        S: PayrollStore + ?Sized,
    {
        let existing = store.records(organization_id, period)?;
        if existing
            .iter()
            .any(|record| record.status() >= PayrollStatus::Approved)
        {
            warn!(organization_id, %period, "Payroll period already processed");
            return Err(PayrollError::PeriodAlreadyProcessed {
                organization_id: organization_id.to_string(),
                period,
            });
        }

        let employees = directory.active_employees(organization_id)?;
        let salaries = directory.salary_components(organization_id, country)?;

        let mut by_employee: HashMap<&str, Vec<&SalaryComponentRecord>> = HashMap::new();
        for salary in salaries
            .iter()
            .filter(|s| s.is_active && s.country == country)
        {
            by_employee
                .entry(salary.employee_id.as_str())
                .or_default()
                .push(salary);
        }

        let calculator = calculator_for(country, &self.config);
        let calculator: &dyn PayrollCalculator = calculator.as_ref();
        let no_adjustments = PayrollAdjustments::default();

        info!(
            organization_id,
            %period,
            %country,
            employees = employees.len(),
            "Processing payroll"
        );

        let computed: Vec<(String, PayrollResult<PayrollRecord>)> = employees
            .par_iter()
            .map(|employee| {
                let own = by_employee
                    .get(employee.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let adjustment = adjustments.get(&employee.id).unwrap_or(&no_adjustments);
                let record = compute_record(
                    calculator,
                    employee,
                    own,
                    adjustment,
                    organization_id,
                    period,
                );
                (employee.id.clone(), record)
            })
            .collect();

        let mut outcome = BatchOutcome::default();
        for (employee_id, computed) in computed {
            let written = computed.and_then(|record| {
                store.insert_record(record.clone())?;
                Ok(record)
            });

            match written {
                Ok(record) => {
                    debug!(employee_id = %employee_id, net_salary = %record.net_salary, "Payroll record written");
                    outcome.success_count += 1;
                    outcome.records.push(record);
                }
                Err(error) => {
                    warn!(employee_id = %employee_id, error = %error, "Payroll record failed");
                    outcome.failures.push(BatchFailure { employee_id, error });
                }
            }
        }

        info!(
            organization_id,
            %period,
            succeeded = outcome.success_count,
            failed = outcome.failures.len(),
            "Payroll batch complete"
        );

        Ok(outcome)
    }

    /// Removes every record for a period so it can be processed again.
    pub fn clear_period<S: PayrollStore + ?Sized>(
        &self,
        store: &mut S,
        organization_id: &str,
        period: PayPeriod,
    ) -> PayrollResult<usize> {
        let removed = store.clear_period(organization_id, period)?;
        info!(organization_id, %period, removed, "Payroll period cleared");
        Ok(removed)
    }

    /// Marks every record of a period as paid under one bank confirmation.
    ///
    /// All records must be `Approved`; otherwise nothing is changed and
    /// [`PayrollError::InvalidStatusTransition`] is returned for the first
    /// offending record. The records are written in one
    /// [`PayrollStore::update_records`] call, so a rejected write leaves the
    /// whole period `Approved`. Returns the number of records marked.
    pub fn mark_period_paid<S: PayrollStore + ?Sized>(
        &self,
        store: &mut S,
        organization_id: &str,
        period: PayPeriod,
        confirmation: PaymentConfirmation,
    ) -> PayrollResult<usize> {
        let records = store.records(organization_id, period)?;
        if records.is_empty() {
            return Err(PayrollError::InvalidPeriod {
                message: format!(
                    "no payroll records for organization '{}' in {}",
                    organization_id, period
                ),
            });
        }

        if let Some(record) = records
            .iter()
            .find(|r| r.status() != PayrollStatus::Approved)
        {
            return Err(PayrollError::InvalidStatusTransition {
                from: record.status(),
                to: PayrollStatus::Paid,
            });
        }

        let count = records.len();
        let mut paid = Vec::with_capacity(count);
        for mut record in records {
            record.mark_paid(confirmation.clone())?;
            paid.push(record);
        }
        store.update_records(paid)?;

        info!(
            organization_id,
            %period,
            records = count,
            bank_reference = %confirmation.bank_reference,
            "Payroll period marked paid"
        );

        Ok(count)
    }
}

fn compute_record(
    calculator: &dyn PayrollCalculator,
    employee: &EmployeeRecord,
    salaries: &[&SalaryComponentRecord],
    adjustments: &PayrollAdjustments,
    organization_id: &str,
    period: PayPeriod,
) -> PayrollResult<PayrollRecord> {
    let salary_error = |message: String| PayrollError::SalaryStructure {
        employee_id: employee.id.clone(),
        message,
    };

    let salary = match salaries {
        [salary] => *salary,
        [] => {
            return Err(salary_error(format!(
                "no active salary components for {}",
                calculator.country()
            )));
        }
        many => {
            return Err(salary_error(format!(
                "{} active salary component records, expected exactly one",
                many.len()
            )));
        }
    };

    if salary.components.basic <= Decimal::ZERO {
        return Err(salary_error(
            "basic salary must be greater than 0".to_string(),
        ));
    }

    let input = PayrollInput {
        employee_id: employee.id.clone(),
        components: salary.components.clone(),
        overtime: adjustments.overtime.clone(),
        deductions: adjustments.deductions.clone(),
        days_absent: adjustments.days_absent,
        bonus: adjustments.bonus,
        nationality: employee.nationality,
    };
    let breakdown = calculator.calculate(&input);

    let mut record = PayrollRecord::draft(
        organization_id,
        employee.id.clone(),
        calculator.country(),
        period,
        input.components,
        breakdown.gross_salary,
        breakdown.overtime_amount,
        breakdown.bonus,
        breakdown.deductions,
        breakdown.net_salary,
    );
    record.approve()?;
    Ok(record)
}
