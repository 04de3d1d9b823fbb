//! Payroll record model and its status lifecycle.
//!
//! A record moves `Draft → Approved → Paid` and never backwards. Payment
//! metadata is set only by [`PayrollRecord::mark_paid`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Country, DeductionSet, PayPeriod, SalaryComponents};
use crate::error::{PayrollError, PayrollResult};

/// Lifecycle status of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Created, amounts not yet confirmed.
    Draft,
    /// Amounts computed and stored.
    Approved,
    /// Payment confirmed by the bank.
    Paid,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PayrollStatus::Draft => "draft",
            PayrollStatus::Approved => "approved",
            PayrollStatus::Paid => "paid",
        })
    }
}

/// Proof that a payroll record was paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// The bank's transfer reference.
    pub bank_reference: String,
    /// The value date of the transfer.
    pub payment_date: NaiveDate,
}

/// One employee's payroll for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier of the record.
    pub id: Uuid,
    /// The organization the payroll belongs to.
    pub organization_id: String,
    /// The employee paid.
    pub employee_id: String,
    /// The country whose rules computed the amounts.
    pub country: Country,
    /// The pay period.
    pub period: PayPeriod,
    /// Snapshot of the salary components at processing time.
    pub components: SalaryComponents,
    /// Sum of the salary components.
    pub gross_salary: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Bonus paid this period.
    pub bonus: Decimal,
    /// Deductions applied.
    pub deductions: DeductionSet,
    /// Sum of the present deductions.
    pub total_deductions: Decimal,
    /// Amount transferred to the employee.
    pub net_salary: Decimal,
    status: PayrollStatus,
    payment: Option<PaymentConfirmation>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// Creates a draft record.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        organization_id: impl Into<String>,
        employee_id: impl Into<String>,
        country: Country,
        period: PayPeriod,
        components: SalaryComponents,
        gross_salary: Decimal,
        overtime_amount: Decimal,
        bonus: Decimal,
        deductions: DeductionSet,
        net_salary: Decimal,
    ) -> Self {
        let total_deductions = deductions.total();
        Self {
            id: Uuid::new_v4(),
            organization_id: organization_id.into(),
            employee_id: employee_id.into(),
            country,
            period,
            components,
            gross_salary,
            overtime_amount,
            bonus,
            deductions,
            total_deductions,
            net_salary,
            status: PayrollStatus::Draft,
            payment: None,
            created_at: Utc::now(),
        }
    }

    /// The current status.
    pub fn status(&self) -> PayrollStatus {
        self.status
    }

    /// The payment confirmation, present once the record is paid.
    pub fn payment(&self) -> Option<&PaymentConfirmation> {
        self.payment.as_ref()
    }

    /// Moves a draft record to `Approved`.
    pub fn approve(&mut self) -> PayrollResult<()> {
        self.transition(PayrollStatus::Approved)
    }

    /// Moves an approved record to `Paid`, recording the bank confirmation.
    ///
    /// # Example
    ///
    /// ```
    /// use wps_payroll::models::{
    ///     Country, DeductionSet, PayPeriod, PaymentConfirmation, PayrollRecord, PayrollStatus,
    ///     SalaryComponents,
    /// };
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut record = PayrollRecord::draft(
    ///     "org_1", "emp_001", Country::Qatar, PayPeriod::new(3, 2026).unwrap(),
    ///     SalaryComponents::default(), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO,
    ///     DeductionSet::default(), Decimal::ZERO,
    /// );
    /// record.approve().unwrap();
    /// record.mark_paid(PaymentConfirmation {
    ///     bank_reference: "QNB-778812".to_string(),
    ///     payment_date: NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
    /// }).unwrap();
    /// assert_eq!(record.status(), PayrollStatus::Paid);
    /// assert!(record.approve().is_err());
    /// ```
    pub fn mark_paid(&mut self, confirmation: PaymentConfirmation) -> PayrollResult<()> {
        self.transition(PayrollStatus::Paid)?;
        self.payment = Some(confirmation);
        Ok(())
    }

    fn transition(&mut self, to: PayrollStatus) -> PayrollResult<()> {
        let allowed = matches!(
            (self.status, to),
            (PayrollStatus::Draft, PayrollStatus::Approved)
                | (PayrollStatus::Approved, PayrollStatus::Paid)
        );
        if !allowed {
            return Err(PayrollError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}
