//! Core data models for the payroll engine.
//!
//! This module contains the domain models shared by the calculators, the
//! pre-payroll validator, the batch processor and the compliance encoders.

mod compliance;
mod country;
mod deductions;
mod employee;
mod overtime;
mod pay_period;
mod payroll_record;
mod salary;
mod validation;

pub use compliance::{
    ComplianceDetail, ComplianceDocument, ComplianceEmployee, ComplianceFooter, ComplianceHeader,
    Establishment,
};
pub use country::{Country, Nationality, SeparationReason};
pub use deductions::DeductionSet;
pub use employee::{EmployeeRecord, SalaryComponentRecord};
pub use overtime::{OvertimeCategory, OvertimeEntry};
pub use pay_period::PayPeriod;
pub use payroll_record::{PaymentConfirmation, PayrollRecord, PayrollStatus};
pub use salary::SalaryComponents;
pub use validation::{IssueCategory, Severity, ValidationIssue, ValidationResult};
