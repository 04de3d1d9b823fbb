//! Pre-payroll validation.
//!
//! Runs a fixed battery of rules over an organization's active roster and
//! salary setups before a payroll run. Findings are collected into a
//! [`ValidationResult`](crate::models::ValidationResult), split into blocking
//! errors and advisory warnings; nothing is raised for a failed rule.
//!
//! Per employee the rules run in a fixed order: identity, banking, document
//! expiry, salary structure.

mod report;
mod rules;
mod validator;

pub use report::validation_report;
pub use rules::{
    check_banking, check_document_expiry, check_identity, check_salary_structure,
};
pub use validator::PrePayrollValidator;
