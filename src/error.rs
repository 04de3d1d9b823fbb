//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can leave the engine. Calculator functions are total
//! and never produce these; validation findings are collected as
//! [`ValidationIssue`](crate::models::ValidationIssue) values instead.

use thiserror::Error;

use crate::models::{PayPeriod, PayrollStatus};

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use wps_payroll::error::PayrollError;
///
/// let error = PayrollError::FileGeneration {
///     message: "establishment id is blank".to_string(),
/// };
/// assert_eq!(error.to_string(), "File generation failed: establishment id is blank");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay period month/year pair or period token was malformed.
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of what was wrong with the period.
        message: String,
    },

    /// A required identity, banking or salary field was absent.
    #[error("Employee '{employee}' is missing {field}")]
    MissingData {
        /// The employee the field belongs to.
        employee: String,
        /// The absent field.
        field: String,
    },

    /// A regulated field was expired or malformed.
    #[error("Compliance error for employee '{employee}': {message}")]
    Compliance {
        /// The employee the field belongs to.
        employee: String,
        /// A description of the violation.
        message: String,
    },

    /// The compensation setup of an employee was absent or invalid.
    #[error("Invalid salary structure for employee '{employee_id}': {message}")]
    SalaryStructure {
        /// The employee whose salary setup is invalid.
        employee_id: String,
        /// A description of the problem.
        message: String,
    },

    /// A compliance file could not be produced from the supplied data.
    #[error("File generation failed: {message}")]
    FileGeneration {
        /// A description of the failure.
        message: String,
    },

    /// Some employees in a batch failed while others were written.
    #[error("Payroll batch partially failed: {succeeded} succeeded, {} failed ({})", .failed.len(), .failed.join(", "))]
    PartialBatchFailure {
        /// The number of records written.
        succeeded: usize,
        /// The ids of the employees that failed.
        failed: Vec<String>,
    },

    /// Payroll records already exist for the organization and period.
    #[error("Payroll for organization '{organization_id}' period {period} has already been processed")]
    PeriodAlreadyProcessed {
        /// The organization.
        organization_id: String,
        /// The period that already has records.
        period: PayPeriod,
    },

    /// A payroll record status change went backwards or skipped a step.
    #[error("Invalid payroll status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: PayrollStatus,
        /// The requested status.
        to: PayrollStatus,
    },

    /// The external store failed to read or write.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
