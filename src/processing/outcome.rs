//! Batch outcome types.

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollRecord;

/// One employee that could not be processed.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// The employee concerned.
    pub employee_id: String,
    /// Why the employee failed.
    pub error: PayrollError,
}

/// The result of a payroll batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Number of records written.
    pub success_count: usize,
    /// Employees that failed, in roster order.
    pub failures: Vec<BatchFailure>,
    /// The records written, in roster order.
    pub records: Vec<PayrollRecord>,
}

impl BatchOutcome {
    /// Returns true when no employee failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Ids of the failed employees.
    pub fn failed_employee_ids(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.employee_id.clone()).collect()
    }

    /// Converts the outcome into the written records, or
    /// [`PayrollError::PartialBatchFailure`] if any employee failed.
    pub fn into_result(self) -> PayrollResult<Vec<PayrollRecord>> {
        if self.failures.is_empty() {
            Ok(self.records)
        } else {
            Err(PayrollError::PartialBatchFailure {
                succeeded: self.success_count,
                failed: self.failed_employee_ids(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_outcome_converts_to_records() {
        let outcome = BatchOutcome::default();
        assert!(outcome.is_complete());
        assert_eq!(outcome.into_result().unwrap(), Vec::new());
    }

    #[test]
    fn test_failures_convert_to_partial_batch_error() {
        let outcome = BatchOutcome {
            success_count: 4,
            failures: vec![BatchFailure {
                employee_id: "emp_5".to_string(),
                error: PayrollError::Store {
                    message: "write failed".to_string(),
                },
            }],
            records: Vec::new(),
        };

        assert_eq!(
            outcome.into_result().unwrap_err(),
            PayrollError::PartialBatchFailure {
                succeeded: 4,
                failed: vec!["emp_5".to_string()],
            }
        );
    }
}
