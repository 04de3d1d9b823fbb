//! Batch payroll processing.
//!
//! [`PayrollProcessor`] turns an organization's roster and salary setups into
//! approved [`PayrollRecord`](crate::models::PayrollRecord)s for one period.
//! Breakdowns are computed in parallel, records are written one at a time,
//! and a failure for one employee never aborts the others.

mod outcome;
mod processor;

pub use outcome::{BatchFailure, BatchOutcome};
pub use processor::{PayrollAdjustments, PayrollProcessor};
