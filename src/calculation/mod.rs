//! Calculation logic for the payroll engine.
//!
//! This module contains the pure monetary functions behind a payroll run:
//! gross and net salary, hourly rate and overtime, absence deductions, years
//! of service, end-of-service gratuity and Saudi statutory contributions. The
//! [`PayrollCalculator`] trait bundles them per country; pick an
//! implementation once per operation with [`calculator_for`].
//!
//! Every function is total. Absent optional inputs count as zero and negative
//! inputs propagate unchanged.

mod calculator;
mod contribution;
mod deductions;
mod earnings;
mod gratuity;
mod overtime;
mod rounding;
mod service;

pub use calculator::{
    PayrollBreakdown, PayrollCalculator, PayrollInput, QatarCalculator, SaudiCalculator,
    calculator_for,
};
pub use contribution::{StatutoryContribution, contribution_base, statutory_contribution};
pub use deductions::{absence_deduction, total_deductions};
pub use earnings::{gross_salary, net_salary};
pub use gratuity::{qatar_gratuity, saudi_gratuity};
pub use overtime::{hourly_rate, overtime_amount};
pub use rounding::round2;
pub use service::{DAYS_PER_YEAR, years_of_service};
