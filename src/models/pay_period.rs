//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type: the (month, year) pair a payroll
//! run applies to, plus the period tokens used inside compliance files.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PayrollError, PayrollResult};

/// A monthly pay period.
///
/// The month is always in `1..=12`; construct through [`PayPeriod::new`].
///
/// # Example
///
/// ```
/// use wps_payroll::models::PayPeriod;
///
/// let period = PayPeriod::new(3, 2026).unwrap();
/// assert_eq!(period.mmyyyy(), "032026");
/// assert_eq!(period.yyyymm(), "202603");
/// assert!(PayPeriod::new(13, 2026).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPayPeriod")]
pub struct PayPeriod {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawPayPeriod {
    month: u32,
    year: i32,
}

impl TryFrom<RawPayPeriod> for PayPeriod {
    type Error = PayrollError;

    fn try_from(raw: RawPayPeriod) -> PayrollResult<Self> {
        PayPeriod::new(raw.month, raw.year)
    }
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside `1..=12`.
    pub fn new(month: u32, year: i32) -> PayrollResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PayrollError::InvalidPeriod {
                message: format!("month must be between 1 and 12, got {}", month),
            });
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYYMM` token such as `202603`.
    pub fn parse_yyyymm(token: &str) -> PayrollResult<Self> {
        let invalid = || PayrollError::InvalidPeriod {
            message: format!("expected YYYYMM, got '{}'", token),
        };

        if token.len() != 6 || !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = token[..4].parse().map_err(|_| invalid())?;
        let month: u32 = token[4..].parse().map_err(|_| invalid())?;
        Self::new(month, year).map_err(|_| invalid())
    }

    /// The month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The `MMYYYY` token used in SIF headers and file names.
    pub fn mmyyyy(&self) -> String {
        format!("{:02}{}", self.month, self.year)
    }

    /// The `YYYYMM` token used by the minimal bank file.
    pub fn yyyymm(&self) -> String {
        format!("{}{:02}", self.year, self.month)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
