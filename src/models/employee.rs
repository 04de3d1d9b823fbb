//! Employee and salary-component records supplied by the roster source.
//!
//! Identity and banking fields are explicit `Option`s. A present but blank
//! string counts as absent; use the accessor methods rather than reading the
//! fields directly when checking presence.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Country, Nationality, SalaryComponents};

/// An employee as read from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Organization-assigned employee code (e.g., "EMP-0042").
    pub employee_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National identity number: the QID in Qatar, the Muqeem/Iqama in Saudi Arabia.
    #[serde(default)]
    pub national_id: Option<String>,
    /// Expiry date of the national identity document.
    #[serde(default)]
    pub national_id_expiry: Option<NaiveDate>,
    /// Salary account IBAN.
    #[serde(default)]
    pub iban: Option<String>,
    /// Name of the bank holding the salary account.
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Three-digit routing code of the salary bank, if known.
    #[serde(default)]
    pub bank_code: Option<String>,
    /// Saudi border number, carried on Saudi wage files.
    #[serde(default)]
    pub border_number: Option<String>,
    /// Residence visa expiry date.
    #[serde(default)]
    pub visa_expiry: Option<NaiveDate>,
    /// Passport expiry date.
    #[serde(default)]
    pub passport_expiry: Option<NaiveDate>,
    /// Nationality class, relevant to Saudi contributions.
    #[serde(default)]
    pub nationality: Nationality,
    /// The date the employee joined.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// Whether the employee is on the active roster.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl EmployeeRecord {
    /// Creates an active employee with only the identifying fields set.
    pub fn new(
        id: impl Into<String>,
        employee_code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_code: employee_code.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: None,
            national_id_expiry: None,
            iban: None,
            bank_name: None,
            bank_code: None,
            border_number: None,
            visa_expiry: None,
            passport_expiry: None,
            nationality: Nationality::NonNational,
            join_date: None,
            is_active: true,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The national identity number, if present and not blank.
    pub fn national_id(&self) -> Option<&str> {
        non_blank(&self.national_id)
    }

    /// The IBAN, if present and not blank.
    pub fn iban(&self) -> Option<&str> {
        non_blank(&self.iban)
    }

    /// The bank name, if present and not blank.
    pub fn bank_name(&self) -> Option<&str> {
        non_blank(&self.bank_name)
    }

    /// The bank code, if present and not blank.
    pub fn bank_code(&self) -> Option<&str> {
        non_blank(&self.bank_code)
    }

    /// The border number, if present and not blank.
    pub fn border_number(&self) -> Option<&str> {
        non_blank(&self.border_number)
    }
}

/// A salary setup row for one employee under one country's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponentRecord {
    /// Unique identifier of the salary setup.
    pub id: String,
    /// The employee this setup belongs to.
    pub employee_id: String,
    /// The country whose rules this setup is for.
    pub country: Country,
    /// The monthly compensation fields.
    pub components: SalaryComponents,
    /// Whether this setup is the one currently in force.
    #[serde(default = "default_active")]
    pub is_active: bool,
}
