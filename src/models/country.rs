//! Country, nationality and separation enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The regulatory regime a payroll run is computed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// State of Qatar.
    Qatar,
    /// Kingdom of Saudi Arabia.
    SaudiArabia,
}

impl Country {
    /// Returns the human-readable country name.
    pub fn name(&self) -> &'static str {
        match self {
            Country::Qatar => "Qatar",
            Country::SaudiArabia => "Saudi Arabia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nationality class used by the Saudi statutory contribution rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    /// A citizen of the payroll country.
    National,
    /// An expatriate worker.
    #[default]
    NonNational,
}

/// The circumstances under which employment ended, for gratuity purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationReason {
    /// The employer terminated the contract.
    #[default]
    EmployerInitiated,
    /// A fixed-term contract reached its end date.
    ContractEnd,
    /// Both parties agreed to end the contract.
    Mutual,
    /// The employee resigned voluntarily.
    Resignation,
}

impl SeparationReason {
    /// Returns true when the employee ended the contract.
    pub fn is_employee_initiated(&self) -> bool {
        *self == SeparationReason::Resignation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_serialization() {
        assert_eq!(serde_json::to_string(&Country::Qatar).unwrap(), "\"qatar\"");
        assert_eq!(
            serde_json::to_string(&Country::SaudiArabia).unwrap(),
            "\"saudi_arabia\""
        );
    }

    #[test]
    fn test_country_display_uses_full_name() {
        assert_eq!(Country::SaudiArabia.to_string(), "Saudi Arabia");
    }

    #[test]
    fn test_only_resignation_is_employee_initiated() {
        assert!(SeparationReason::Resignation.is_employee_initiated());
        assert!(!SeparationReason::Mutual.is_employee_initiated());
        assert!(!SeparationReason::ContractEnd.is_employee_initiated());
        assert!(!SeparationReason::EmployerInitiated.is_employee_initiated());
    }
}
