//! Configuration types for country payroll rules.
//!
//! This module contains the strongly-typed structures deserialized from the
//! per-country YAML files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Country, OvertimeCategory};

/// Rate multipliers applied to the hourly rate, per overtime category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeMultipliers {
    /// Ordinary working-day overtime.
    pub regular: Decimal,
    /// Rest-day overtime.
    pub weekend: Decimal,
    /// Public-holiday overtime.
    pub holiday: Decimal,
}

impl OvertimeMultipliers {
    /// The multiplier for a category.
    pub fn for_category(&self, category: OvertimeCategory) -> Decimal {
        match category {
            OvertimeCategory::Regular => self.regular,
            OvertimeCategory::Weekend => self.weekend,
            OvertimeCategory::Holiday => self.holiday,
        }
    }
}

/// Shape of a valid domestic IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IbanRule {
    /// Two-letter country prefix (e.g., "QA").
    pub prefix: String,
    /// Exact character length.
    pub length: usize,
}

impl IbanRule {
    /// Returns true when `iban` has the right prefix and length.
    pub fn matches(&self, iban: &str) -> bool {
        iban.starts_with(&self.prefix) && iban.chars().count() == self.length
    }
}

/// Statutory social-insurance contribution rates, as fractions of the base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributionRates {
    /// Upper limit on the contribution base (basic + housing).
    pub base_cap: Decimal,
    /// Pension (annuity) rate, employee share; nationals only.
    pub employee_pension: Decimal,
    /// Unemployment insurance rate, employee share; nationals only.
    pub employee_unemployment: Decimal,
    /// Pension (annuity) rate, employer share; nationals only.
    pub employer_pension: Decimal,
    /// Unemployment insurance rate, employer share; nationals only.
    pub employer_unemployment: Decimal,
    /// Occupational hazard rate, employer share; every employee.
    pub employer_hazard: Decimal,
}

/// The payroll rules of one country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRules {
    /// The country these rules apply to.
    pub country: Country,
    /// Days used as divisor for daily and hourly rates.
    pub working_days_per_month: Decimal,
    /// Hours per working day.
    pub hours_per_day: Decimal,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
    /// Valid IBAN shape.
    pub iban: IbanRule,
    /// Exact length of the national ID, when the country fixes one.
    #[serde(default)]
    pub national_id_length: Option<usize>,
    /// Days before a document expiry at which a warning is raised.
    pub expiry_warning_days: i64,
    /// Social-insurance contribution rates, when the country levies them.
    #[serde(default)]
    pub contributions: Option<ContributionRates>,
}

impl CountryRules {
    /// Qatar Labour Law defaults: 26 × 8 hour month, 125%/150% overtime, 29-char QA IBAN.
    pub fn qatar() -> Self {
        Self {
            country: Country::Qatar,
            working_days_per_month: Decimal::from(26),
            hours_per_day: Decimal::from(8),
            overtime: OvertimeMultipliers {
                regular: Decimal::new(125, 2),
                weekend: Decimal::new(150, 2),
                holiday: Decimal::new(150, 2),
            },
            iban: IbanRule {
                prefix: "QA".to_string(),
                length: 29,
            },
            national_id_length: Some(11),
            expiry_warning_days: 30,
            contributions: None,
        }
    }

    /// Saudi Labor Law defaults: 30 × 8 hour month, 150%/200% overtime, GOSI rates.
    pub fn saudi_arabia() -> Self {
        Self {
            country: Country::SaudiArabia,
            working_days_per_month: Decimal::from(30),
            hours_per_day: Decimal::from(8),
            overtime: OvertimeMultipliers {
                regular: Decimal::new(150, 2),
                weekend: Decimal::new(200, 2),
                holiday: Decimal::new(150, 2),
            },
            iban: IbanRule {
                prefix: "SA".to_string(),
                length: 24,
            },
            national_id_length: None,
            expiry_warning_days: 30,
            contributions: Some(ContributionRates {
                base_cap: Decimal::from(45000),
                employee_pension: Decimal::new(9, 2),
                employee_unemployment: Decimal::new(1, 2),
                employer_pension: Decimal::new(9, 2),
                employer_unemployment: Decimal::new(1, 2),
                employer_hazard: Decimal::new(2, 2),
            }),
        }
    }

    /// The built-in rules for a country.
    pub fn for_country(country: Country) -> Self {
        match country {
            Country::Qatar => Self::qatar(),
            Country::SaudiArabia => Self::saudi_arabia(),
        }
    }
}

/// Rules for every supported country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    qatar: CountryRules,
    saudi_arabia: CountryRules,
}

impl PayrollConfig {
    /// Creates a configuration from per-country rules.
    pub fn new(qatar: CountryRules, saudi_arabia: CountryRules) -> Self {
        Self {
            qatar,
            saudi_arabia,
        }
    }

    /// The rules for a country.
    pub fn rules(&self, country: Country) -> &CountryRules {
        match country {
            Country::Qatar => &self.qatar,
            Country::SaudiArabia => &self.saudi_arabia,
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(CountryRules::qatar(), CountryRules::saudi_arabia())
    }
}
