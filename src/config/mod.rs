//! Country rule configuration for the payroll engine.
//!
//! Statutory parameters (working-time divisors, overtime multipliers, IBAN
//! shape, contribution rates) are loaded from one YAML file per country. The
//! built-in [`CountryRules::qatar`] and [`CountryRules::saudi_arabia`] carry the
//! same statutory defaults for callers that do not ship configuration files.
//!
//! # Example
//!
//! ```no_run
//! use wps_payroll::config::ConfigLoader;
//! use wps_payroll::models::Country;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Qatar working days: {}", config.rules(Country::Qatar).working_days_per_month);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContributionRates, CountryRules, IbanRule, OvertimeMultipliers, PayrollConfig};
