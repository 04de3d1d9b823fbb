//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading country rules
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Country;

use super::types::{CountryRules, PayrollConfig};

/// Loads country rule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── qatar.yaml         # Qatar rules
/// └── saudi_arabia.yaml  # Saudi Arabia rules
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration for every supported country from `path`.
    ///
    /// # Returns
    ///
    /// Returns the configuration on success, or an error if:
    /// - Any country file is missing
    /// - Any file contains invalid YAML or is missing a required field
    /// - A file declares a different country than its name
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wps_payroll::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("./config")?;
    /// # Ok::<(), wps_payroll::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayrollConfig> {
        let path = path.as_ref();

        let qatar = Self::load_country(path, Country::Qatar)?;
        let saudi_arabia = Self::load_country(path, Country::SaudiArabia)?;

        Ok(PayrollConfig::new(qatar, saudi_arabia))
    }

    /// Loads the rules of one country from `<path>/<country>.yaml`.
    pub fn load_country<P: AsRef<Path>>(path: P, country: Country) -> PayrollResult<CountryRules> {
        let file = path.as_ref().join(Self::file_name(country));
        let rules = Self::load_yaml::<CountryRules>(&file)?;

        if rules.country != country {
            return Err(PayrollError::ConfigParseError {
                path: file.display().to_string(),
                message: format!("file declares {} but was loaded for {}", rules.country, country),
            });
        }

        debug!(country = %country, path = %file.display(), "Loaded country rules");
        Ok(rules)
    }

    fn file_name(country: Country) -> &'static str {
        match country {
            Country::Qatar => "qatar.yaml",
            Country::SaudiArabia => "saudi_arabia.yaml",
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
