//! Compliance file encoders.
//!
//! Every encoder takes an [`Establishment`], a [`PayPeriod`] and the
//! per-employee amounts, builds a reconciled
//! [`ComplianceDocument`](crate::models::ComplianceDocument) (which rejects a
//! blank establishment id and recomputes totals), and renders it as text.
//!
//! | Format | Qatar | Saudi Arabia | Extension |
//! |--------|-------|--------------|-----------|
//! | Fixed-field pipe-delimited | [`to_sif`] | [`to_saudi_sif`] | `sif` |
//! | Labour-ministry wage file | | [`to_molhss_file`] | `txt` |
//! | Minimal comma-delimited | [`to_bank_file`] | [`to_bank_file`] | `txt` |
//! | Quoted CSV | [`to_csv`] | [`to_csv`] | `csv` |
//!
//! The statutory contribution file ([`to_gosi_file`]) is rendered separately
//! from contribution figures rather than paid amounts.

mod bank;
mod csv;
mod gosi;
mod molhss;
mod roster;
mod saudi_sif;
mod sif;
mod summary;

pub use bank::to_bank_file;
pub use csv::to_csv;
pub use gosi::{GosiEmployee, to_gosi_file};
pub use molhss::to_molhss_file;
pub use roster::compliance_roster;
pub use saudi_sif::to_saudi_sif;
pub use sif::to_sif;
pub use summary::WpsSummary;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round2;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ComplianceEmployee, Country, Establishment, PayPeriod};

/// The salary information file layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Fixed-field pipe-delimited salary information file.
    Sif,
    /// Saudi labour-ministry wage file.
    Molhss,
    /// Minimal comma-delimited bank upload.
    Bank,
    /// Quoted CSV for bank portals and spreadsheets.
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Sif => "sif",
            ExportFormat::Molhss => "txt",
            ExportFormat::Bank => "txt",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Encodes a roster in the requested format, choosing the layout for `country`.
///
/// The wage file exists only for Saudi Arabia; asking for it under Qatar
/// fails with [`PayrollError::FileGeneration`].
pub fn encode(
    format: ExportFormat,
    country: Country,
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[ComplianceEmployee],
) -> PayrollResult<String> {
    match (format, country) {
        (ExportFormat::Sif, Country::Qatar) => to_sif(establishment, period, employees),
        (ExportFormat::Sif, Country::SaudiArabia) => {
            to_saudi_sif(establishment, period, employees)
        }
        (ExportFormat::Molhss, Country::SaudiArabia) => {
            to_molhss_file(establishment, period, employees)
        }
        (ExportFormat::Molhss, Country::Qatar) => Err(PayrollError::FileGeneration {
            message: format!("the {:?} layout is not defined for {}", format, country),
        }),
        (ExportFormat::Bank, _) => to_bank_file(establishment, period, employees),
        (ExportFormat::Csv, _) => to_csv(country, establishment, period, employees),
    }
}

/// The file name for an export: `WPS_{establishmentId}_{MMYYYY}.{ext}`.
///
/// # Example
///
/// ```
/// use wps_payroll::export::{ExportFormat, file_name};
/// use wps_payroll::models::PayPeriod;
///
/// let period = PayPeriod::new(3, 2026).unwrap();
/// assert_eq!(file_name("EST-100", period, ExportFormat::Sif), "WPS_EST-100_032026.sif");
/// assert_eq!(file_name("EST-100", period, ExportFormat::Csv), "WPS_EST-100_032026.csv");
/// ```
pub fn file_name(establishment_id: &str, period: PayPeriod, format: ExportFormat) -> String {
    format!(
        "WPS_{}_{}.{}",
        establishment_id,
        period.mmyyyy(),
        format.extension()
    )
}

/// Renders an amount rounded to the cent with exactly two decimals.
pub(crate) fn format_amount(amount: Decimal) -> String {
    let mut value = round2(amount);
    if value.is_zero() {
        value = Decimal::ZERO;
    }
    value.rescale(2);
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_always_has_two_decimals() {
        assert_eq!(format_amount(dec("3000")), "3000.00");
        assert_eq!(format_amount(dec("12.5")), "12.50");
        assert_eq!(format_amount(dec("180.2884")), "180.29");
        assert_eq!(format_amount(dec("0.005")), "0.01");
    }

    #[test]
    fn test_format_amount_negative_zero() {
        assert_eq!(format_amount(dec("-0.001")), "0.00");
        assert_eq!(format_amount(dec("-12.345")), "-12.35");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Sif.extension(), "sif");
        assert_eq!(ExportFormat::Molhss.extension(), "txt");
        assert_eq!(ExportFormat::Bank.extension(), "txt");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    fn roster() -> Vec<ComplianceEmployee> {
        vec![ComplianceEmployee {
            national_id: "2345678901".to_string(),
            name: "Jose Reyes".to_string(),
            iban: "SA0380000000608010167519".to_string(),
            bank_code: None,
            border_number: Some("3012345678".to_string()),
            housing: dec("1000"),
            basic: dec("4000"),
            allowances: dec("1300"),
            overtime: Decimal::ZERO,
            deductions: Decimal::ZERO,
            net: dec("5300"),
        }]
    }

    #[test]
    fn test_sif_layout_follows_country() {
        let establishment = Establishment::new("7001234", "Riyadh Works");
        let period = PayPeriod::new(4, 2026).unwrap();

        let saudi = encode(
            ExportFormat::Sif,
            Country::SaudiArabia,
            &establishment,
            period,
            &roster(),
        )
        .unwrap();
        let qatar =
            encode(ExportFormat::Sif, Country::Qatar, &establishment, period, &roster()).unwrap();

        assert!(saudi.starts_with("SCH|7001234|042026|1|5300.00"));
        assert!(saudi.lines().nth(1).unwrap().starts_with("EMP|000001|"));
        assert!(qatar.starts_with("H|7001234|Riyadh Works|042026|1|5300.00"));
    }

    #[test]
    fn test_wage_file_is_saudi_only() {
        let establishment = Establishment::new("7001234", "Riyadh Works");
        let period = PayPeriod::new(4, 2026).unwrap();

        let file = encode(
            ExportFormat::Molhss,
            Country::SaudiArabia,
            &establishment,
            period,
            &roster(),
        )
        .unwrap();
        assert!(file.starts_with("MOLHSS Wage File"));

        let error = encode(
            ExportFormat::Molhss,
            Country::Qatar,
            &establishment,
            period,
            &roster(),
        )
        .unwrap_err();
        assert!(matches!(error, PayrollError::FileGeneration { .. }));
    }

    #[test]
    fn test_bank_file_name() {
        let period = PayPeriod::new(11, 2025).unwrap();
        assert_eq!(
            file_name("12345", period, ExportFormat::Bank),
            "WPS_12345_112025.txt"
        );
    }
}
