//! Compliance document model.
//!
//! A [`ComplianceDocument`] is the format-independent shape of a WPS salary
//! information file: a header, one detail per employee and a footer. Totals
//! are always recomputed from the details, never taken from the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;
use crate::calculation::round2;
use crate::error::{PayrollError, PayrollResult};

/// The employer submitting the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    /// Labour-ministry registration identifier.
    pub id: String,
    /// Registered establishment name.
    pub name: String,
}

impl Establishment {
    /// Creates an establishment.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Fails with [`PayrollError::FileGeneration`], naming the establishment,
    /// when the id is blank. Every encoder checks this before writing.
    pub fn ensure_id(&self) -> PayrollResult<()> {
        if self.id.trim().is_empty() {
            return Err(PayrollError::FileGeneration {
                message: format!(
                    "establishment '{}' has a blank establishment id",
                    self.name
                ),
            });
        }
        Ok(())
    }
}

/// One employee's paid amounts, as handed to the encoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceEmployee {
    /// National identity number (QID or Iqama).
    pub national_id: String,
    /// Employee display name.
    pub name: String,
    /// Salary account IBAN.
    pub iban: String,
    /// Three-digit bank routing code.
    #[serde(default)]
    pub bank_code: Option<String>,
    /// Border number of a Saudi expatriate's entry visa.
    #[serde(default)]
    pub border_number: Option<String>,
    /// Basic salary.
    pub basic: Decimal,
    /// Housing allowance, included in `allowances`.
    #[serde(default)]
    pub housing: Decimal,
    /// Sum of allowances.
    pub allowances: Decimal,
    /// Overtime pay.
    #[serde(default)]
    pub overtime: Decimal,
    /// Total deductions.
    pub deductions: Decimal,
    /// Net salary transferred.
    pub net: Decimal,
}

impl ComplianceEmployee {
    /// Allowances other than housing.
    pub fn other_allowances(&self) -> Decimal {
        self.allowances - self.housing
    }
}

/// The file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceHeader {
    /// The submitting establishment.
    pub establishment: Establishment,
    /// The pay period.
    pub period: PayPeriod,
    /// Number of detail records.
    pub employee_count: usize,
    /// Sum of every detail's net salary.
    pub total_net: Decimal,
}

/// One detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDetail {
    /// 1-based position in the file.
    pub sequence: usize,
    /// The employee's amounts, rounded to the cent.
    pub employee: ComplianceEmployee,
}

/// The file trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFooter {
    /// Number of detail records.
    pub employee_count: usize,
    /// Sum of every detail's net salary.
    pub total_net: Decimal,
}

/// A complete, reconciled compliance document.
///
/// # Example
///
/// ```
/// use wps_payroll::models::{ComplianceDocument, ComplianceEmployee, Establishment, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let employee = |net: i64| ComplianceEmployee {
///     national_id: "28435600123".to_string(),
///     name: "Test".to_string(),
///     iban: "QA58DOHB00001234567890ABCDEFG".to_string(),
///     bank_code: None,
///     border_number: None,
///     housing: Decimal::ZERO,
///     basic: Decimal::new(net, 2),
///     allowances: Decimal::ZERO,
///     overtime: Decimal::ZERO,
///     deductions: Decimal::ZERO,
///     net: Decimal::new(net, 2),
/// };
///
/// let document = ComplianceDocument::build(
///     &Establishment::new("EST-100", "Doha Trading"),
///     PayPeriod::new(3, 2026).unwrap(),
///     &[employee(150050), employee(249950)],
/// ).unwrap();
///
/// assert_eq!(document.footer.total_net, Decimal::new(400000, 2));
/// assert_eq!(document.header.total_net, document.footer.total_net);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDocument {
    /// Header record.
    pub header: ComplianceHeader,
    /// Detail records in submission order.
    pub details: Vec<ComplianceDetail>,
    /// Trailer record.
    pub footer: ComplianceFooter,
}

impl ComplianceDocument {
    /// Builds a document, rounding each amount to the cent and recomputing totals.
    ///
    /// Fails with [`PayrollError::FileGeneration`] when the establishment id is blank.
    pub fn build(
        establishment: &Establishment,
        period: PayPeriod,
        employees: &[ComplianceEmployee],
    ) -> PayrollResult<Self> {
        establishment.ensure_id()?;

        let details: Vec<ComplianceDetail> = employees
            .iter()
            .enumerate()
            .map(|(index, employee)| ComplianceDetail {
                sequence: index + 1,
                employee: ComplianceEmployee {
                    basic: round2(employee.basic),
                    housing: round2(employee.housing),
                    allowances: round2(employee.allowances),
                    overtime: round2(employee.overtime),
                    deductions: round2(employee.deductions),
                    net: round2(employee.net),
                    ..employee.clone()
                },
            })
            .collect();

        let total_net: Decimal = details.iter().map(|d| d.employee.net).sum();
        let employee_count = details.len();

        Ok(Self {
            header: ComplianceHeader {
                establishment: establishment.clone(),
                period,
                employee_count,
                total_net,
            },
            details,
            footer: ComplianceFooter {
                employee_count,
                total_net,
            },
        })
    }

    /// Sum of the detail net salaries, recomputed on every call.
    pub fn detail_total(&self) -> Decimal {
        self.details.iter().map(|d| d.employee.net).sum()
    }

    /// Returns true when header, footer and details agree to the cent.
    pub fn is_reconciled(&self) -> bool {
        let total = self.detail_total();
        self.header.total_net == total
            && self.footer.total_net == total
            && self.header.employee_count == self.details.len()
            && self.footer.employee_count == self.details.len()
    }
}
