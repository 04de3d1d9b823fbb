//! Monthly statutory contribution file.
//!
//! ```text
//! GOSI Monthly Contribution File
//! Establishment: {establishment id}
//! Period: {MM/YYYY}
//!
//! GOSI Number,Iqama Number,Employee Name,Nationality,Contribution Base,Employee Share,Employer Share,Total
//! {one line per employee}
//!
//! Total,,,,{base},{employee},{employer},{grand total}
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::format_amount;
use crate::calculation::{StatutoryContribution, round2};
use crate::error::PayrollResult;
use crate::models::{Establishment, Nationality, PayPeriod};

const COLUMNS: &str = "GOSI Number,Iqama Number,Employee Name,Nationality,Contribution Base,Employee Share,Employer Share,Total";

/// One employee's contribution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GosiEmployee {
    /// Social insurance registration number.
    pub gosi_number: String,
    /// Iqama or national identity number.
    pub national_id: String,
    /// Employee display name.
    pub name: String,
    /// Nationality class.
    pub nationality: Nationality,
    /// Capped contribution base.
    pub contribution_base: Decimal,
    /// Employee share.
    pub employee_share: Decimal,
    /// Employer share.
    pub employer_share: Decimal,
}

impl GosiEmployee {
    /// Builds a line from a computed contribution.
    pub fn from_contribution(
        gosi_number: impl Into<String>,
        national_id: impl Into<String>,
        name: impl Into<String>,
        nationality: Nationality,
        contribution: &StatutoryContribution,
    ) -> Self {
        Self {
            gosi_number: gosi_number.into(),
            national_id: national_id.into(),
            name: name.into(),
            nationality,
            contribution_base: contribution.contribution_base,
            employee_share: contribution.employee_total,
            employer_share: contribution.employer_total,
        }
    }
}

fn nationality_label(nationality: Nationality) -> &'static str {
    match nationality {
        Nationality::National => "Saudi",
        Nationality::NonNational => "Non-Saudi",
    }
}

/// Renders the monthly contribution file.
///
/// Fails with [`PayrollError::FileGeneration`](crate::error::PayrollError::FileGeneration) when the establishment id is blank.
pub fn to_gosi_file(
    establishment: &Establishment,
    period: PayPeriod,
    employees: &[GosiEmployee],
) -> PayrollResult<String> {
    establishment.ensure_id()?;

    let mut lines = vec![
        "GOSI Monthly Contribution File".to_string(),
        format!("Establishment: {}", establishment.id),
        format!("Period: {}", period),
        String::new(),
        COLUMNS.to_string(),
    ];

    let (mut total_base, mut total_employee, mut total_employer) =
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

    for employee in employees {
        let base = round2(employee.contribution_base);
        let employee_share = round2(employee.employee_share);
        let employer_share = round2(employee.employer_share);

        lines.push(
            [
                employee.gosi_number.clone(),
                employee.national_id.clone(),
                employee.name.clone(),
                nationality_label(employee.nationality).to_string(),
                format_amount(base),
                format_amount(employee_share),
                format_amount(employer_share),
                format_amount(employee_share + employer_share),
            ]
            .join(","),
        );

        total_base += base;
        total_employee += employee_share;
        total_employer += employer_share;
    }

    lines.push(String::new());
    lines.push(format!(
        "Total,,,,{},{},{},{}",
        format_amount(total_base),
        format_amount(total_employee),
        format_amount(total_employer),
        format_amount(total_employee + total_employer),
    ));

    debug!(
        establishment_id = %establishment.id,
        %period,
        employees = employees.len(),
        "Encoded contribution file"
    );

    Ok(lines.join("\n"))
}
