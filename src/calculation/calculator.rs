//! Country payroll calculators.
//!
//! [`PayrollCalculator`] is the shared contract: gross, overtime, deductions,
//! net and end-of-service gratuity. [`QatarCalculator`] and [`SaudiCalculator`]
//! supply the country constants and the parts that differ (gratuity tiers and
//! statutory contributions).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    StatutoryContribution, absence_deduction, gross_salary, hourly_rate, net_salary,
    overtime_amount, qatar_gratuity, saudi_gratuity, statutory_contribution,
};
use crate::config::{CountryRules, PayrollConfig};
use crate::models::{
    Country, DeductionSet, Nationality, OvertimeEntry, SalaryComponents, SeparationReason,
};

/// Everything needed to compute one employee's pay for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee being paid.
    pub employee_id: String,
    /// Salary components in force for the period.
    pub components: SalaryComponents,
    /// Overtime worked.
    #[serde(default)]
    pub overtime: Vec<OvertimeEntry>,
    /// Caller-supplied deductions.
    #[serde(default)]
    pub deductions: DeductionSet,
    /// Unpaid absence days; when non-zero the absence deduction is derived from it.
    #[serde(default)]
    pub days_absent: Decimal,
    /// Bonus paid this period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Nationality class, used for Saudi contributions.
    #[serde(default)]
    pub nationality: Nationality,
}

/// The computed pay of one employee for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Sum of the salary components.
    pub gross_salary: Decimal,
    /// Basic salary per working hour, unrounded.
    pub hourly_rate: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Bonus paid.
    pub bonus: Decimal,
    /// Statutory contribution split, when the country levies one.
    pub contribution: Option<StatutoryContribution>,
    /// Deductions applied, including derived absence and contribution shares.
    pub deductions: DeductionSet,
    /// Gross + overtime + bonus.
    pub total_earnings: Decimal,
    /// Sum of the applied deductions.
    pub total_deductions: Decimal,
    /// Amount transferred to the employee.
    pub net_salary: Decimal,
    /// Total earnings plus the employer's contribution share.
    pub employer_cost: Decimal,
}

/// The calculation contract every country implements.
///
/// Implementations only have to provide [`rules`](Self::rules) and
/// [`end_of_service`](Self::end_of_service); the rest is driven by the rules.
pub trait PayrollCalculator: Send + Sync {
    /// The country constants this calculator uses.
    fn rules(&self) -> &CountryRules;

    /// Country-specific end-of-service gratuity.
    fn end_of_service(
        &self,
        basic: Decimal,
        years_of_service: Decimal,
        reason: SeparationReason,
    ) -> Decimal;

    /// The country this calculator applies.
    fn country(&self) -> Country {
        self.rules().country
    }

    /// Sum of the seven salary components.
    fn gross_salary(&self, components: &SalaryComponents) -> Decimal {
        gross_salary(components)
    }

    /// Basic salary per working hour.
    fn hourly_rate(&self, basic: Decimal) -> Decimal {
        let rules = self.rules();
        hourly_rate(basic, rules.working_days_per_month, rules.hours_per_day)
    }

    /// Overtime pay for the entries.
    fn overtime_amount(&self, basic: Decimal, entries: &[OvertimeEntry]) -> Decimal {
        overtime_amount(basic, entries, self.rules())
    }

    /// Absence deduction against gross salary.
    fn absence_deduction(&self, gross: Decimal, days_absent: Decimal) -> Decimal {
        absence_deduction(gross, self.rules().working_days_per_month, days_absent)
    }

    /// Sum of the present deductions.
    fn total_deductions(&self, deductions: &DeductionSet) -> Decimal {
        deductions.total()
    }

    /// Net salary.
    fn net_salary(
        &self,
        gross: Decimal,
        overtime: Decimal,
        total_deductions: Decimal,
        bonus: Decimal,
    ) -> Decimal {
        net_salary(gross, overtime, total_deductions, bonus)
    }

    /// Statutory contribution split, `None` where the country levies none.
    fn statutory_contribution(
        &self,
        components: &SalaryComponents,
        nationality: Nationality,
    ) -> Option<StatutoryContribution> {
        self.rules().contributions.as_ref().map(|rates| {
            statutory_contribution(components.basic, components.housing, nationality, rates)
        })
    }

    /// Computes the complete breakdown for one employee.
    fn calculate(&self, input: &PayrollInput) -> PayrollBreakdown {
        let components = &input.components;
        let gross = self.gross_salary(components);
        let overtime = self.overtime_amount(components.basic, &input.overtime);

        let mut deductions = input.deductions.clone();
        if !input.days_absent.is_zero() {
            deductions.absence = Some(self.absence_deduction(gross, input.days_absent));
        }

        // Only a country that levies contributions may carry one.
        let contribution = self.statutory_contribution(components, input.nationality);
        deductions.statutory_contribution = contribution.as_ref().map(|c| c.employee_total);

        let total_deductions = self.total_deductions(&deductions);
        let total_earnings = gross + overtime + input.bonus;
        let employer_share = contribution
            .as_ref()
            .map(|c| c.employer_total)
            .unwrap_or(Decimal::ZERO);

        PayrollBreakdown {
            gross_salary: gross,
            hourly_rate: self.hourly_rate(components.basic),
            overtime_amount: overtime,
            bonus: input.bonus,
            net_salary: self.net_salary(gross, overtime, total_deductions, input.bonus),
            employer_cost: total_earnings + employer_share,
            contribution,
            deductions,
            total_earnings,
            total_deductions,
        }
    }
}

/// Qatar payroll rules.
#[derive(Debug, Clone)]
pub struct QatarCalculator {
    rules: CountryRules,
}

impl QatarCalculator {
    /// Creates a calculator with the given rules.
    pub fn new(rules: CountryRules) -> Self {
        Self { rules }
    }
}

impl Default for QatarCalculator {
    fn default() -> Self {
        Self::new(CountryRules::qatar())
    }
}

impl PayrollCalculator for QatarCalculator {
    fn rules(&self) -> &CountryRules {
        &self.rules
    }

    fn end_of_service(
        &self,
        basic: Decimal,
        years_of_service: Decimal,
        reason: SeparationReason,
    ) -> Decimal {
        qatar_gratuity(basic, years_of_service, reason)
    }
}

/// Saudi Arabia payroll rules.
#[derive(Debug, Clone)]
pub struct SaudiCalculator {
    rules: CountryRules,
}

impl SaudiCalculator {
    /// Creates a calculator with the given rules.
    pub fn new(rules: CountryRules) -> Self {
        Self { rules }
    }
}

impl Default for SaudiCalculator {
    fn default() -> Self {
        Self::new(CountryRules::saudi_arabia())
    }
}

impl PayrollCalculator for SaudiCalculator {
    fn rules(&self) -> &CountryRules {
        &self.rules
    }

    fn end_of_service(
        &self,
        basic: Decimal,
        years_of_service: Decimal,
        reason: SeparationReason,
    ) -> Decimal {
        saudi_gratuity(basic, years_of_service, reason)
    }
}

/// Selects the calculator for a country.
///
/// # Examples
///
/// ```
/// use wps_payroll::calculation::calculator_for;
/// use wps_payroll::config::PayrollConfig;
/// use wps_payroll::models::Country;
///
/// let calculator = calculator_for(Country::SaudiArabia, &PayrollConfig::default());
/// assert_eq!(calculator.country(), Country::SaudiArabia);
/// ```
pub fn calculator_for(country: Country, config: &PayrollConfig) -> Box<dyn PayrollCalculator> {
    let rules = config.rules(country).clone();
    match country {
        Country::Qatar => Box::new(QatarCalculator::new(rules)),
        Country::SaudiArabia => Box::new(SaudiCalculator::new(rules)),
    }
}
