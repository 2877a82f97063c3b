use super::allowance::personal_allowance;
use super::bands::BandedTax;
use super::constants::ConstantsTable;
use super::error::TaxError;
use super::income::calculate_income_tax;
use super::ni::{calculate_national_insurance, Contributor};
use super::pension::{auto_enrolment_contribution, gross_contribution, PensionContributions};
use super::student_loan::{calculate_student_loan, StudentLoanPlan};
use super::uk::TaxYear;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Income and elections for one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxInputs {
    #[schemars(with = "f64")]
    pub gross_income: Decimal,
    pub tax_year: TaxYear,
    #[serde(default)]
    pub resident_in_scotland: bool,
    #[serde(default)]
    pub student_loan: StudentLoanPlan,
    /// Suppress National Insurance entirely (e.g. above state pension age)
    #[serde(default)]
    pub no_ni: bool,
    #[serde(default)]
    pub pension: PensionContributions,
}

impl TaxInputs {
    pub fn new(gross_income: Decimal, tax_year: TaxYear) -> Self {
        TaxInputs {
            gross_income,
            tax_year,
            resident_in_scotland: false,
            student_loan: StudentLoanPlan::None,
            no_ni: false,
            pension: PensionContributions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxResult {
    pub tax_year: TaxYear,
    pub gross_income: Decimal,
    /// Salary after every salary-sacrifice deduction; the base for NI and student loan
    pub income_after_salary_sacrifice: Decimal,
    pub auto_enrolment_contribution: Decimal,
    pub adjusted_net_income: Decimal,
    pub personal_allowance: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: BandedTax,
    pub employee_ni: BandedTax,
    /// Informational only, never deducted from take-home pay
    pub employer_ni: BandedTax,
    pub student_loan: Decimal,
    /// Income tax, employee NI and student loan
    pub combined_taxes: Decimal,
    pub take_home_pay: Decimal,
    pub pension_pot: Decimal,
    /// Pension pot plus take-home pay
    pub your_money: Decimal,
}

/// Run the full pipeline for one set of inputs.
///
/// Stage order matters: salary sacrifice reduces the NI and student loan base,
/// while every pension contribution reduces adjusted net income, which drives
/// the allowance taper and the income tax base.
pub fn calculate_taxes(table: &ConstantsTable, inputs: &TaxInputs) -> Result<TaxResult, TaxError> {
    let constants = table.get(inputs.tax_year)?;
    let pension = &inputs.pension;

    let mut income_after_salary_sacrifice =
        (inputs.gross_income - pension.salary_sacrifice).max(Decimal::ZERO);
    let auto_enrolment = auto_enrolment_contribution(
        income_after_salary_sacrifice,
        pension.auto_enrolment_percentage,
    );
    if pension.auto_enrolment_as_salary_sacrifice {
        income_after_salary_sacrifice -= auto_enrolment;
    }
    log::debug!(
        "Income after salary sacrifice: {} (auto-enrolment {})",
        income_after_salary_sacrifice,
        auto_enrolment
    );

    let ni = &constants.national_insurance;
    let employee_ni = calculate_national_insurance(
        income_after_salary_sacrifice,
        Contributor::Employee,
        inputs.no_ni,
        ni,
    );
    let employer_ni = calculate_national_insurance(
        income_after_salary_sacrifice,
        Contributor::Employer,
        inputs.no_ni,
        ni,
    );
    let student_loan = calculate_student_loan(
        income_after_salary_sacrifice,
        inputs.student_loan,
        &constants.student_loans,
        inputs.tax_year,
    )?;

    let personal_contribution =
        gross_contribution(pension.personal_contribution, pension.tax_relief_at_source);
    let pension_pot = pension.salary_sacrifice + auto_enrolment + personal_contribution;

    let adjusted_net_income = (inputs.gross_income - pension_pot).max(Decimal::ZERO);
    let allowance = personal_allowance(adjusted_net_income, &constants.personal_allowance);
    let taxable_income = (adjusted_net_income - allowance).max(Decimal::ZERO);
    log::debug!(
        "Adjusted net income {}, allowance {}, taxable {}",
        adjusted_net_income,
        allowance,
        taxable_income
    );

    let income_tax = calculate_income_tax(
        taxable_income,
        inputs.resident_in_scotland,
        &constants.income_tax,
    );

    let combined_taxes = income_tax.total + employee_ni.total + student_loan;
    let take_home_pay = adjusted_net_income - combined_taxes;

    Ok(TaxResult {
        tax_year: inputs.tax_year,
        gross_income: inputs.gross_income,
        income_after_salary_sacrifice,
        auto_enrolment_contribution: auto_enrolment,
        adjusted_net_income,
        personal_allowance: allowance,
        taxable_income,
        income_tax,
        employee_ni,
        employer_ni,
        student_loan,
        combined_taxes,
        take_home_pay,
        pension_pot,
        your_money: pension_pot + take_home_pay,
    })
}
