//! Per-year rates and thresholds, loaded from JSON or the built-in table

use super::bands::RateBand;
use super::error::TaxError;
use super::student_loan::StudentLoanPlan;
use super::uk::{self, TaxYear};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Every tax year the calculator knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConstantsTable {
    pub years: Vec<TaxYearConstants>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxYearConstants {
    pub tax_year: TaxYear,
    pub personal_allowance: PersonalAllowance,
    pub income_tax: IncomeTaxBands,
    pub national_insurance: NationalInsurance,
    pub student_loans: StudentLoans,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PersonalAllowance {
    #[schemars(with = "f64")]
    pub basic_amount: Decimal,
    /// Adjusted net income above which the allowance is withdrawn
    #[schemars(with = "f64")]
    pub taper_threshold: Decimal,
}

/// Income tax bands over taxable income (after the personal allowance)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IncomeTaxBands {
    pub rest_of_uk: Vec<RateBand>,
    pub scotland: Vec<RateBand>,
}

impl IncomeTaxBands {
    pub fn for_residency(&self, resident_in_scotland: bool) -> &[RateBand] {
        if resident_in_scotland {
            &self.scotland
        } else {
            &self.rest_of_uk
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NationalInsurance {
    /// Employee contributions start above this
    #[schemars(with = "f64")]
    pub primary_threshold: Decimal,
    /// Employer contributions start above this
    #[schemars(with = "f64")]
    pub secondary_threshold: Decimal,
    #[schemars(with = "f64")]
    pub upper_earnings_limit: Decimal,
    /// Rates below and above the upper earnings limit
    #[schemars(with = "[f64; 2]")]
    pub employee_rates: [Decimal; 2],
    #[schemars(with = "[f64; 2]")]
    pub employer_rates: [Decimal; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentLoans {
    #[schemars(with = "f64")]
    pub default_rate: Decimal,
    #[schemars(with = "f64")]
    pub postgrad_rate: Decimal,
    #[schemars(with = "BTreeMap<StudentLoanPlan, f64>")]
    pub thresholds: BTreeMap<StudentLoanPlan, Decimal>,
}

impl ConstantsTable {
    pub fn builtin() -> Self {
        uk::builtin_table()
    }

    /// Read a JSON table and validate every year in it
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TaxError> {
        let table: ConstantsTable = serde_json::from_reader(reader)?;
        table.validate()?;
        log::info!("Loaded constants for {} tax years", table.years.len());
        Ok(table)
    }

    pub fn get(&self, tax_year: TaxYear) -> Result<&TaxYearConstants, TaxError> {
        self.years
            .iter()
            .find(|y| y.tax_year == tax_year)
            .ok_or(TaxError::UnknownTaxYear(tax_year))
    }

    pub fn latest(&self) -> Option<TaxYear> {
        self.years.iter().map(|y| y.tax_year).max()
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        for (i, year) in self.years.iter().enumerate() {
            if self.years[..i].iter().any(|y| y.tax_year == year.tax_year) {
                return Err(year.invalid("tax year listed more than once"));
            }
            year.validate()?;
        }
        Ok(())
    }
}

impl TaxYearConstants {
    fn invalid(&self, reason: impl Into<String>) -> TaxError {
        TaxError::InvalidConstants {
            tax_year: self.tax_year,
            reason: reason.into(),
        }
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        for (name, bands) in [
            ("rest_of_uk", &self.income_tax.rest_of_uk),
            ("scotland", &self.income_tax.scotland),
        ] {
            self.validate_bands(name, bands)?;
        }

        let ni = &self.national_insurance;
        for threshold in [ni.primary_threshold, ni.secondary_threshold] {
            if threshold > ni.upper_earnings_limit {
                return Err(self.invalid(format!(
                    "NI threshold {} above upper earnings limit {}",
                    threshold, ni.upper_earnings_limit
                )));
            }
        }
        for rate in ni.employee_rates.iter().chain(&ni.employer_rates) {
            self.validate_rate("national_insurance", *rate)?;
        }

        let loans = &self.student_loans;
        self.validate_rate("student_loans", loans.default_rate)?;
        self.validate_rate("student_loans", loans.postgrad_rate)?;
        if loans.thresholds.contains_key(&StudentLoanPlan::None) {
            return Err(self.invalid("student loan plan 'none' cannot have a threshold"));
        }
        Ok(())
    }

    fn validate_bands(&self, name: &str, bands: &[RateBand]) -> Result<(), TaxError> {
        let mut previous = Decimal::ZERO;
        for (i, band) in bands.iter().enumerate() {
            self.validate_rate(name, band.rate)?;
            match band.upper_limit {
                Some(limit) if limit <= previous => {
                    return Err(self.invalid(format!(
                        "{} band limits must be strictly increasing ({} after {})",
                        name, limit, previous
                    )));
                }
                Some(limit) => previous = limit,
                None if i + 1 != bands.len() => {
                    return Err(self.invalid(format!("{} unbounded band must be last", name)));
                }
                None => {}
            }
        }
        Ok(())
    }

    fn validate_rate(&self, name: &str, rate: Decimal) -> Result<(), TaxError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(self.invalid(format!("{} rate {} outside 0..=1", name, rate)));
        }
        Ok(())
    }
}
