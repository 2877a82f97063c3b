use super::bands::RateBand;
use super::constants::{
    ConstantsTable, IncomeTaxBands, NationalInsurance, PersonalAllowance, StudentLoans,
    TaxYearConstants,
};
use super::error::TaxError;
use super::student_loan::StudentLoanPlan;
use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// UK Tax Year (runs 6 April to 5 April)
/// The year value represents the end year (e.g., 2025 = 2024/25 tax year)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct TaxYear(pub i32);

impl TaxYear {
    /// Create a tax year from a date
    pub fn from_date(date: NaiveDate) -> Self {
        if (date.month(), date.day()) >= (4, 6) {
            TaxYear(date.year() + 1)
        } else {
            TaxYear(date.year())
        }
    }

    /// Start date of the tax year (6 April of previous year)
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0 - 1, 4, 6)
    }

    /// End date of the tax year (5 April)
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 4, 5)
    }

    /// Display as "2024/25" format
    pub fn display(&self) -> String {
        format!("{}/{:02}", self.0 - 1, self.0 % 100)
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for TaxYear {
    type Err = TaxError;

    /// Accepts the end year ("2025") or the span form ("2024/25" or "2024/2025").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TaxError::InvalidTaxYear(s.to_string());
        match s.trim().split_once('/') {
            None => s.trim().parse::<i32>().map(TaxYear).map_err(|_| invalid()),
            Some((start, end)) => {
                let start: i32 = start.parse().map_err(|_| invalid())?;
                let end: i32 = end.parse().map_err(|_| invalid())?;
                let expected = if end >= 100 { start + 1 } else { (start + 1) % 100 };
                if end != expected {
                    return Err(invalid());
                }
                Ok(TaxYear(start + 1))
            }
        }
    }
}

/// Published HMRC figures bundled with the binary.
pub fn builtin_table() -> ConstantsTable {
    ConstantsTable {
        years: vec![tax_year_2024_25(), tax_year_2025_26()],
    }
}

fn rest_of_uk_bands() -> Vec<RateBand> {
    vec![
        RateBand::new(dec!(0.20), dec!(37700)),
        RateBand::new(dec!(0.40), dec!(125140)),
        RateBand::unbounded(dec!(0.45)),
    ]
}

fn tax_year_2024_25() -> TaxYearConstants {
    TaxYearConstants {
        tax_year: TaxYear(2025),
        personal_allowance: PersonalAllowance {
            basic_amount: dec!(12570),
            taper_threshold: dec!(100000),
        },
        income_tax: IncomeTaxBands {
            rest_of_uk: rest_of_uk_bands(),
            scotland: vec![
                RateBand::new(dec!(0.19), dec!(2306)),
                RateBand::new(dec!(0.20), dec!(13991)),
                RateBand::new(dec!(0.21), dec!(31092)),
                RateBand::new(dec!(0.42), dec!(62430)),
                RateBand::new(dec!(0.45), dec!(125140)),
                RateBand::unbounded(dec!(0.48)),
            ],
        },
        national_insurance: NationalInsurance {
            primary_threshold: dec!(12570),
            secondary_threshold: dec!(9100),
            upper_earnings_limit: dec!(50270),
            employee_rates: [dec!(0.08), dec!(0.02)],
            employer_rates: [dec!(0.138), dec!(0.138)],
        },
        student_loans: StudentLoans {
            default_rate: dec!(0.09),
            postgrad_rate: dec!(0.06),
            thresholds: BTreeMap::from([
                (StudentLoanPlan::Plan1, dec!(24990)),
                (StudentLoanPlan::Plan2, dec!(27295)),
                (StudentLoanPlan::Plan4, dec!(31395)),
                (StudentLoanPlan::Postgrad, dec!(21000)),
            ]),
        },
    }
}

fn tax_year_2025_26() -> TaxYearConstants {
    TaxYearConstants {
        tax_year: TaxYear(2026),
        personal_allowance: PersonalAllowance {
            basic_amount: dec!(12570),
            taper_threshold: dec!(100000),
        },
        income_tax: IncomeTaxBands {
            rest_of_uk: rest_of_uk_bands(),
            scotland: vec![
                RateBand::new(dec!(0.19), dec!(2827)),
                RateBand::new(dec!(0.20), dec!(14921)),
                RateBand::new(dec!(0.21), dec!(31092)),
                RateBand::new(dec!(0.42), dec!(62430)),
                RateBand::new(dec!(0.45), dec!(125140)),
                RateBand::unbounded(dec!(0.48)),
            ],
        },
        national_insurance: NationalInsurance {
            primary_threshold: dec!(12570),
            secondary_threshold: dec!(5000),
            upper_earnings_limit: dec!(50270),
            employee_rates: [dec!(0.08), dec!(0.02)],
            employer_rates: [dec!(0.15), dec!(0.15)],
        },
        student_loans: StudentLoans {
            default_rate: dec!(0.09),
            postgrad_rate: dec!(0.06),
            thresholds: BTreeMap::from([
                (StudentLoanPlan::Plan1, dec!(26065)),
                (StudentLoanPlan::Plan2, dec!(28470)),
                (StudentLoanPlan::Plan4, dec!(32745)),
                (StudentLoanPlan::Plan5, dec!(25000)),
                (StudentLoanPlan::Postgrad, dec!(21000)),
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_year_from_date_before_april_6() {
        // 5 April 2024 is in 2023/24 tax year
        let date = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
        assert_eq!(TaxYear::from_date(date), TaxYear(2024));
    }

    #[test]
    fn tax_year_from_date_on_april_6() {
        // 6 April 2024 is in 2024/25 tax year
        let date = NaiveDate::from_ymd_opt(2024, 4, 6).unwrap();
        assert_eq!(TaxYear::from_date(date), TaxYear(2025));
    }

    #[test]
    fn tax_year_from_date_april_5_and_january() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert_eq!(TaxYear::from_date(date), TaxYear(2025));
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(TaxYear::from_date(date), TaxYear(2025));
    }

    #[test]
    fn tax_year_from_date_december() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(TaxYear::from_date(date), TaxYear(2025));
    }

    #[test]
    fn tax_year_display() {
        assert_eq!(TaxYear(2025).display(), "2024/25");
        assert_eq!(TaxYear(2026).display(), "2025/26");
        assert_eq!(TaxYear(2000).display(), "1999/00");
        assert_eq!(TaxYear(2010).display(), "2009/10");
    }

    #[test]
    fn tax_year_start_end_dates() {
        let ty = TaxYear(2025);
        assert_eq!(ty.start_date(), NaiveDate::from_ymd_opt(2024, 4, 6));
        assert_eq!(ty.end_date(), NaiveDate::from_ymd_opt(2025, 4, 5));
    }

    #[test]
    fn tax_year_parses_end_year_and_span() {
        assert_eq!("2025".parse::<TaxYear>().unwrap(), TaxYear(2025));
        assert_eq!("2024/25".parse::<TaxYear>().unwrap(), TaxYear(2025));
        assert_eq!("1999/00".parse::<TaxYear>().unwrap(), TaxYear(2000));
    }

    #[test]
    fn tax_year_parses_four_digit_span() {
        assert_eq!("2024/2025".parse::<TaxYear>().unwrap(), TaxYear(2025));
        assert_eq!("1999/2000".parse::<TaxYear>().unwrap(), TaxYear(2000));
        assert!("2024/2026".parse::<TaxYear>().is_err());
    }

    #[test]
    fn tax_year_rejects_mismatched_span() {
        assert!(matches!(
            "2024/26".parse::<TaxYear>(),
            Err(TaxError::InvalidTaxYear(_))
        ));
        assert!("next year".parse::<TaxYear>().is_err());
    }

    #[test]
    fn builtin_table_passes_validation() {
        builtin_table().validate().unwrap();
    }

    #[test]
    fn builtin_years_end_with_unbounded_band() {
        for year in builtin_table().years {
            assert!(year.income_tax.rest_of_uk.last().unwrap().upper_limit.is_none());
            assert!(year.income_tax.scotland.last().unwrap().upper_limit.is_none());
        }
    }
}
