use super::constants::StudentLoans;
use super::error::TaxError;
use super::uk::TaxYear;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Student loan repayment plan
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum StudentLoanPlan {
    #[default]
    None,
    Plan1,
    Plan2,
    Plan4,
    Plan5,
    Postgrad,
}

impl StudentLoanPlan {
    pub fn display(&self) -> &'static str {
        match self {
            StudentLoanPlan::None => "none",
            StudentLoanPlan::Plan1 => "plan1",
            StudentLoanPlan::Plan2 => "plan2",
            StudentLoanPlan::Plan4 => "plan4",
            StudentLoanPlan::Plan5 => "plan5",
            StudentLoanPlan::Postgrad => "postgrad",
        }
    }
}

impl std::fmt::Display for StudentLoanPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Repayment on income above the plan threshold.
///
/// A plan missing from the year's threshold map is a configuration error.
pub fn calculate_student_loan(
    income: Decimal,
    plan: StudentLoanPlan,
    loans: &StudentLoans,
    tax_year: TaxYear,
) -> Result<Decimal, TaxError> {
    if plan == StudentLoanPlan::None {
        return Ok(Decimal::ZERO);
    }
    let threshold = *loans
        .thresholds
        .get(&plan)
        .ok_or(TaxError::UnknownStudentLoanPlan { plan, tax_year })?;
    if income <= threshold {
        return Ok(Decimal::ZERO);
    }
    let rate = match plan {
        StudentLoanPlan::Postgrad => loans.postgrad_rate,
        _ => loans.default_rate,
    };
    Ok((income - threshold) * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn loans() -> StudentLoans {
        StudentLoans {
            default_rate: dec!(0.09),
            postgrad_rate: dec!(0.06),
            thresholds: BTreeMap::from([
                (StudentLoanPlan::Plan1, dec!(24990)),
                (StudentLoanPlan::Plan2, dec!(27295)),
                (StudentLoanPlan::Postgrad, dec!(21000)),
            ]),
        }
    }

    fn repay(income: Decimal, plan: StudentLoanPlan) -> Result<Decimal, TaxError> {
        calculate_student_loan(income, plan, &loans(), TaxYear(2025))
    }

    #[test]
    fn no_plan_repays_nothing() {
        assert_eq!(repay(dec!(100000), StudentLoanPlan::None).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn at_threshold_repays_nothing() {
        assert_eq!(repay(dec!(27295), StudentLoanPlan::Plan2).unwrap(), Decimal::ZERO);
        assert_eq!(repay(dec!(10000), StudentLoanPlan::Plan2).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn plan2_above_threshold() {
        assert_eq!(repay(dec!(40000), StudentLoanPlan::Plan2).unwrap(), dec!(1143.45));
    }

    #[test]
    fn postgrad_uses_postgrad_rate() {
        assert_eq!(repay(dec!(40000), StudentLoanPlan::Postgrad).unwrap(), dec!(1140));
    }

    #[test]
    fn plan_without_threshold_fails_fast() {
        assert!(matches!(
            repay(dec!(40000), StudentLoanPlan::Plan5),
            Err(TaxError::UnknownStudentLoanPlan {
                plan: StudentLoanPlan::Plan5,
                tax_year: TaxYear(2025)
            })
        ));
    }

    #[test]
    fn missing_plan_fails_even_below_any_threshold() {
        assert!(repay(Decimal::ZERO, StudentLoanPlan::Plan4).is_err());
    }
}
