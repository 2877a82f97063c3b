//! Pension contributions.
//!
//! Only basic-rate relief at source is modelled. Higher and additional rate
//! relief reclaimed through self assessment is not, and neither is the taper
//! of the annual allowance for high earners.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Net contributions under relief at source are 80% of the gross amount
pub const RELIEF_AT_SOURCE_GROSS_UP: Decimal = dec!(1.25);

/// Pension elections. Every field is optional in JSON input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PensionContributions {
    /// Salary given up in exchange for an employer pension contribution
    #[schemars(with = "f64")]
    pub salary_sacrifice: Decimal,
    /// Auto-enrolment contribution as a percentage of salary (3 means 3%)
    #[schemars(with = "f64")]
    pub auto_enrolment_percentage: Decimal,
    /// Whether the auto-enrolment contribution is itself made by salary sacrifice
    pub auto_enrolment_as_salary_sacrifice: bool,
    /// Personal contribution, net of relief when `tax_relief_at_source` is set
    #[schemars(with = "f64")]
    pub personal_contribution: Decimal,
    pub tax_relief_at_source: bool,
}

impl Default for PensionContributions {
    fn default() -> Self {
        PensionContributions {
            salary_sacrifice: Decimal::ZERO,
            auto_enrolment_percentage: Decimal::ZERO,
            auto_enrolment_as_salary_sacrifice: false,
            personal_contribution: Decimal::ZERO,
            tax_relief_at_source: true,
        }
    }
}

/// Auto-enrolment contribution on the given salary
pub fn auto_enrolment_contribution(income: Decimal, percentage: Decimal) -> Decimal {
    income * percentage / dec!(100)
}

/// Gross value of a personal contribution once relief at source is added
pub fn gross_contribution(net: Decimal, tax_relief_at_source: bool) -> Decimal {
    if tax_relief_at_source {
        net * RELIEF_AT_SOURCE_GROSS_UP
    } else {
        net
    }
}
