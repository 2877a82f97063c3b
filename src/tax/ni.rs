//! National Insurance

use super::bands::BandedTax;
use super::constants::NationalInsurance;
use rust_decimal::Decimal;

/// Whose contributions are being calculated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contributor {
    Employee,
    Employer,
}

/// Two-tier NI: nothing below the contributor's threshold, the main rate up to
/// the upper earnings limit, then the additional rate without limit.
///
/// Unlike [`allocate_bands`](super::bands::allocate_bands) the threshold is a
/// floor, not a zero-rate band, so income below it leaves no breakdown entry.
pub fn calculate_national_insurance(
    income: Decimal,
    contributor: Contributor,
    no_ni: bool,
    ni: &NationalInsurance,
) -> BandedTax {
    let mut result = BandedTax::default();
    if no_ni {
        return result;
    }

    let (threshold, rates) = match contributor {
        Contributor::Employee => (ni.primary_threshold, ni.employee_rates),
        Contributor::Employer => (ni.secondary_threshold, ni.employer_rates),
    };

    let mut remaining = (income - threshold).max(Decimal::ZERO);
    let main = remaining.min(ni.upper_earnings_limit - threshold);
    result.charge(main, rates[0]);
    if main > Decimal::ZERO {
        remaining -= main;
    }
    result.charge(remaining, rates[1]);

    log::debug!("{:?} NI on {}: {}", contributor, income, result.total);
    result
}
