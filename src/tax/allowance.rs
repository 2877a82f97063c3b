use super::constants::PersonalAllowance;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Personal allowance after the taper: £1 is withdrawn for every whole £2 of
/// adjusted net income over the threshold.
pub fn personal_allowance(income: Decimal, allowance: &PersonalAllowance) -> Decimal {
    if income <= allowance.taper_threshold {
        return allowance.basic_amount;
    }
    let reduction = ((income - allowance.taper_threshold) / dec!(2)).floor();
    (allowance.basic_amount - reduction).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowance() -> PersonalAllowance {
        PersonalAllowance {
            basic_amount: dec!(12570),
            taper_threshold: dec!(100000),
        }
    }

    #[test]
    fn below_threshold_is_unchanged() {
        assert_eq!(personal_allowance(dec!(50000), &allowance()), dec!(12570));
        assert_eq!(personal_allowance(Decimal::ZERO, &allowance()), dec!(12570));
    }

    #[test]
    fn at_threshold_is_unchanged() {
        assert_eq!(personal_allowance(dec!(100000), &allowance()), dec!(12570));
    }

    #[test]
    fn one_pound_over_rounds_down_to_no_reduction() {
        assert_eq!(personal_allowance(dec!(100001), &allowance()), dec!(12570));
    }

    #[test]
    fn two_pounds_over_reduces_by_one() {
        assert_eq!(personal_allowance(dec!(100002), &allowance()), dec!(12569));
    }

    #[test]
    fn fractional_excess_is_floored() {
        assert_eq!(personal_allowance(dec!(100003.99), &allowance()), dec!(12569));
        assert_eq!(personal_allowance(dec!(100001.99), &allowance()), dec!(12570));
    }

    #[test]
    fn fully_withdrawn_at_125140() {
        assert_eq!(personal_allowance(dec!(125140), &allowance()), Decimal::ZERO);
        assert_eq!(personal_allowance(dec!(125139), &allowance()), dec!(1));
    }

    #[test]
    fn never_negative() {
        assert_eq!(personal_allowance(dec!(1000000), &allowance()), Decimal::ZERO);
    }
}
