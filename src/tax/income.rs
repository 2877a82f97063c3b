use super::bands::{allocate_bands, BandedTax};
use super::constants::IncomeTaxBands;
use rust_decimal::Decimal;

/// Income tax on taxable income, using the Scottish bands for Scottish residents
pub fn calculate_income_tax(
    taxable_income: Decimal,
    resident_in_scotland: bool,
    bands: &IncomeTaxBands,
) -> BandedTax {
    allocate_bands(taxable_income, bands.for_residency(resident_in_scotland))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::uk::{builtin_table, TaxYear};
    use rust_decimal_macros::dec;

    fn bands_2024_25() -> IncomeTaxBands {
        builtin_table().get(TaxYear(2025)).unwrap().income_tax.clone()
    }

    #[test]
    fn rest_of_uk_basic_and_higher() {
        let tax = calculate_income_tax(dec!(40780), false, &bands_2024_25());
        assert_eq!(tax.total, dec!(8772));
        assert_eq!(tax.breakdown.len(), 2);
    }

    #[test]
    fn scotland_uses_six_bands() {
        // 2306 @ 19% + 11685 @ 20% + 17101 @ 21% + 6338 @ 42%
        let tax = calculate_income_tax(dec!(37430), true, &bands_2024_25());
        assert_eq!(tax.breakdown.len(), 4);
        assert_eq!(tax.breakdown[0].amount, dec!(438.14));
        assert_eq!(tax.breakdown[3].rate, dec!(0.42));
        assert_eq!(tax.total, dec!(9028.31));
    }

    #[test]
    fn scotland_top_rate() {
        let tax = calculate_income_tax(dec!(200000), true, &bands_2024_25());
        assert_eq!(tax.breakdown.len(), 6);
        assert_eq!(tax.breakdown[5].rate, dec!(0.48));
        // 74860 above the advanced rate band
        assert_eq!(tax.breakdown[5].amount, dec!(35932.80));
    }
}
