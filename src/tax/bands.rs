use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous income range taxed at a single rate.
///
/// Limits are measured from zero, so a band runs from the previous band's
/// limit up to its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RateBand {
    #[schemars(with = "f64")]
    pub rate: Decimal,
    /// Upper limit of the band. Omitted for an unbounded final band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub upper_limit: Option<Decimal>,
}

impl RateBand {
    pub fn new(rate: Decimal, upper_limit: Decimal) -> Self {
        RateBand {
            rate,
            upper_limit: Some(upper_limit),
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        RateBand {
            rate,
            upper_limit: None,
        }
    }
}

/// Tax charged at one rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandBreakdown {
    pub rate: Decimal,
    /// Tax due at this rate (not the income falling in the band)
    pub amount: Decimal,
}

/// Total tax along with the per-rate entries that sum to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BandedTax {
    pub total: Decimal,
    pub breakdown: Vec<BandBreakdown>,
}

impl BandedTax {
    /// Charge a slice of income at `rate`. Empty slices add no entry.
    pub(crate) fn charge(&mut self, slice: Decimal, rate: Decimal) {
        if slice <= Decimal::ZERO {
            return;
        }
        let tax = slice * rate;
        self.total += tax;
        self.breakdown.push(BandBreakdown { rate, amount: tax });
    }
}

/// Progressive banding: fill each band in order until the income runs out.
///
/// Income above a bounded final band is left untaxed. Tables are expected to
/// end with an unbounded band.
pub fn allocate_bands(income: Decimal, bands: &[RateBand]) -> BandedTax {
    let mut result = BandedTax::default();
    let mut remaining = income;
    let mut previous_limit = Decimal::ZERO;

    for band in bands {
        if remaining <= Decimal::ZERO {
            break;
        }
        let in_band = match band.upper_limit {
            Some(limit) => remaining.min((limit - previous_limit).max(Decimal::ZERO)),
            None => remaining,
        };
        result.charge(in_band, band.rate);
        remaining -= in_band;
        log::debug!(
            "Band {} up to {:?}: income={}, remaining={}",
            band.rate,
            band.upper_limit,
            in_band,
            remaining
        );
        match band.upper_limit {
            Some(limit) => previous_limit = limit,
            None => break,
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn uk_bands() -> Vec<RateBand> {
        vec![
            RateBand::new(dec!(0.20), dec!(37700)),
            RateBand::new(dec!(0.40), dec!(125140)),
            RateBand::unbounded(dec!(0.45)),
        ]
    }

    #[test]
    fn zero_income_has_empty_breakdown() {
        let tax = allocate_bands(Decimal::ZERO, &uk_bands());
        assert_eq!(tax.total, Decimal::ZERO);
        assert!(tax.breakdown.is_empty());
    }

    #[test]
    fn income_within_first_band() {
        let tax = allocate_bands(dec!(10000), &uk_bands());
        assert_eq!(tax.total, dec!(2000));
        assert_eq!(
            tax.breakdown,
            vec![BandBreakdown {
                rate: dec!(0.20),
                amount: dec!(2000)
            }]
        );
    }

    #[test]
    fn income_exactly_at_limit_omits_next_band() {
        let tax = allocate_bands(dec!(37700), &uk_bands());
        assert_eq!(tax.total, dec!(7540));
        assert_eq!(tax.breakdown.len(), 1);
    }

    #[test]
    fn income_spanning_all_bands() {
        // 37700 @ 20% + 87440 @ 40% + 24860 @ 45%
        let tax = allocate_bands(dec!(150000), &uk_bands());
        assert_eq!(tax.breakdown.len(), 3);
        assert_eq!(tax.breakdown[0].amount, dec!(7540));
        assert_eq!(tax.breakdown[1].amount, dec!(34976));
        assert_eq!(tax.breakdown[2].amount, dec!(11187));
        assert_eq!(tax.total, dec!(53703));
    }

    #[test]
    fn breakdown_amount_is_tax_not_income() {
        let tax = allocate_bands(dec!(40000), &uk_bands());
        assert_eq!(tax.breakdown[1].rate, dec!(0.40));
        assert_eq!(tax.breakdown[1].amount, dec!(920));
    }

    #[test]
    fn zero_rate_band_still_records_an_entry() {
        let bands = vec![
            RateBand::new(dec!(0), dec!(5000)),
            RateBand::unbounded(dec!(0.10)),
        ];
        let tax = allocate_bands(dec!(6000), &bands);
        assert_eq!(tax.breakdown.len(), 2);
        assert_eq!(tax.breakdown[0].amount, Decimal::ZERO);
        assert_eq!(tax.total, dec!(100));
    }

    #[test]
    fn income_above_bounded_final_band_is_untaxed() {
        let bands = vec![RateBand::new(dec!(0.20), dec!(1000))];
        let tax = allocate_bands(dec!(5000), &bands);
        assert_eq!(tax.total, dec!(200));
    }

    #[test]
    fn misordered_limits_never_charge_a_negative_slice() {
        let bands = vec![
            RateBand::new(dec!(0.20), dec!(1000)),
            RateBand::new(dec!(0.40), dec!(500)),
            RateBand::unbounded(dec!(0.50)),
        ];
        let tax = allocate_bands(dec!(2000), &bands);
        assert!(tax.breakdown.iter().all(|b| b.amount >= Decimal::ZERO));
        assert_eq!(tax.total, dec!(200) + dec!(500));
    }

    fn arb_income() -> impl Strategy<Value = Decimal> {
        (0i64..50_000_000).prop_map(|pence| Decimal::new(pence, 2))
    }

    fn arb_bands() -> impl Strategy<Value = Vec<RateBand>> {
        (
            prop::collection::vec((1i64..100_000, 0i64..=100), 0..6),
            0i64..=100,
        )
            .prop_map(|(bounded, top_rate)| {
                let mut limit = Decimal::ZERO;
                let mut bands: Vec<RateBand> = bounded
                    .into_iter()
                    .map(|(width, rate)| {
                        limit += Decimal::from(width);
                        RateBand::new(Decimal::new(rate, 2), limit)
                    })
                    .collect();
                bands.push(RateBand::unbounded(Decimal::new(top_rate, 2)));
                bands
            })
    }

    proptest! {
        #[test]
        fn prop_breakdown_sums_to_total(income in arb_income(), bands in arb_bands()) {
            let tax = allocate_bands(income, &bands);
            let sum: Decimal = tax.breakdown.iter().map(|b| b.amount).sum();
            prop_assert_eq!(sum, tax.total);
            prop_assert!(tax.breakdown.len() <= bands.len());
        }

        #[test]
        fn prop_total_is_non_decreasing_in_income(
            a in arb_income(),
            b in arb_income(),
            bands in arb_bands(),
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(allocate_bands(low, &bands).total <= allocate_bands(high, &bands).total);
        }
    }
}
