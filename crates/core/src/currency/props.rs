//! Property-based tests for currency operations.
//!
//! - Property 6: Pivot conversion consistency
//! - Property 7: Allocation Sum Invariant
//! - Property 8: Allocation fairness and remainder order

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::AllocationUtil;
use super::conversion;
use super::types::Currency;

/// Strategy to generate signed amounts in minor units (-1,000,000.00 to 1,000,000.00).
fn amount_minor_units() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

/// Strategy to generate 1-30 positive ratio weights.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((1i64..10_000i64).prop_map(|v| Decimal::new(v, 2)), 1..30)
}

fn usd() -> Currency {
    Currency::new("USD", "840", "US Dollar")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 6: Pivot conversion consistency
    // =========================================================================

    /// *For any* amount, converting from the default is the identity.
    #[test]
    fn prop_default_conversion_is_identity(units in amount_minor_units()) {
        let amount = Decimal::new(units, 2);
        prop_assert_eq!(conversion::to_default(amount, &usd(), &usd()).unwrap(), amount);
        prop_assert_eq!(conversion::from_default(amount, &usd(), &usd()).unwrap(), amount);
    }

    /// *For any* positive amount and rate, conversion keeps the sign.
    #[test]
    fn prop_conversion_keeps_sign(units in 1i64..100_000_000i64, rate in positive_rate()) {
        let eur = Currency::new("EUR", "978", "Euro").with_exchange_rate(rate);
        let amount = Decimal::new(units, 2);
        prop_assert!(conversion::to_default(amount, &eur, &usd()).unwrap() > Decimal::ZERO);
        prop_assert!(conversion::from_default(amount, &eur, &usd()).unwrap() > Decimal::ZERO);
    }

    // =========================================================================
    // Property 7: Allocation Sum Invariant
    // =========================================================================

    /// *For any* amount at minor-unit precision and positive ratios, the sum of
    /// the allocation SHALL exactly equal the amount.
    #[test]
    fn prop_allocate_sum_invariant(
        units in amount_minor_units(),
        ratios in ratios(),
        decimal_places in decimal_places(),
    ) {
        let total = Decimal::new(units, decimal_places);
        let result = AllocationUtil::allocate(total, &ratios, decimal_places).unwrap();

        let sum: Decimal = result.iter().copied().sum();
        prop_assert_eq!(sum, total, "Sum of allocations ({}) must equal total ({})", sum, total);
        prop_assert_eq!(result.len(), ratios.len());
    }

    // =========================================================================
    // Property 8: Allocation fairness and remainder order
    // =========================================================================

    /// *For any* allocation, each share is at most one minor unit away from
    /// its exact proportional value.
    #[test]
    fn prop_allocate_within_one_unit(
        units in amount_minor_units(),
        ratios in ratios(),
        decimal_places in decimal_places(),
    ) {
        let total = Decimal::new(units, decimal_places);
        let unit = Decimal::new(1, decimal_places);
        let ratio_sum: Decimal = ratios.iter().copied().sum();
        let result = AllocationUtil::allocate(total, &ratios, decimal_places).unwrap();

        for (share, ratio) in result.iter().zip(ratios.iter()) {
            let exact = total * *ratio / ratio_sum;
            prop_assert!(
                (*share - exact).abs() <= unit,
                "share {} too far from exact {}",
                share, exact
            );
        }
    }

    /// *For any* equal split, shares never increase from first to last, so
    /// leftover units land on the earliest entries.
    #[test]
    fn prop_allocate_equal_front_loaded(
        units in amount_minor_units(),
        count in 1usize..50,
        decimal_places in decimal_places(),
    ) {
        let total = Decimal::new(units, decimal_places);
        let result = AllocationUtil::allocate_equal(total, count, decimal_places).unwrap();

        for pair in result.windows(2) {
            prop_assert!(pair[0] >= pair[1], "shares {:?} not front-loaded", result);
        }
        let spread = result[0] - result[result.len() - 1];
        prop_assert!(spread <= Decimal::new(1, decimal_places));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Property 7: Allocation Sum Invariant - Specific Examples
    // =========================================================================

    /// Specific example: 10.00 by [1, 1, 1] = [3.34, 3.33, 3.33].
    #[test]
    fn test_allocate_10_by_3() {
        let result = AllocationUtil::allocate(dec!(10.00), &[dec!(1); 3], 2).unwrap();
        assert_eq!(result, vec![dec!(3.34), dec!(3.33), dec!(3.33)]);
    }

    /// Specific example: 0.01 by [1, 1, 1] = [0.01, 0, 0].
    #[test]
    fn test_allocate_penny_by_3() {
        let result = AllocationUtil::allocate(dec!(0.01), &[dec!(1); 3], 2).unwrap();
        assert_eq!(result, vec![dec!(0.01), dec!(0), dec!(0)]);
    }

    /// Specific example: 1.00 by [1, 2] = [0.34, 0.66] (0.333 and 0.666 floored, extra to first).
    #[test]
    fn test_allocate_1_by_1_2() {
        let result = AllocationUtil::allocate(dec!(1.00), &[dec!(1), dec!(2)], 2).unwrap();
        assert_eq!(result, vec![dec!(0.34), dec!(0.66)]);
    }
}
