//! Property-based tests for money arithmetic and text form.
//!
//! - Property 1: Same-currency arithmetic is exact
//! - Property 2: Ordering never crosses currencies
//! - Property 3: Format/parse round trip at display precision
//! - Property 4: Conversion round trip is close, not exact

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use super::Money;
use crate::currency::{CurrencyRegistry, InMemoryRegistry};
use crate::error::MoneyError;

/// Strategy to generate signed amounts with up to 4 fractional digits.
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a currency code from the seeded catalog.
fn code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "KWD"])
}

fn registry() -> InMemoryRegistry {
    InMemoryRegistry::with_iso_catalog()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Same-currency arithmetic is exact
    // =========================================================================

    /// *For any* a, b and currency C: Money(a, C) + Money(b, C) == Money(a + b, C).
    #[test]
    fn prop_add_same_currency_is_exact(a in amount(), b in amount(), code in code()) {
        let reg = registry();
        let left = Money::with_code(a, code, &reg).unwrap();
        let right = Money::with_code(b, code, &reg).unwrap();

        let sum = left.try_add(&right, &reg).unwrap();
        prop_assert_eq!(sum, Money::with_code(a + b, code, &reg).unwrap());
    }

    /// *For any* a and currency C: Money(a, C) - Money(a, C) == Money(0, C).
    #[test]
    fn prop_sub_self_is_zero(a in amount(), code in code()) {
        let reg = registry();
        let m = Money::with_code(a, code, &reg).unwrap();
        let zero = Money::with_code(Decimal::ZERO, code, &reg).unwrap();
        prop_assert_eq!(m.try_sub(&m, &reg).unwrap(), zero);
    }

    /// *For any* amount, negation twice is the identity.
    #[test]
    fn prop_double_negation(a in amount(), code in code()) {
        let reg = registry();
        let m = Money::with_code(a, code, &reg).unwrap();
        prop_assert_eq!(-(-m.clone()), m);
    }

    // =========================================================================
    // Property 2: Ordering never crosses currencies
    // =========================================================================

    /// *For any* two amounts in different currencies, ordering fails even with opt-in.
    #[test]
    fn prop_ordering_rejects_mismatch(a in amount(), b in amount()) {
        let reg = registry();
        let usd = Money::with_code(a, "USD", &reg).unwrap().with_conversion();
        let eur = Money::with_code(b, "EUR", &reg).unwrap().with_conversion();
        prop_assert!(
            matches!(usd.try_lt(&eur), Err(MoneyError::CurrencyMismatch { .. })),
            "ordering must not convert"
        );
    }

    // =========================================================================
    // Property 3: Format/parse round trip
    // =========================================================================

    /// *For any* Money m, from_string(format(m)) recovers m at two decimals.
    #[test]
    fn prop_format_parse_round_trip(a in amount(), code in code()) {
        let reg = registry();
        let m = Money::with_code(a, code, &reg).unwrap();

        let parsed = Money::from_string(&m.to_string(), &reg).unwrap();
        let expected = a.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        prop_assert_eq!(parsed.amount(), expected);
        prop_assert_eq!(parsed.currency(), m.currency());
    }

    /// *For any* amount, the exact form round-trips without loss.
    #[test]
    fn prop_exact_format_round_trip(a in amount(), code in code()) {
        let reg = registry();
        let m = Money::with_code(a, code, &reg).unwrap();
        let parsed = Money::from_string(&m.to_string_exact(), &reg).unwrap();
        prop_assert_eq!(parsed, m);
    }

    // =========================================================================
    // Property 4: Conversion round trip
    // =========================================================================

    /// *For any* amount and rate, foreign -> default -> foreign stays within a minor unit.
    #[test]
    fn prop_conversion_round_trip_is_close(a in amount(), rate in positive_rate()) {
        let reg = registry();
        reg.set_exchange_rate("EUR", rate).unwrap();
        let original = Money::with_code(a, "EUR", &reg).unwrap();

        let back = original
            .convert_to_default(&reg)
            .unwrap()
            .convert_to("EUR", &reg)
            .unwrap();

        prop_assert_eq!(back.currency(), &reg.get("EUR").unwrap());
        let drift = (back.amount() - original.amount()).abs();
        prop_assert!(drift < Decimal::new(1, 2), "drift {} too large", drift);
    }

    // =========================================================================
    // Property 5: Allocation through Money
    // =========================================================================

    /// *For any* amount at cent precision and weights, parts sum to the amount.
    #[test]
    fn prop_allocate_sum_invariant(
        cents in -100_000_000i64..100_000_000i64,
        ratios in prop::collection::vec(1u32..1000, 1..20),
    ) {
        let reg = registry();
        let m = Money::with_code(Decimal::new(cents, 2), "USD", &reg).unwrap();
        let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();

        let parts = m.allocate(&ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        let total: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(total, m.amount());
        prop_assert!(parts.iter().all(|p| p.currency() == m.currency()));
    }
}
