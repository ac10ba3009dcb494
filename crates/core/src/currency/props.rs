//! Property-based tests for currency operations.
//!
//! - Rounding lands within half a cent of the exact value
//! - GST split is lossless
//! - Major/minor conversion is lossless for whole cents
//! - Scaling never panics and saturates at the `i64` bounds

use proptest::prelude::*;
use rust_decimal::Decimal;
use sdapay_shared::types::Cents;

use super::arithmetic::{
    divide_rounded, multiply_rounded, percent_of, sum_cents, to_cents, to_dollars,
};
use super::tax::{exclude_tax, tax_from_inclusive};

/// Strategy to generate non-negative cent amounts (0 to 100,000,000.00).
fn amount() -> impl Strategy<Value = Cents> {
    (0i64..10_000_000_000i64).prop_map(Cents::new)
}

/// Strategy to generate fee rates (0.0000 to 1.0000).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and rate, `percent_of` SHALL be within half a cent of
    /// the exact product.
    #[test]
    fn prop_percent_of_within_half_cent(amount in amount(), rate in rate()) {
        let exact = amount.as_decimal() * rate;
        let rounded = percent_of(amount, rate).as_decimal();
        prop_assert!((rounded - exact).abs() <= Decimal::new(5, 1));
    }

    /// *For any* non-negative amount, an exact midpoint SHALL round up.
    #[test]
    fn prop_divide_rounds_half_up(amount in amount()) {
        let doubled = Cents::new(amount.value() * 2 + 1);
        prop_assert_eq!(divide_rounded(doubled, 2), Cents::new(amount.value() + 1));
    }

    /// *For any* GST-inclusive amount, exclusive + GST SHALL equal the original.
    #[test]
    fn prop_tax_split_is_lossless(amount in amount()) {
        prop_assert_eq!(exclude_tax(amount) + tax_from_inclusive(amount), amount);
    }

    /// *For any* amount, converting to dollars and back SHALL preserve it.
    #[test]
    fn prop_dollar_conversion_roundtrip(amount in amount()) {
        prop_assert_eq!(to_cents(to_dollars(amount)), amount);
    }

    /// *For any* list of amounts, `sum_cents` SHALL equal the integer sum.
    #[test]
    fn prop_sum_matches_integer_sum(values in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..50)) {
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(sum_cents(values.into_iter().map(Cents::new)), Cents::new(expected));
    }

    /// *For any* amount and whole factor, `multiply_rounded` SHALL equal the
    /// integer product.
    #[test]
    fn prop_multiply_rounded_whole_factor(amount in amount(), factor in 0i64..=52) {
        prop_assert_eq!(
            multiply_rounded(amount, Decimal::from(factor)),
            Cents::new(amount.value() * factor)
        );
    }

    /// *For any* amount and factor, `multiply_rounded` SHALL stay within the
    /// `i64` range and keep the sign of the product.
    #[test]
    fn prop_multiply_rounded_saturates(
        amount in any::<i64>(),
        mantissa in any::<i64>(),
        scale in 0u32..=28,
    ) {
        let factor = Decimal::new(mantissa, scale);
        let result = multiply_rounded(Cents::new(amount), factor);
        let exact = Decimal::from(amount).checked_mul(factor);

        match exact {
            Some(product) if product >= Decimal::from(i64::MIN) && product <= Decimal::from(i64::MAX) => {
                prop_assert!((result.as_decimal() - product).abs() <= Decimal::new(5, 1));
            }
            _ => {
                let negative = (amount < 0) != factor.is_sign_negative();
                let bound = if negative { i64::MIN } else { i64::MAX };
                prop_assert_eq!(result, Cents::new(bound));
            }
        }
    }
}
