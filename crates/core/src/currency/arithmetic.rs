//! Rounding and scaling of cent amounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use sdapay_shared::types::Cents;

/// Rounding strategy applied to every derived amount.
///
/// `MidpointAwayFromZero` rounds 0.5 up to 1 and -0.5 down to -1.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Round a decimal count of cents to a whole cent.
///
/// Values beyond the `i64` range saturate.
#[must_use]
pub fn round_to_cents(value: Decimal) -> Cents {
    value
        .round_dp_with_strategy(0, ROUNDING)
        .to_i64()
        .unwrap_or_else(|| saturated(value.is_sign_negative()))
        .into()
}

/// The `i64` bound an out-of-range result saturates to.
const fn saturated(negative: bool) -> i64 {
    if negative { i64::MIN } else { i64::MAX }
}

/// Convert a dollar amount to cents.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use sdapay_core::currency::to_cents;
/// use sdapay_shared::types::Cents;
///
/// assert_eq!(to_cents(dec!(279.075)), Cents::new(27908));
/// ```
#[must_use]
pub fn to_cents(dollars: Decimal) -> Cents {
    dollars
        .checked_mul(Decimal::ONE_HUNDRED)
        .map_or_else(
            || Cents::new(saturated(dollars.is_sign_negative())),
            round_to_cents,
        )
}

/// Convert cents to an exact dollar amount with two decimal places.
#[must_use]
pub fn to_dollars(amount: Cents) -> Decimal {
    Decimal::new(amount.value(), 2)
}

/// Multiply an amount by a factor and round to the nearest cent.
///
/// Products beyond the `i64` range saturate, with the sign of the product.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use sdapay_core::currency::multiply_rounded;
/// use sdapay_shared::types::Cents;
///
/// assert_eq!(multiply_rounded(Cents::new(48_808), Decimal::from(26)), Cents::new(1_269_008));
/// assert_eq!(multiply_rounded(Cents::new(i64::MAX), Decimal::TWO), Cents::new(i64::MAX));
/// ```
#[must_use]
pub fn multiply_rounded(amount: Cents, factor: Decimal) -> Cents {
    amount.as_decimal().checked_mul(factor).map_or_else(
        || {
            let negative = amount.is_negative() != factor.is_sign_negative();
            Cents::new(saturated(negative))
        },
        round_to_cents,
    )
}

/// Calculate a fractional share of an amount, e.g. a 4.4% fee.
///
/// Also used for multiplicative factors such as location factors.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use sdapay_core::currency::percent_of;
/// use sdapay_shared::types::Cents;
///
/// assert_eq!(percent_of(Cents::new(430_000), dec!(0.044)), Cents::new(18_920));
/// ```
#[must_use]
pub fn percent_of(amount: Cents, rate: Decimal) -> Cents {
    multiply_rounded(amount, rate)
}

/// Divide an amount and round to the nearest cent.
///
/// A zero divisor yields zero.
#[must_use]
pub fn divide_rounded(amount: Cents, divisor: u32) -> Cents {
    amount
        .as_decimal()
        .checked_div(Decimal::from(divisor))
        .map_or(Cents::ZERO, round_to_cents)
}

/// Sum a sequence of amounts.
#[must_use]
pub fn sum_cents<I>(values: I) -> Cents
where
    I: IntoIterator<Item = Cents>,
{
    values.into_iter().sum()
}

/// Format an amount for display as Australian dollars, e.g. `$4,300.00`.
#[must_use]
pub fn format_aud(amount: Cents) -> String {
    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_cents(dec!(2.5)), Cents::new(3));
        assert_eq!(round_to_cents(dec!(3.5)), Cents::new(4));
        assert_eq!(round_to_cents(dec!(2.4999)), Cents::new(2));
        assert_eq!(round_to_cents(dec!(-2.5)), Cents::new(-3));
    }

    #[test]
    fn test_round_saturates() {
        let huge = Decimal::from(u64::MAX) * Decimal::TEN;
        assert_eq!(round_to_cents(huge), Cents::new(i64::MAX));
        assert_eq!(round_to_cents(-huge), Cents::new(i64::MIN));
    }

    #[test]
    fn test_major_minor_conversion() {
        assert_eq!(to_cents(dec!(4300)), Cents::new(430_000));
        assert_eq!(to_cents(dec!(1116.30)), Cents::new(111_630));
        assert_eq!(to_cents(dec!(0.005)), Cents::new(1));
        assert_eq!(to_dollars(Cents::new(37_840)), dec!(378.40));
        assert_eq!(to_dollars(Cents::new(-150)), dec!(-1.50));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(Cents::new(430_000), dec!(0.088)), Cents::new(37_840));
        assert_eq!(
            percent_of(Cents::new(1_100_000), dec!(0.088)),
            Cents::new(96_800)
        );
        // 111630 * 0.25 = 27907.5 -> 27908
        assert_eq!(percent_of(Cents::new(111_630), dec!(0.25)), Cents::new(27_908));
        assert_eq!(percent_of(Cents::ZERO, dec!(0.044)), Cents::ZERO);
    }

    #[test]
    fn test_percent_of_extreme_rate_saturates() {
        assert_eq!(
            percent_of(Cents::new(4_617_000), Decimal::MAX),
            Cents::new(i64::MAX)
        );
        assert_eq!(
            percent_of(Cents::new(-4_617_000), Decimal::MAX),
            Cents::new(i64::MIN)
        );
        assert_eq!(
            percent_of(Cents::new(4_617_000), Decimal::MIN),
            Cents::new(i64::MIN)
        );
    }

    #[test]
    fn test_multiply_rounded() {
        assert_eq!(
            multiply_rounded(Cents::new(48_808), Decimal::from(26)),
            Cents::new(1_269_008)
        );
        // 333 * 1.5 = 499.5 -> 500
        assert_eq!(multiply_rounded(Cents::new(333), dec!(1.5)), Cents::new(500));
        assert_eq!(multiply_rounded(Cents::new(-333), dec!(1.5)), Cents::new(-500));
        assert_eq!(multiply_rounded(Cents::new(100), Decimal::ZERO), Cents::ZERO);
        assert_eq!(
            multiply_rounded(Cents::new(i64::MAX), Decimal::from(26)),
            Cents::new(i64::MAX)
        );
        assert_eq!(
            multiply_rounded(Cents::new(i64::MIN), Decimal::from(26)),
            Cents::new(i64::MIN)
        );
    }

    #[test]
    fn test_divide_rounded() {
        assert_eq!(divide_rounded(Cents::new(37_840), 11), Cents::new(3_440));
        assert_eq!(divide_rounded(Cents::new(4_471_200), 365), Cents::new(12_250));
        assert_eq!(divide_rounded(Cents::new(17), 2), Cents::new(9));
        assert_eq!(divide_rounded(Cents::new(100), 0), Cents::ZERO);
    }

    #[test]
    fn test_sum_cents() {
        let total = sum_cents([Cents::new(80_000), Cents::new(350_000)]);
        assert_eq!(total, Cents::new(430_000));
        assert_eq!(sum_cents(std::iter::empty()), Cents::ZERO);
    }

    #[test]
    fn test_format_aud() {
        assert_eq!(format_aud(Cents::new(430_000)), "$4,300.00");
        assert_eq!(format_aud(Cents::new(-2_000)), "-$20.00");
    }
}
