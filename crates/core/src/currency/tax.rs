//! GST helpers.
//!
//! GST is 10%, so the GST component of a GST-inclusive amount is 1/11 of it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sdapay_shared::types::Cents;

use super::arithmetic::{divide_rounded, percent_of};

/// Divisor extracting the GST component from a GST-inclusive amount.
pub const TAX_DIVISOR: u32 = 11;

/// Multiplier turning a GST-exclusive amount into a GST-inclusive one.
const TAX_INCLUSIVE_FACTOR: Decimal = dec!(1.1);

/// GST component of a GST-inclusive amount.
#[must_use]
pub fn tax_from_inclusive(inclusive_amount: Cents) -> Cents {
    divide_rounded(inclusive_amount, TAX_DIVISOR)
}

/// GST-exclusive part of a GST-inclusive amount.
#[must_use]
pub fn exclude_tax(inclusive_amount: Cents) -> Cents {
    inclusive_amount - tax_from_inclusive(inclusive_amount)
}

/// Add GST to a GST-exclusive amount.
#[must_use]
pub fn include_tax(exclusive_amount: Cents) -> Cents {
    percent_of(exclusive_amount, TAX_INCLUSIVE_FACTOR)
}
