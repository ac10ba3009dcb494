//! Currency arithmetic in integer cents.
//!
//! CRITICAL: Rounding strategy for every derived amount:
//! - Always round to a whole cent
//! - Ties round away from zero (half-up for non-negative amounts)
//! - Apply the same rule everywhere a fee, tax or rate-derived amount is produced

pub mod arithmetic;
pub mod tax;

#[cfg(test)]
mod props;

pub use arithmetic::{
    ROUNDING, divide_rounded, format_aud, multiply_rounded, percent_of, round_to_cents, sum_cents,
    to_cents, to_dollars,
};
pub use tax::{TAX_DIVISOR, exclude_tax, include_tax, tax_from_inclusive};
