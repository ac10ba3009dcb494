//! Pro-rata apportionment for partial-month occupancy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sdapay_shared::types::{Cents, Period};

use crate::currency::round_to_cents;

/// Apportion a monthly amount to the days a participant occupied the dwelling.
///
/// A full (or over-full) month returns the monthly amount unchanged.
#[must_use]
pub fn pro_rata_amount(monthly_amount: Cents, occupied_days: u32, period: Period) -> Cents {
    let total_days = period.days();
    if occupied_days >= total_days {
        return monthly_amount;
    }
    round_to_cents(
        monthly_amount.as_decimal() * Decimal::from(occupied_days) / Decimal::from(total_days),
    )
}

/// Count the occupied days of a period from optional move-in and move-out dates.
///
/// Both dates are inclusive and clamped to the period. Occupancy that ends
/// before or starts after the period yields zero.
#[must_use]
pub fn occupied_days(
    period: Period,
    move_in: Option<NaiveDate>,
    move_out: Option<NaiveDate>,
) -> u32 {
    let start = move_in.map_or(period.first_day(), |date| date.max(period.first_day()));
    let end = move_out.map_or(period.last_day(), |date| date.min(period.last_day()));

    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(0)
}
