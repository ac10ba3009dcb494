//! Fee and payout arithmetic for reconciliations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sdapay_shared::types::Cents;

use super::types::{FeeBreakdown, LineItem, LineItemCategory};
use crate::currency::{percent_of, sum_cents, tax_from_inclusive};

/// Platform management fee: 8.8% of total money in, GST inclusive.
pub const PLATFORM_FEE_RATE: Decimal = dec!(0.088);

/// Agency fee rate used when the agency record carries none.
pub const DEFAULT_AGENCY_FEE_RATE: Decimal = dec!(0.044);

/// Calculate management fees from total money in.
///
/// Agency fee: variable rate of total money in.
/// Platform fee: 8.8% of total money in.
/// GST: 1/11 of the GST-inclusive platform fee.
#[must_use]
pub fn calculate_fees(total_money_in: Cents, agency_fee_rate: Decimal) -> FeeBreakdown {
    let agency_management_fee = percent_of(total_money_in, agency_fee_rate);
    let platform_fee = percent_of(total_money_in, PLATFORM_FEE_RATE);
    let tax_on_platform_fee = tax_from_inclusive(platform_fee);

    FeeBreakdown {
        agency_management_fee,
        platform_fee,
        tax_on_platform_fee,
        total_fees: agency_management_fee + platform_fee,
    }
}

/// Sum line items in one category.
#[must_use]
pub fn sum_by_category(line_items: &[LineItem], category: LineItemCategory) -> Cents {
    sum_cents(
        line_items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.amount),
    )
}

/// Total money in: rent + SDA subsidy.
#[must_use]
pub fn calculate_total_money_in(total_rent: Cents, sda_subsidy: Cents) -> Cents {
    total_rent + sda_subsidy
}

/// Net client payout.
///
/// Energy reimbursement and energy invoice are left out: the tenant repays
/// what the energy company invoiced, so the pair nets to zero.
#[must_use]
pub fn calculate_net_client_payout(
    total_money_in: Cents,
    agency_fee: Cents,
    platform_fee: Cents,
    maintenance_costs: Cents,
    other_deductions: Cents,
) -> Cents {
    total_money_in - agency_fee - platform_fee - maintenance_costs - other_deductions
}
