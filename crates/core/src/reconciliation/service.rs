//! Monthly reconciliation generation.

use super::calculator::{
    calculate_fees, calculate_net_client_payout, calculate_total_money_in, sum_by_category,
};
use super::types::{
    LineItem, LineItemCategory, LineItemSource, ReconciliationConfig, ReconciliationInput,
    ReconciliationResult, ReconciliationStatus,
};

/// Description used for the subsidy line item added from the claim amount.
pub const SUBSIDY_LINE_ITEM_DESCRIPTION: &str = "SDA Government Subsidy (PRODA claim)";

/// Generate a monthly reconciliation from parsed statement data.
///
/// Money in is rent plus SDA subsidy. Fees are charged on money in, and the
/// net payout deducts fees, maintenance and other costs. Energy amounts are
/// reported but do not affect the payout.
///
/// When the input carries a positive subsidy amount and no subsidy line item,
/// one is added from the claim amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use sdapay_core::reconciliation::{ReconciliationConfig, ReconciliationInput};
/// use sdapay_core::generate_reconciliation;
/// use sdapay_shared::types::{Cents, Period, PropertyId};
///
/// let input = ReconciliationInput {
///     property_id: PropertyId::new(),
///     period: Period::new(2026, 2).unwrap(),
///     statement_number: None,
///     line_items: vec![],
///     sda_subsidy_amount: Cents::from_dollars(3500),
/// };
/// let config = ReconciliationConfig { agency_fee_rate: dec!(0.044) };
///
/// let result = generate_reconciliation(&input, &config);
/// assert_eq!(result.total_money_in, Cents::from_dollars(3500));
/// assert_eq!(result.platform_fee, Cents::from_dollars(308));
/// assert_eq!(result.line_items.len(), 1);
/// ```
#[must_use]
pub fn generate_reconciliation(
    input: &ReconciliationInput,
    config: &ReconciliationConfig,
) -> ReconciliationResult {
    let mut line_items = input.line_items.clone();

    let has_subsidy_item = line_items
        .iter()
        .any(|item| item.category == LineItemCategory::SdaSubsidy);
    if input.sda_subsidy_amount.is_positive() && !has_subsidy_item {
        line_items.push(LineItem {
            category: LineItemCategory::SdaSubsidy,
            description: SUBSIDY_LINE_ITEM_DESCRIPTION.to_string(),
            amount: input.sda_subsidy_amount,
            source: LineItemSource::ProdaClaim,
            source_reference: None,
        });
    }

    let total_rent_received = sum_by_category(&line_items, LineItemCategory::Rent);
    let total_sda_subsidy = sum_by_category(&line_items, LineItemCategory::SdaSubsidy);
    let energy_reimbursement = sum_by_category(&line_items, LineItemCategory::EnergyReimbursement);
    // Outgoings are stored negative on statements; report them as positive costs
    let energy_invoice_amount = sum_by_category(&line_items, LineItemCategory::EnergyInvoice).abs();
    let maintenance_costs = sum_by_category(&line_items, LineItemCategory::Maintenance).abs();
    let other_deductions = sum_by_category(&line_items, LineItemCategory::Other).abs();

    let total_money_in = calculate_total_money_in(total_rent_received, total_sda_subsidy);
    let fees = calculate_fees(total_money_in, config.agency_fee_rate);

    let net_client_payout = calculate_net_client_payout(
        total_money_in,
        fees.agency_management_fee,
        fees.platform_fee,
        maintenance_costs,
        other_deductions,
    );

    tracing::debug!(
        property_id = %input.property_id,
        period = %input.period,
        line_items = line_items.len(),
        total_money_in = total_money_in.value(),
        agency_fee = fees.agency_management_fee.value(),
        platform_fee = fees.platform_fee.value(),
        net_client_payout = net_client_payout.value(),
        "Generated reconciliation"
    );

    ReconciliationResult {
        property_id: input.property_id,
        period: input.period,
        status: ReconciliationStatus::Generated,
        statement_number: input.statement_number,
        total_rent_received,
        total_sda_subsidy,
        total_money_in,
        agency_management_fee: fees.agency_management_fee,
        platform_fee: fees.platform_fee,
        tax_payable: fees.tax_on_platform_fee,
        energy_reimbursement,
        energy_invoice_amount,
        maintenance_costs,
        other_deductions,
        net_client_payout,
        line_items,
    }
}
