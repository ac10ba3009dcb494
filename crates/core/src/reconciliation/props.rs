//! Property-based tests for reconciliation.
//!
//! - Money in is rent plus subsidy
//! - Fees follow their rates and GST is 1/11 of the platform fee
//! - Energy items never move the payout
//! - A generated result passes the platform fee check

use proptest::prelude::*;
use rust_decimal::Decimal;
use sdapay_shared::types::{Cents, Period, PropertyId};

use super::calculator::PLATFORM_FEE_RATE;
use super::service::generate_reconciliation;
use super::types::{
    LineItem, LineItemCategory, LineItemSource, ReconciliationConfig, ReconciliationInput,
};
use super::validator::{ReconciliationField, validate_reconciliation};
use crate::currency::{divide_rounded, percent_of};

fn category() -> impl Strategy<Value = LineItemCategory> {
    prop_oneof![
        Just(LineItemCategory::Rent),
        Just(LineItemCategory::SdaSubsidy),
        Just(LineItemCategory::EnergyReimbursement),
        Just(LineItemCategory::EnergyInvoice),
        Just(LineItemCategory::Maintenance),
        Just(LineItemCategory::ManagementFee),
        Just(LineItemCategory::Other),
    ]
}

/// Strategy to generate a line item of -50,000.00 to 50,000.00.
fn line_item() -> impl Strategy<Value = LineItem> {
    (category(), -5_000_000i64..5_000_000i64).prop_map(|(category, amount)| LineItem {
        category,
        description: String::new(),
        amount: Cents::new(amount),
        source: LineItemSource::RentalStatement,
        source_reference: None,
    })
}

/// Strategy to generate agency fee rates (0.0000 to 0.2000).
fn agency_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn reconciliation_input() -> impl Strategy<Value = ReconciliationInput> {
    (
        prop::collection::vec(line_item(), 0..12),
        0i64..10_000_000i64,
        1u32..=12,
    )
        .prop_map(|(line_items, subsidy, month)| ReconciliationInput {
            property_id: PropertyId::new(),
            period: Period::new(2026, month).unwrap(),
            statement_number: None,
            line_items,
            sda_subsidy_amount: Cents::new(subsidy),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* input, total money in SHALL equal the rent and subsidy line
    /// items plus the claimed subsidy when no subsidy line item exists.
    #[test]
    fn prop_money_in_is_rent_plus_subsidy(
        input in reconciliation_input(),
        rate in agency_rate(),
    ) {
        let result = generate_reconciliation(&input, &ReconciliationConfig { agency_fee_rate: rate });

        let line_money_in: i64 = input
            .line_items
            .iter()
            .filter(|item| {
                matches!(item.category, LineItemCategory::Rent | LineItemCategory::SdaSubsidy)
            })
            .map(|item| item.amount.value())
            .sum();
        let has_subsidy_item = input
            .line_items
            .iter()
            .any(|item| item.category == LineItemCategory::SdaSubsidy);
        let claimed = if has_subsidy_item { 0 } else { input.sda_subsidy_amount.value() };

        prop_assert_eq!(result.total_money_in.value(), line_money_in + claimed);
    }

    /// *For any* input, fees SHALL be the rounded rate products of money in.
    #[test]
    fn prop_fees_follow_rates(input in reconciliation_input(), rate in agency_rate()) {
        let result = generate_reconciliation(&input, &ReconciliationConfig { agency_fee_rate: rate });

        prop_assert_eq!(result.agency_management_fee, percent_of(result.total_money_in, rate));
        prop_assert_eq!(result.platform_fee, percent_of(result.total_money_in, PLATFORM_FEE_RATE));
        prop_assert_eq!(result.tax_payable, divide_rounded(result.platform_fee, 11));
    }

    /// *For any* input, net payout SHALL deduct fees, maintenance and other costs only.
    #[test]
    fn prop_net_payout_formula(input in reconciliation_input(), rate in agency_rate()) {
        let result = generate_reconciliation(&input, &ReconciliationConfig { agency_fee_rate: rate });

        prop_assert_eq!(
            result.net_client_payout,
            result.total_money_in
                - result.agency_management_fee
                - result.platform_fee
                - result.maintenance_costs
                - result.other_deductions
        );
        prop_assert!(!result.maintenance_costs.is_negative());
        prop_assert!(!result.other_deductions.is_negative());
        prop_assert!(!result.energy_invoice_amount.is_negative());
    }

    /// *For any* input, adding energy items SHALL NOT change the payout.
    #[test]
    fn prop_energy_independent(
        input in reconciliation_input(),
        rate in agency_rate(),
        reimbursement in 0i64..1_000_000i64,
        invoice in 0i64..1_000_000i64,
    ) {
        let config = ReconciliationConfig { agency_fee_rate: rate };
        let baseline = generate_reconciliation(&input, &config);

        let mut with_energy = input.clone();
        with_energy.line_items.push(LineItem {
            category: LineItemCategory::EnergyReimbursement,
            description: String::new(),
            amount: Cents::new(reimbursement),
            source: LineItemSource::RentalStatement,
            source_reference: None,
        });
        with_energy.line_items.push(LineItem {
            category: LineItemCategory::EnergyInvoice,
            description: String::new(),
            amount: Cents::new(-invoice),
            source: LineItemSource::EnergyInvoice,
            source_reference: None,
        });
        let result = generate_reconciliation(&with_energy, &config);

        prop_assert_eq!(result.net_client_payout, baseline.net_client_payout);
        prop_assert_eq!(result.total_money_in, baseline.total_money_in);
    }

    /// *For any* generated result, the platform fee check SHALL NOT fire.
    #[test]
    fn prop_generated_platform_fee_validates(input in reconciliation_input(), rate in agency_rate()) {
        let result = generate_reconciliation(&input, &ReconciliationConfig { agency_fee_rate: rate });
        let warnings = validate_reconciliation(&result);

        prop_assert!(warnings.iter().all(|w| w.field != ReconciliationField::PlatformFee));
    }
}
