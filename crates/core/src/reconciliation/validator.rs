//! Advisory checks on a generated reconciliation.
//!
//! Warnings are data for staff review. Nothing here rejects a result.

use std::fmt;

use sdapay_shared::types::Cents;
use serde::{Deserialize, Serialize};

use super::calculator::PLATFORM_FEE_RATE;
use super::types::ReconciliationResult;
use crate::currency::{format_aud, percent_of};

/// Largest energy reimbursement/invoice gap accepted without a warning.
pub const ENERGY_TOLERANCE: Cents = Cents::new(100);

/// Largest platform fee deviation from the expected rate accepted without a warning.
pub const PLATFORM_FEE_TOLERANCE: Cents = Cents::new(10);

/// Reconciliation field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationField {
    /// Total money in.
    TotalMoneyIn,
    /// Net client payout.
    NetClientPayout,
    /// Energy reimbursement against energy invoice.
    Energy,
    /// Platform fee.
    PlatformFee,
}

impl ReconciliationField {
    /// Field name as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalMoneyIn => "total_money_in",
            Self::NetClientPayout => "net_client_payout",
            Self::Energy => "energy",
            Self::PlatformFee => "platform_fee",
        }
    }
}

impl fmt::Display for ReconciliationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue found on a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Field the warning refers to.
    pub field: ReconciliationField,
    /// Human-readable message.
    pub message: String,
}

impl ValidationWarning {
    fn new(field: ReconciliationField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a reconciliation for results that need human review.
///
/// Returns warnings in a fixed order: money in, payout, energy, platform fee.
#[must_use]
pub fn validate_reconciliation(result: &ReconciliationResult) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !result.total_money_in.is_positive() {
        warnings.push(ValidationWarning::new(
            ReconciliationField::TotalMoneyIn,
            "Total money in is zero or negative",
        ));
    }

    if result.net_client_payout.is_negative() {
        warnings.push(ValidationWarning::new(
            ReconciliationField::NetClientPayout,
            "Net client payout is negative - review deductions",
        ));
    }

    if result.energy_reimbursement.is_positive() && result.energy_invoice_amount.is_positive() {
        let difference = (result.energy_reimbursement - result.energy_invoice_amount).abs();
        if difference > ENERGY_TOLERANCE {
            warnings.push(ValidationWarning::new(
                ReconciliationField::Energy,
                format!(
                    "Energy reimbursement and invoice differ by {} - should net to zero",
                    format_aud(difference)
                ),
            ));
        }
    }

    let expected_platform_fee = percent_of(result.total_money_in, PLATFORM_FEE_RATE);
    if (result.platform_fee - expected_platform_fee).abs() > PLATFORM_FEE_TOLERANCE {
        warnings.push(ValidationWarning::new(
            ReconciliationField::PlatformFee,
            format!(
                "Platform fee {} does not match expected {} at {PLATFORM_FEE_RATE}",
                format_aud(result.platform_fee),
                format_aud(expected_platform_fee)
            ),
        ));
    }

    for warning in &warnings {
        tracing::warn!(
            property_id = %result.property_id,
            period = %result.period,
            field = %warning.field,
            "{}",
            warning.message
        );
    }

    warnings
}
