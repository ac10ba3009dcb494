//! Monthly property reconciliation.
//!
//! Turns parsed rental statement line items and the SDA subsidy claim into
//! money in, fees, GST and the net payout owed to the property owner.

pub mod calculator;
pub mod service;
pub mod types;
pub mod validator;

#[cfg(test)]
mod props;

pub use calculator::{
    DEFAULT_AGENCY_FEE_RATE, PLATFORM_FEE_RATE, calculate_fees, calculate_net_client_payout,
    calculate_total_money_in, sum_by_category,
};
pub use service::{SUBSIDY_LINE_ITEM_DESCRIPTION, generate_reconciliation};
pub use types::{
    FeeBreakdown, LineItem, LineItemCategory, LineItemSource, ReconciliationConfig,
    ReconciliationInput, ReconciliationResult, ReconciliationStatus,
};
pub use validator::{ReconciliationField, ValidationWarning, validate_reconciliation};
