//! Reconciliation data types.

use rust_decimal::Decimal;
use sdapay_shared::types::{Cents, Period, PropertyId};
use serde::{Deserialize, Serialize};

/// Line item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemCategory {
    /// Tenant rent.
    Rent,
    /// SDA government subsidy.
    SdaSubsidy,
    /// Energy costs repaid by the tenant.
    EnergyReimbursement,
    /// Energy company invoice.
    EnergyInvoice,
    /// Repairs and maintenance.
    Maintenance,
    /// Management fee charged on the statement.
    ManagementFee,
    /// Anything else.
    Other,
}

/// Where a line item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemSource {
    /// Rental agency statement.
    RentalStatement,
    /// Government subsidy claim (PRODA).
    ProdaClaim,
    /// Supplier invoice.
    EnergyInvoice,
    /// Entered by staff.
    Manual,
}

/// One itemized amount on a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Category.
    pub category: LineItemCategory,
    /// Free-text description.
    pub description: String,
    /// Positive = money in, negative = money out.
    pub amount: Cents,
    /// Origin of the item.
    pub source: LineItemSource,
    /// Statement or invoice reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
}

/// Input for a monthly reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationInput {
    /// Property being reconciled.
    pub property_id: PropertyId,
    /// Calendar month.
    pub period: Period,
    /// Rental statement sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_number: Option<u32>,
    /// Parsed statement line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// SDA subsidy paid for the period.
    pub sda_subsidy_amount: Cents,
}

/// Per-property reconciliation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Rental agency management fee rate (e.g. 0.044), from the agency record.
    pub agency_fee_rate: Decimal,
}

/// Reconciliation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationStatus {
    /// Awaiting statement data.
    Pending,
    /// Calculated by the engine.
    Generated,
    /// Checked by staff.
    Reviewed,
    /// Approved for payout.
    Approved,
    /// Sent to the client.
    Published,
}

/// Fees derived from total money in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Rental agency management fee.
    pub agency_management_fee: Cents,
    /// Platform management fee (GST inclusive).
    pub platform_fee: Cents,
    /// GST component of the platform fee.
    pub tax_on_platform_fee: Cents,
    /// Agency fee + platform fee.
    pub total_fees: Cents,
}

/// A computed monthly reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Property reconciled.
    pub property_id: PropertyId,
    /// Calendar month.
    pub period: Period,
    /// Lifecycle status.
    pub status: ReconciliationStatus,
    /// Rental statement sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_number: Option<u32>,

    // Money in
    /// Rent received.
    pub total_rent_received: Cents,
    /// SDA subsidy received.
    pub total_sda_subsidy: Cents,
    /// Rent + subsidy.
    pub total_money_in: Cents,

    // Deductions
    /// Rental agency management fee.
    pub agency_management_fee: Cents,
    /// Platform management fee.
    pub platform_fee: Cents,
    /// GST on the platform fee.
    pub tax_payable: Cents,
    /// Energy repaid by the tenant.
    pub energy_reimbursement: Cents,
    /// Energy invoiced (absolute).
    pub energy_invoice_amount: Cents,
    /// Maintenance costs (absolute).
    pub maintenance_costs: Cents,
    /// Other deductions (absolute).
    pub other_deductions: Cents,

    /// Amount paid to the property owner.
    pub net_client_payout: Cents,

    /// Line items, including any synthesized subsidy item.
    pub line_items: Vec<LineItem>,
}
