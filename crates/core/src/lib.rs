//! Core business logic for SDA Pay.
//!
//! This crate contains pure calculators with ZERO I/O. Every operation is a
//! deterministic function over immutable inputs, safe to call from any
//! number of threads.
//!
//! # Modules
//!
//! - `currency` - Integer-cent arithmetic, rounding and GST helpers
//! - `pricing` - SDA subsidy income, MRRC rent contribution, pro-rata apportionment
//! - `reconciliation` - Monthly property settlement and advisory validation

pub mod currency;
pub mod pricing;
pub mod reconciliation;

pub use pricing::{
    PricingError, calculate_mrrc, calculate_sda_pricing, calculate_sda_pricing_with,
    pro_rata_amount,
};
pub use reconciliation::{generate_reconciliation, validate_reconciliation};
