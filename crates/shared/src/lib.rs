//! Shared types, errors, and configuration for SDA Pay.
//!
//! This crate provides common types used across all other crates:
//! - `Cents` money type in integer minor units
//! - Calendar `Period` and `FinancialYear` types
//! - Typed IDs for property references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
