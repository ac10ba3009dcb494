//! Common types used across the application.

pub mod id;
pub mod money;
pub mod period;

pub use id::PropertyId;
pub use money::Cents;
pub use period::{FinancialYear, Period, PeriodError};
