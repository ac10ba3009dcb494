//! Pricing error types.

use rust_decimal::Decimal;
use sdapay_shared::AppError;
use thiserror::Error;

use super::types::{BuildingType, DesignCategory};

/// Pricing-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// No published rate for the building type and design category pair.
    #[error(
        "No SDA rate found for building type \"{building_type}\" and design category \"{design_category}\""
    )]
    RateNotFound {
        /// Requested building type.
        building_type: BuildingType,
        /// Requested design category.
        design_category: DesignCategory,
    },

    /// Location factor must be positive.
    #[error("Location factor must be positive, got {0}")]
    InvalidLocationFactor(Decimal),
}

impl PricingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RateNotFound { .. } => "SDA_RATE_NOT_FOUND",
            Self::InvalidLocationFactor(_) => "INVALID_LOCATION_FACTOR",
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::RateNotFound { .. } => Self::Lookup(err.to_string()),
            PricingError::InvalidLocationFactor(_) => Self::Validation(err.to_string()),
        }
    }
}
