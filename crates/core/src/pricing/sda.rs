//! SDA subsidy income calculator.
//!
//! Formula:
//!   (base_rate + supplements) × location_factor = annual SDA amount
//!
//! Supplements:
//!   - On-site overnight assistance
//!   - Breakout room (Robust category only)
//!   - Fire sprinklers

use rust_decimal::Decimal;
use sdapay_shared::types::Cents;

use super::error::PricingError;
use super::rates::{DAYS_PER_YEAR, MONTHS_PER_YEAR, SdaRateTable};
use super::types::{SdaPricingInput, SdaPricingResult};
use crate::currency::{divide_rounded, percent_of};

/// Calculate expected SDA income using the published FY2025-26 rates.
///
/// # Errors
///
/// Returns `PricingError::RateNotFound` when no rate is published for the
/// building type and design category, and `PricingError::InvalidLocationFactor`
/// when the location factor is not positive.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use sdapay_core::pricing::{BuildingType, DesignCategory, SdaPricingInput, calculate_sda_pricing};
/// use sdapay_shared::types::Cents;
///
/// let result = calculate_sda_pricing(&SdaPricingInput {
///     building_type: BuildingType::House2Residents,
///     design_category: DesignCategory::FullyAccessible,
///     location_factor: dec!(1.08),
///     has_onsite_assistance: false,
///     has_breakout_room: false,
///     has_fire_suppression: false,
/// })
/// .unwrap();
/// assert_eq!(result.annual_sda_amount, Cents::new(4_471_200));
/// ```
pub fn calculate_sda_pricing(input: &SdaPricingInput) -> Result<SdaPricingResult, PricingError> {
    calculate_sda_pricing_with(SdaRateTable::published(), input)
}

/// Calculate expected SDA income against a supplied rate table.
///
/// # Errors
///
/// Same as [`calculate_sda_pricing`].
pub fn calculate_sda_pricing_with(
    table: &SdaRateTable,
    input: &SdaPricingInput,
) -> Result<SdaPricingResult, PricingError> {
    if input.location_factor <= Decimal::ZERO {
        return Err(PricingError::InvalidLocationFactor(input.location_factor));
    }

    let base_annual_rate = table
        .base_annual_rate(input.building_type, input.design_category)
        .ok_or(PricingError::RateNotFound {
            building_type: input.building_type,
            design_category: input.design_category,
        })?;

    let supplements = table.supplements();
    let onsite_assistance_supplement = if input.has_onsite_assistance {
        supplements.onsite_assistance
    } else {
        Cents::ZERO
    };
    // A breakout room on any other category is ignored, not rejected.
    let breakout_supplement =
        if input.has_breakout_room && input.design_category.breakout_room_allowed() {
            supplements.breakout_room
        } else {
            Cents::ZERO
        };
    let fire_suppression_supplement = if input.has_fire_suppression {
        supplements.fire_suppression
    } else {
        Cents::ZERO
    };

    let subtotal_before_location = base_annual_rate
        + onsite_assistance_supplement
        + breakout_supplement
        + fire_suppression_supplement;

    let annual_sda_amount = percent_of(subtotal_before_location, input.location_factor);
    let monthly_sda_amount = divide_rounded(annual_sda_amount, MONTHS_PER_YEAR);
    let daily_sda_amount = divide_rounded(annual_sda_amount, DAYS_PER_YEAR);

    tracing::debug!(
        building_type = %input.building_type,
        design_category = %input.design_category,
        financial_year = %table.financial_year(),
        location_factor = %input.location_factor,
        annual = annual_sda_amount.value(),
        "calculated SDA pricing"
    );

    Ok(SdaPricingResult {
        base_annual_rate,
        onsite_assistance_supplement,
        breakout_supplement,
        fire_suppression_supplement,
        subtotal_before_location,
        location_factor: input.location_factor,
        annual_sda_amount,
        monthly_sda_amount,
        daily_sda_amount,
    })
}
