//! Maximum Reasonable Rent Contribution (MRRC) calculator.
//!
//! Formula (per fortnight):
//!   25% of max basic DSP
//!   + 25% of max Pension Supplement
//!   + 100% of max Commonwealth Rent Assistance
//!
//! Each conversion stage (component, fortnightly, annual, monthly) rounds to
//! the cent on its own. Monthly is derived from the rounded annual figure, not
//! from an unrounded base.

use rust_decimal::Decimal;

use super::rates::{
    DSP_PERCENTAGE, FORTNIGHTS_PER_YEAR, MONTHS_PER_YEAR, PENSION_SUPPLEMENT_PERCENTAGE,
    RENT_ASSISTANCE_PERCENTAGE,
};
use super::types::{MrrcInput, MrrcResult};
use crate::currency::{divide_rounded, multiply_rounded, percent_of, sum_cents};

/// Calculate the tenant's rent contribution from fortnightly reference rates.
#[must_use]
pub fn calculate_mrrc(input: &MrrcInput) -> MrrcResult {
    let dsp_component = percent_of(input.dsp_basic_fortnight, DSP_PERCENTAGE);
    let pension_component = percent_of(
        input.pension_supplement_fortnight,
        PENSION_SUPPLEMENT_PERCENTAGE,
    );
    let rent_assistance_component = percent_of(
        input.rent_assistance_max_fortnight,
        RENT_ASSISTANCE_PERCENTAGE,
    );

    let total_fortnightly =
        sum_cents([dsp_component, pension_component, rent_assistance_component]);
    let total_annual = multiply_rounded(total_fortnightly, Decimal::from(FORTNIGHTS_PER_YEAR));
    let total_monthly = divide_rounded(total_annual, MONTHS_PER_YEAR);

    tracing::debug!(
        fortnightly = total_fortnightly.value(),
        monthly = total_monthly.value(),
        "calculated MRRC"
    );

    MrrcResult {
        dsp_component,
        pension_component,
        rent_assistance_component,
        total_fortnightly,
        total_monthly,
        total_annual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::rates::MrrcReferenceRates;
    use sdapay_shared::types::Cents;

    #[test]
    fn test_mrrc_from_published_rates() {
        let result = calculate_mrrc(&MrrcReferenceRates::published().to_input());

        // 25% of 1116.30 = 279.075 -> 279.08
        assert_eq!(result.dsp_component, Cents::new(27_908));
        // 25% of 83.20 = 20.80
        assert_eq!(result.pension_component, Cents::new(2_080));
        // 100% of 188.20
        assert_eq!(result.rent_assistance_component, Cents::new(18_820));

        assert_eq!(result.total_fortnightly, Cents::new(48_808));
        assert_eq!(result.total_annual, Cents::new(1_269_008));
        // 1269008 / 12 = 105750.67
        assert_eq!(result.total_monthly, Cents::new(105_751));
    }

    #[test]
    fn test_mrrc_zero_rates() {
        let result = calculate_mrrc(&MrrcInput {
            dsp_basic_fortnight: Cents::ZERO,
            pension_supplement_fortnight: Cents::ZERO,
            rent_assistance_max_fortnight: Cents::ZERO,
        });
        assert_eq!(result.total_fortnightly, Cents::ZERO);
        assert_eq!(result.total_monthly, Cents::ZERO);
    }

    #[test]
    fn test_mrrc_rounds_each_stage() {
        // 25% of 0.01 rounds to 0.00, so a one-cent DSP contributes nothing.
        let result = calculate_mrrc(&MrrcInput {
            dsp_basic_fortnight: Cents::new(1),
            pension_supplement_fortnight: Cents::new(2),
            rent_assistance_max_fortnight: Cents::new(1),
        });
        assert_eq!(result.dsp_component, Cents::ZERO);
        // 25% of 0.02 = 0.005 -> 0.01
        assert_eq!(result.pension_component, Cents::new(1));
        assert_eq!(result.total_fortnightly, Cents::new(2));
        assert_eq!(result.total_annual, Cents::new(52));
        // 52 / 12 = 4.33
        assert_eq!(result.total_monthly, Cents::new(4));
    }

    #[test]
    fn test_mrrc_saturates_on_huge_rates() {
        let result = calculate_mrrc(&MrrcInput {
            dsp_basic_fortnight: Cents::new(i64::MAX),
            pension_supplement_fortnight: Cents::new(i64::MAX),
            rent_assistance_max_fortnight: Cents::new(i64::MAX),
        });
        assert_eq!(result.rent_assistance_component, Cents::new(i64::MAX));
        assert_eq!(result.total_fortnightly, Cents::new(i64::MAX));
        assert_eq!(result.total_annual, Cents::new(i64::MAX));
        assert_eq!(result.total_monthly, Cents::new(i64::MAX / 12 + 1));
    }
}
