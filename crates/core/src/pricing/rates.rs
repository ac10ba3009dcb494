//! Published reference tables for SDA and MRRC pricing.
//!
//! Tables are immutable values. The reference-data store owns the lifecycle
//! of newer tables and passes them in; the FY2025-26 publication is built in.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sdapay_shared::types::{Cents, FinancialYear};

use super::types::{BuildingType, DesignCategory, MrrcInput};

// ============================================================================
// SDA
// ============================================================================

/// Annual supplement amounts, before location factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplementRates {
    /// On-site overnight assistance.
    pub onsite_assistance: Cents,
    /// Breakout room (Robust only).
    pub breakout_room: Cents,
    /// Fire sprinklers.
    pub fire_suppression: Cents,
}

/// SDA base annual rates keyed by building type and design category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdaRateTable {
    financial_year: FinancialYear,
    base_rates: HashMap<(BuildingType, DesignCategory), Cents>,
    supplements: SupplementRates,
}

impl SdaRateTable {
    /// Builds a rate table from published figures.
    pub fn new<I>(financial_year: FinancialYear, base_rates: I, supplements: SupplementRates) -> Self
    where
        I: IntoIterator<Item = ((BuildingType, DesignCategory), Cents)>,
    {
        Self {
            financial_year,
            base_rates: base_rates.into_iter().collect(),
            supplements,
        }
    }

    /// The built-in FY2025-26 table.
    #[must_use]
    pub fn published() -> &'static Self {
        &PUBLISHED_FY2025_26
    }

    /// Financial year the rates apply to.
    #[must_use]
    pub fn financial_year(&self) -> FinancialYear {
        self.financial_year
    }

    /// Base annual rate, or `None` when no rate is published for the pair.
    #[must_use]
    pub fn base_annual_rate(
        &self,
        building_type: BuildingType,
        design_category: DesignCategory,
    ) -> Option<Cents> {
        self.base_rates
            .get(&(building_type, design_category))
            .copied()
    }

    /// Supplement amounts.
    #[must_use]
    pub fn supplements(&self) -> SupplementRates {
        self.supplements
    }
}

static PUBLISHED_FY2025_26: LazyLock<SdaRateTable> = LazyLock::new(|| {
    use BuildingType::{House2Residents, House3Residents, Villa1Resident, Villa2Residents};
    use DesignCategory::{FullyAccessible, HighPhysicalSupport, ImprovedLiveability, Robust};

    SdaRateTable::new(
        FinancialYear::new(2025),
        [
            ((House2Residents, ImprovedLiveability), Cents::from_dollars(26_380)),
            ((House2Residents, FullyAccessible), Cents::from_dollars(41_400)),
            ((House2Residents, Robust), Cents::from_dollars(46_170)),
            ((House2Residents, HighPhysicalSupport), Cents::from_dollars(56_880)),
            ((House3Residents, ImprovedLiveability), Cents::from_dollars(19_650)),
            ((House3Residents, FullyAccessible), Cents::from_dollars(30_140)),
            ((House3Residents, Robust), Cents::from_dollars(33_630)),
            ((House3Residents, HighPhysicalSupport), Cents::from_dollars(40_660)),
            ((Villa1Resident, ImprovedLiveability), Cents::from_dollars(36_950)),
            ((Villa1Resident, FullyAccessible), Cents::from_dollars(54_530)),
            ((Villa1Resident, Robust), Cents::from_dollars(60_810)),
            ((Villa1Resident, HighPhysicalSupport), Cents::from_dollars(73_460)),
            ((Villa2Residents, ImprovedLiveability), Cents::from_dollars(22_400)),
            ((Villa2Residents, FullyAccessible), Cents::from_dollars(34_670)),
            ((Villa2Residents, Robust), Cents::from_dollars(38_680)),
            ((Villa2Residents, HighPhysicalSupport), Cents::from_dollars(47_210)),
        ],
        SupplementRates {
            onsite_assistance: Cents::from_dollars(11_600),
            breakout_room: Cents::from_dollars(3_680),
            fire_suppression: Cents::from_dollars(2_930),
        },
    )
});

impl BuildingType {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::House2Residents => "House, 2 residents",
            Self::House3Residents => "House, 3 residents",
            Self::Villa1Resident => "Villa/Duplex/Townhouse, 1 resident",
            Self::Villa2Residents => "Villa/Duplex/Townhouse, 2 residents",
        }
    }

    /// Maximum number of SDA residents.
    #[must_use]
    pub const fn max_residents(self) -> u8 {
        match self {
            Self::Villa1Resident => 1,
            Self::House2Residents | Self::Villa2Residents => 2,
            Self::House3Residents => 3,
        }
    }
}

impl DesignCategory {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::ImprovedLiveability => "Improved Liveability",
            Self::FullyAccessible => "Fully Accessible",
            Self::Robust => "Robust",
            Self::HighPhysicalSupport => "High Physical Support",
        }
    }

    /// Short description of the design standard.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Basic => "Housing without specialist design features but with room for carer",
            Self::ImprovedLiveability => {
                "Reasonable level of physical access and enhanced provision for sensory, intellectual or cognitive impairment"
            }
            Self::FullyAccessible => {
                "High level of physical access features for significant physical impairment"
            }
            Self::Robust => {
                "Resilient design with high physical access provisions using durable materials"
            }
            Self::HighPhysicalSupport => {
                "Enhanced physical access for significant physical impairment with very high support needs"
            }
        }
    }

    /// Whether a breakout room attracts the supplement.
    #[must_use]
    pub const fn breakout_room_allowed(self) -> bool {
        matches!(self, Self::Robust)
    }
}

/// A published location factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationFactor {
    /// Region name.
    pub region: &'static str,
    /// State or territory.
    pub state: &'static str,
    /// Multiplier applied to the SDA subtotal.
    pub factor: Decimal,
}

/// FY2025-26 location factors for the regions currently managed.
pub const LOCATION_FACTORS: [LocationFactor; 10] = [
    LocationFactor { region: "Townsville", state: "QLD", factor: dec!(1.08) },
    LocationFactor { region: "Brisbane", state: "QLD", factor: dec!(1.04) },
    LocationFactor { region: "Gold Coast", state: "QLD", factor: dec!(1.03) },
    LocationFactor { region: "Cairns", state: "QLD", factor: dec!(1.12) },
    LocationFactor { region: "Sydney", state: "NSW", factor: dec!(1.14) },
    LocationFactor { region: "Melbourne", state: "VIC", factor: dec!(1.06) },
    LocationFactor { region: "Adelaide", state: "SA", factor: dec!(1.00) },
    LocationFactor { region: "Perth", state: "WA", factor: dec!(1.09) },
    LocationFactor { region: "Darwin", state: "NT", factor: dec!(1.29) },
    LocationFactor { region: "Hobart", state: "TAS", factor: dec!(1.02) },
];

/// Look up a region's location factor, ignoring case.
#[must_use]
pub fn location_factor(region: &str) -> Option<&'static LocationFactor> {
    let region = region.trim();
    LOCATION_FACTORS
        .iter()
        .find(|entry| entry.region.eq_ignore_ascii_case(region))
}

// ============================================================================
// MRRC
// ============================================================================

/// Share of the DSP basic rate.
pub const DSP_PERCENTAGE: Decimal = dec!(0.25);
/// Share of the Pension Supplement.
pub const PENSION_SUPPLEMENT_PERCENTAGE: Decimal = dec!(0.25);
/// Share of Rent Assistance.
pub const RENT_ASSISTANCE_PERCENTAGE: Decimal = dec!(1.0);

/// Fortnights per year.
pub const FORTNIGHTS_PER_YEAR: i64 = 26;
/// Months per year.
pub const MONTHS_PER_YEAR: u32 = 12;
/// Days per year. Leap years are not adjusted for.
pub const DAYS_PER_YEAR: u32 = 365;

const MRRC_EFFECTIVE_FROM: NaiveDate = match NaiveDate::from_ymd_opt(2025, 3, 20) {
    Some(date) => date,
    None => panic!("invalid MRRC effective date"),
};

/// Fortnightly reference rates published by DSS, updated around March and
/// September each year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MrrcReferenceRates {
    /// Date the rates took effect.
    pub effective_from: NaiveDate,
    /// Maximum basic rate of the Disability Support Pension.
    pub dsp_basic_fortnight: Cents,
    /// Maximum Pension Supplement.
    pub pension_supplement_fortnight: Cents,
    /// Maximum Commonwealth Rent Assistance.
    pub rent_assistance_max_fortnight: Cents,
}

impl MrrcReferenceRates {
    /// Rates effective 20 March 2025.
    #[must_use]
    pub const fn published() -> Self {
        Self {
            effective_from: MRRC_EFFECTIVE_FROM,
            dsp_basic_fortnight: Cents::new(111_630),
            pension_supplement_fortnight: Cents::new(8_320),
            rent_assistance_max_fortnight: Cents::new(18_820),
        }
    }

    /// Calculator input for these rates.
    #[must_use]
    pub const fn to_input(&self) -> MrrcInput {
        MrrcInput {
            dsp_basic_fortnight: self.dsp_basic_fortnight,
            pension_supplement_fortnight: self.pension_supplement_fortnight,
            rent_assistance_max_fortnight: self.rent_assistance_max_fortnight,
        }
    }
}
