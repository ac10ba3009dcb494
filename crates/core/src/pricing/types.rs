//! Pricing data types.

use rust_decimal::Decimal;
use sdapay_shared::types::Cents;
use serde::{Deserialize, Serialize};

/// SDA building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// House, 2 residents.
    #[serde(rename = "house_2_residents")]
    House2Residents,
    /// House, 3 residents.
    #[serde(rename = "house_3_residents")]
    House3Residents,
    /// Villa/duplex/townhouse, 1 resident.
    #[serde(rename = "villa_1_resident")]
    Villa1Resident,
    /// Villa/duplex/townhouse, 2 residents.
    #[serde(rename = "villa_2_residents")]
    Villa2Residents,
}

impl BuildingType {
    /// All building types, in table order.
    pub const ALL: [Self; 4] = [
        Self::House2Residents,
        Self::House3Residents,
        Self::Villa1Resident,
        Self::Villa2Residents,
    ];
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::House2Residents => write!(f, "house_2_residents"),
            Self::House3Residents => write!(f, "house_3_residents"),
            Self::Villa1Resident => write!(f, "villa_1_resident"),
            Self::Villa2Residents => write!(f, "villa_2_residents"),
        }
    }
}

/// SDA design category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignCategory {
    /// Basic. Not available for new builds, so no published rate.
    Basic,
    /// Improved Liveability.
    ImprovedLiveability,
    /// Fully Accessible.
    FullyAccessible,
    /// Robust.
    Robust,
    /// High Physical Support.
    HighPhysicalSupport,
}

impl DesignCategory {
    /// All design categories.
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::ImprovedLiveability,
        Self::FullyAccessible,
        Self::Robust,
        Self::HighPhysicalSupport,
    ];
}

impl std::fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::ImprovedLiveability => write!(f, "improved_liveability"),
            Self::FullyAccessible => write!(f, "fully_accessible"),
            Self::Robust => write!(f, "robust"),
            Self::HighPhysicalSupport => write!(f, "high_physical_support"),
        }
    }
}

/// Input for the SDA subsidy income calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdaPricingInput {
    /// Building type.
    pub building_type: BuildingType,
    /// Design category.
    pub design_category: DesignCategory,
    /// Multiplicative location factor (e.g. 1.08 for Townsville).
    pub location_factor: Decimal,
    /// On-site overnight assistance room.
    #[serde(default)]
    pub has_onsite_assistance: bool,
    /// Breakout room. Only funded for the Robust category.
    #[serde(default)]
    pub has_breakout_room: bool,
    /// Fire sprinklers.
    #[serde(default)]
    pub has_fire_suppression: bool,
}

/// Output of the SDA subsidy income calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdaPricingResult {
    /// Base annual rate before supplements and location.
    pub base_annual_rate: Cents,
    /// On-site overnight assistance supplement.
    pub onsite_assistance_supplement: Cents,
    /// Breakout room supplement.
    pub breakout_supplement: Cents,
    /// Fire sprinkler supplement.
    pub fire_suppression_supplement: Cents,
    /// Base rate plus supplements.
    pub subtotal_before_location: Cents,
    /// Location factor applied.
    pub location_factor: Decimal,
    /// Expected annual SDA income.
    pub annual_sda_amount: Cents,
    /// Annual amount / 12.
    pub monthly_sda_amount: Cents,
    /// Annual amount / 365.
    pub daily_sda_amount: Cents,
}

/// Input for the MRRC calculator. All rates are per fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrrcInput {
    /// Maximum basic rate of the Disability Support Pension.
    pub dsp_basic_fortnight: Cents,
    /// Maximum Pension Supplement.
    pub pension_supplement_fortnight: Cents,
    /// Maximum Commonwealth Rent Assistance.
    pub rent_assistance_max_fortnight: Cents,
}

/// Output of the MRRC calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrrcResult {
    /// 25% of DSP.
    pub dsp_component: Cents,
    /// 25% of Pension Supplement.
    pub pension_component: Cents,
    /// 100% of Rent Assistance.
    pub rent_assistance_component: Cents,
    /// Sum of the components.
    pub total_fortnightly: Cents,
    /// Annual total / 12.
    pub total_monthly: Cents,
    /// Fortnightly total * 26.
    pub total_annual: Cents,
}
