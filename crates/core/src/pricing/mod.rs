//! SDA subsidy income, MRRC rent contribution and pro-rata apportionment.

pub mod error;
pub mod mrrc;
pub mod pro_rata;
pub mod rates;
pub mod sda;
pub mod types;


pub use error::PricingError;
pub use mrrc::calculate_mrrc;
pub use pro_rata::{occupied_days, pro_rata_amount};
pub use rates::{
    LOCATION_FACTORS, LocationFactor, MrrcReferenceRates, SdaRateTable, SupplementRates,
    location_factor,
};
pub use sda::{calculate_sda_pricing, calculate_sda_pricing_with};
pub use types::{
    BuildingType, DesignCategory, MrrcInput, MrrcResult, SdaPricingInput, SdaPricingResult,
};
