//! Application configuration management.
//!
//! Per-agency fee rates and published reference rates are owned by the
//! reference-data store. This configuration only supplies the defaults used
//! when a request does not carry its own value.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Cents;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fee defaults.
    #[serde(default)]
    pub fees: FeeConfig,
    /// SDA pricing defaults.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// MRRC reference rates.
    #[serde(default)]
    pub mrrc: MrrcConfig,
}

/// Fee configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeConfig {
    /// Agency management fee rate applied when the rental agency record has none.
    #[serde(default = "default_agency_fee_rate")]
    pub default_agency_fee_rate: Decimal,
}

fn default_agency_fee_rate() -> Decimal {
    Decimal::new(44, 3)
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            default_agency_fee_rate: default_agency_fee_rate(),
        }
    }
}

/// SDA pricing configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// Region whose location factor applies when a request names neither a
    /// region nor an explicit factor.
    #[serde(default)]
    pub default_region: Option<String>,
}

/// Fortnightly MRRC reference rates, in cents.
#[derive(Debug, Clone, Deserialize)]
pub struct MrrcConfig {
    /// Maximum basic rate of the Disability Support Pension.
    #[serde(default = "default_dsp_basic")]
    pub dsp_basic_fortnight: Cents,
    /// Maximum Pension Supplement.
    #[serde(default = "default_pension_supplement")]
    pub pension_supplement_fortnight: Cents,
    /// Maximum Commonwealth Rent Assistance.
    #[serde(default = "default_rent_assistance")]
    pub rent_assistance_max_fortnight: Cents,
}

fn default_dsp_basic() -> Cents {
    Cents::new(111_630)
}

fn default_pension_supplement() -> Cents {
    Cents::new(8_320)
}

fn default_rent_assistance() -> Cents {
    Cents::new(18_820)
}

impl Default for MrrcConfig {
    fn default() -> Self {
        Self {
            dsp_basic_fortnight: default_dsp_basic(),
            pension_supplement_fortnight: default_pension_supplement(),
            rent_assistance_max_fortnight: default_rent_assistance(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SDAPAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
