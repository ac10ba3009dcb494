//! Request decoding and dispatch.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sdapay_core::pricing::{
    BuildingType, DesignCategory, MrrcInput, MrrcResult, SdaPricingInput, SdaPricingResult,
    location_factor, occupied_days,
};
use sdapay_core::reconciliation::{
    LineItem, ReconciliationConfig, ReconciliationInput, ReconciliationResult, ValidationWarning,
};
use sdapay_core::{
    calculate_mrrc, calculate_sda_pricing, generate_reconciliation, pro_rata_amount,
    validate_reconciliation,
};
use sdapay_shared::types::{Cents, Period, PropertyId};
use sdapay_shared::{AppConfig, AppError, AppResult};

/// A calculator request, tagged by `operation`.
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    /// Generate and validate a monthly reconciliation.
    Reconcile(ReconcileRequest),
    /// Price SDA subsidy income for a dwelling.
    SdaPricing(SdaPricingRequest),
    /// Calculate the tenant rent contribution.
    Mrrc(MrrcRequest),
    /// Apportion a monthly amount to occupied days.
    ProRata(ProRataRequest),
}

/// Reconciliation request. Falls back to the configured agency fee rate.
#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    pub property_id: PropertyId,
    pub period: Period,
    #[serde(default)]
    pub statement_number: Option<u32>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub sda_subsidy_amount: Cents,
    #[serde(default)]
    pub agency_fee_rate: Option<Decimal>,
}

/// SDA pricing request. Either `location_factor` or `region` may be given;
/// with neither, the configured default region is used.
#[derive(Debug, Deserialize)]
pub struct SdaPricingRequest {
    pub building_type: BuildingType,
    pub design_category: DesignCategory,
    #[serde(default)]
    pub location_factor: Option<Decimal>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub has_onsite_assistance: bool,
    #[serde(default)]
    pub has_breakout_room: bool,
    #[serde(default)]
    pub has_fire_suppression: bool,
}

/// MRRC request. Missing rates fall back to configuration.
#[derive(Debug, Default, Deserialize)]
pub struct MrrcRequest {
    #[serde(default)]
    pub dsp_basic_fortnight: Option<Cents>,
    #[serde(default)]
    pub pension_supplement_fortnight: Option<Cents>,
    #[serde(default)]
    pub rent_assistance_max_fortnight: Option<Cents>,
}

/// Pro-rata request. `occupied_days` wins over move-in/move-out dates.
#[derive(Debug, Deserialize)]
pub struct ProRataRequest {
    pub monthly_amount: Cents,
    pub period: Period,
    #[serde(default)]
    pub occupied_days: Option<u32>,
    #[serde(default)]
    pub move_in: Option<NaiveDate>,
    #[serde(default)]
    pub move_out: Option<NaiveDate>,
}

/// Calculator response, tagged with the operation that produced it.
#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Response {
    Reconcile {
        result: ReconciliationResult,
        warnings: Vec<ValidationWarning>,
    },
    SdaPricing {
        result: SdaPricingResult,
    },
    Mrrc {
        result: MrrcResult,
    },
    ProRata {
        occupied_days: u32,
        amount: Cents,
    },
}

/// Error body written to stdout when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Decode a JSON request.
pub fn parse(raw: &str) -> AppResult<Request> {
    serde_json::from_str(raw).map_err(|e| AppError::Serialization(e.to_string()))
}

/// Run a request against the loaded configuration.
pub fn handle(request: Request, config: &AppConfig) -> AppResult<Response> {
    match request {
        Request::Reconcile(req) => Ok(reconcile(req, config)),
        Request::SdaPricing(req) => sda_pricing(&req, config),
        Request::Mrrc(req) => Ok(mrrc(&req, config)),
        Request::ProRata(req) => pro_rata(&req),
    }
}

fn reconcile(req: ReconcileRequest, config: &AppConfig) -> Response {
    let reconciliation_config = ReconciliationConfig {
        agency_fee_rate: req
            .agency_fee_rate
            .unwrap_or(config.fees.default_agency_fee_rate),
    };
    let input = ReconciliationInput {
        property_id: req.property_id,
        period: req.period,
        statement_number: req.statement_number,
        line_items: req.line_items,
        sda_subsidy_amount: req.sda_subsidy_amount,
    };

    let result = generate_reconciliation(&input, &reconciliation_config);
    let warnings = validate_reconciliation(&result);
    Response::Reconcile { result, warnings }
}

fn sda_pricing(req: &SdaPricingRequest, config: &AppConfig) -> AppResult<Response> {
    let factor = resolve_location_factor(req, config)?;
    let result = calculate_sda_pricing(&SdaPricingInput {
        building_type: req.building_type,
        design_category: req.design_category,
        location_factor: factor,
        has_onsite_assistance: req.has_onsite_assistance,
        has_breakout_room: req.has_breakout_room,
        has_fire_suppression: req.has_fire_suppression,
    })?;
    Ok(Response::SdaPricing { result })
}

fn resolve_location_factor(req: &SdaPricingRequest, config: &AppConfig) -> AppResult<Decimal> {
    if let Some(factor) = req.location_factor {
        return Ok(factor);
    }

    let region = req
        .region
        .as_deref()
        .or(config.pricing.default_region.as_deref())
        .ok_or_else(|| {
            AppError::Validation("location_factor or region is required".to_string())
        })?;

    location_factor(region)
        .map(|entry| entry.factor)
        .ok_or_else(|| AppError::Lookup(format!("No location factor for region '{region}'")))
}

fn mrrc(req: &MrrcRequest, config: &AppConfig) -> Response {
    let input = MrrcInput {
        dsp_basic_fortnight: req
            .dsp_basic_fortnight
            .unwrap_or(config.mrrc.dsp_basic_fortnight),
        pension_supplement_fortnight: req
            .pension_supplement_fortnight
            .unwrap_or(config.mrrc.pension_supplement_fortnight),
        rent_assistance_max_fortnight: req
            .rent_assistance_max_fortnight
            .unwrap_or(config.mrrc.rent_assistance_max_fortnight),
    };
    Response::Mrrc {
        result: calculate_mrrc(&input),
    }
}

fn pro_rata(req: &ProRataRequest) -> AppResult<Response> {
    if let (Some(move_in), Some(move_out)) = (req.move_in, req.move_out)
        && move_out < move_in
    {
        return Err(AppError::Validation(format!(
            "move_out {move_out} is before move_in {move_in}"
        )));
    }

    let days = req
        .occupied_days
        .unwrap_or_else(|| occupied_days(req.period, req.move_in, req.move_out));
    Ok(Response::ProRata {
        occupied_days: days,
        amount: pro_rata_amount(req.monthly_amount, days, req.period),
    })
}
