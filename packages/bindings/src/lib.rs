use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use business_case_core::analysis::{self, AnalysisOptions};
use business_case_core::cashflow;
use business_case_core::model::{
    BusinessCase, LineItem, OrganizationalSettings, RiskLevel5, MAX_HORIZON_MONTHS, MIN_HORIZON_MONTHS,
};
use business_case_core::pipeline;
use business_case_core::risk::{self, RiskMatrix};
use business_case_core::schema::{self, RateScale};
use business_case_core::types::Months;
use business_case_core::validation;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Parse a business case and run it through the boundary checks.
fn prepared_case(input_json: &str) -> NapiResult<BusinessCase> {
    let case = schema::parse_business_case(input_json).map_err(to_napi_error)?;
    schema::prepare(case, RateScale::Percent).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Business case
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_business_case(input_json: String) -> NapiResult<String> {
    let case = prepared_case(&input_json)?;
    let output = analysis::analyze_business_case(&case).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn validate_business_case(input_json: String) -> NapiResult<String> {
    let case = prepared_case(&input_json)?;
    let output = validation::analyze_and_validate(&case).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn evaluate_business_case(input_json: String) -> NapiResult<String> {
    let case = prepared_case(&input_json)?;
    let output = pipeline::evaluate_business_case(&case, &AnalysisOptions::default())
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CashflowInput {
    line_items: Vec<LineItem>,
    horizon_months: Months,
    #[serde(default)]
    organizational: OrganizationalSettings,
}

#[napi]
pub fn generate_monthly_cashflow(input_json: String) -> NapiResult<String> {
    let input: CashflowInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let horizon = input
        .horizon_months
        .clamp(MIN_HORIZON_MONTHS, MAX_HORIZON_MONTHS);
    let output =
        cashflow::generate_monthly_cashflow(&input.line_items, horizon, &input.organizational)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RiskScoreInput {
    probability: RiskLevel5,
    impact: RiskLevel5,
    #[serde(default)]
    matrix: RiskMatrix,
}

#[napi]
pub fn compute_risk_score(input_json: String) -> NapiResult<u32> {
    let input: RiskScoreInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.matrix.validate().map_err(to_napi_error)?;
    Ok(risk::compute_risk_score(
        input.probability,
        input.impact,
        &input.matrix,
    ))
}
