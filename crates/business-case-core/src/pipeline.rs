use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use crate::analysis::{analyze_business_case_with, effective_discount_rate_pct, AnalysisOptions};
use crate::model::BusinessCase;
use crate::schema::{check_schema, normalize};
use crate::types::{with_metadata, ComputationOutput};
use crate::validation::{validate_business_case, ValidationResult};
use crate::BusinessCaseResult;

/// Analyzed model plus its policy findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCaseEvaluation {
    pub model: BusinessCase,
    pub validation: ValidationResult,
}

/// normalize → schema check → analyze → validate.
///
/// Schema and structural failures abort with an error. Policy findings come
/// back in `validation`; callers must check `validation.is_valid` before
/// treating the model as export-ready. The envelope's warnings are the
/// per-option computation caveats, prefixed with the option name.
pub fn evaluate_business_case(
    input: &BusinessCase,
    opts: &AnalysisOptions,
) -> BusinessCaseResult<ComputationOutput<BusinessCaseEvaluation>> {
    let start = Instant::now();

    let mut bc = input.clone();
    normalize(&mut bc);
    check_schema(&bc)?;

    let model = analyze_business_case_with(&bc, opts)?;
    let validation = validate_business_case(&model);

    let warnings: Vec<String> = model
        .options
        .iter()
        .filter_map(|o| o.calc.as_ref().map(|c| (o, c)))
        .flat_map(|(o, c)| c.warnings.iter().map(move |w| format!("{}: {w}", o.name)))
        .collect();

    let fin = &model.financial;
    let assumptions = serde_json::json!({
        "horizon_months": fin.horizon_months,
        "currency": fin.currency,
        "discount_rate_pct": fin.discount_rate_pct.to_string(),
        "effective_discount_rate_pct": effective_discount_rate_pct(fin)?.to_string(),
        "tax_rate_pct": fin.effective_tax_rate().map(|t| t.to_string()),
        "finance_rate_pct": model.organizational.finance_rate_pct.to_string(),
        "reinvest_rate_pct": model.organizational.reinvest_rate_pct.to_string(),
        "default_recurrence_end": model.organizational.default_recurrence_end,
        "totals": "costs and benefits summed from the netted monthly series",
    });

    info!(
        options = model.options.len(),
        is_valid = validation.is_valid,
        errors = validation.errors.len(),
        warnings = validation.warnings.len(),
        "business case evaluated"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Business case evaluation: monthly cashflow, ROI, payback, NPV, MIRR, policy validation",
        &assumptions,
        warnings,
        elapsed,
        BusinessCaseEvaluation { model, validation },
    ))
}
