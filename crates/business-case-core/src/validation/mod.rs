pub mod completeness;
pub mod integrity;
pub mod policy;
pub mod result;

use tracing::debug;

pub use completeness::{validate_assumptions, validate_kpi_completeness, validate_risk_assessment};
pub use integrity::validate_cashflow_integrity;
pub use policy::{
    non_baseline_capex, validate_financial_thresholds, validate_investment_criteria,
    validate_option_comparison, CODE_BASELINE_COUNT,
};
pub use result::{Severity, ValidationError, ValidationResult, ValidationWarning};

use crate::analysis::{analyze_business_case, check_structure};
use crate::model::BusinessCase;
use crate::BusinessCaseResult;

/// Run every policy check and concatenate the findings in a fixed order:
/// thresholds, option comparison, risks, KPIs, assumptions, cashflow
/// integrity, investment criteria.
///
/// Never fails. Blocking findings land in `errors` and clear `is_valid`.
pub fn validate_business_case(bc: &BusinessCase) -> ValidationResult {
    let org = &bc.organizational;
    let checks = [
        ("financial_thresholds", validate_financial_thresholds(bc)),
        (
            "option_comparison",
            validate_option_comparison(&bc.options, bc.project_type, org),
        ),
        (
            "risk_assessment",
            validate_risk_assessment(&bc.project_risks, &bc.options, org.risk_tolerance_level),
        ),
        (
            "kpi_completeness",
            validate_kpi_completeness(&bc.strategic.success_kpis),
        ),
        ("assumptions", validate_assumptions(&bc.strategic.key_assumptions)),
        ("cashflow_integrity", validate_cashflow_integrity(&bc.options)),
        (
            "investment_criteria",
            validate_investment_criteria(&bc.options, &bc.financial),
        ),
    ];

    let mut out = ValidationResult::new();
    for (name, check) in checks {
        debug!(
            check = name,
            errors = check.errors.len(),
            warnings = check.warnings.len(),
            "validation check complete"
        );
        out.merge(check);
    }
    out
}

/// Analyze, then validate, so investment criteria see fresh `_calc` blocks.
///
/// A model that cannot be analyzed for structural reasons (baseline count,
/// option count, empty options) is validated as-is instead, so those
/// problems come back as findings rather than an error.
pub fn analyze_and_validate(bc: &BusinessCase) -> BusinessCaseResult<ValidationResult> {
    if let Err(e) = check_structure(bc) {
        debug!(reason = %e, "validating without computed results");
        return Ok(validate_business_case(bc));
    }
    let analyzed = analyze_business_case(bc)?;
    Ok(validate_business_case(&analyzed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn case(baseline_items: serde_json::Value) -> BusinessCase {
        serde_json::from_value(json!({
            "organizational": {},
            "options": [
                { "id": "base", "name": "Status quo", "isBaseline": true, "lineItems": baseline_items },
                { "id": "new", "name": "Replace", "lineItems": [
                    { "kind": "cost", "category": "capex", "amount": "1000", "recurrence": "one-time" }
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_baseline_without_recurring_cost_warns() {
        let bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "1", "recurrence": "one-time" }
        ]));
        let r = validate_business_case(&bc);
        assert!(r.is_valid);
        assert!(r.has_warning("recurring status-quo costs"));
    }

    #[test]
    fn test_monthly_baseline_cost_clears_warning() {
        let bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "1", "recurrence": "one-time" },
            { "kind": "cost", "category": "maintenance", "amount": "50", "recurrence": "monthly" }
        ]));
        let r = validate_business_case(&bc);
        assert!(!r.has_warning("recurring status-quo costs"));
    }

    #[test]
    fn test_two_baselines_is_an_error() {
        let mut bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "10", "recurrence": "monthly" }
        ]));
        bc.options[1].is_baseline = true;
        let r = validate_business_case(&bc);
        assert!(!r.is_valid);
        assert!(r.has_error_code(CODE_BASELINE_COUNT));
    }

    #[test]
    fn test_non_positive_amount_is_an_error() {
        let mut bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "10", "recurrence": "monthly" }
        ]));
        bc.options[1].line_items[0].amount = rust_decimal::Decimal::ZERO;
        let r = validate_business_case(&bc);
        assert!(!r.is_valid);
        assert_eq!(r.errors[0].field, "options[1].lineItems[0].amount");
    }

    #[test]
    fn test_recurring_end_before_start_is_an_error() {
        let bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "10", "recurrence": "monthly",
              "startMonth": 5, "endMonth": 5 }
        ]));
        let r = validate_business_case(&bc);
        assert!(!r.is_valid);
        assert_eq!(r.errors[0].field, "options[0].lineItems[0].endMonth");
    }

    #[test]
    fn test_missing_required_category_warns_per_category() {
        let mut bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "10", "recurrence": "monthly" }
        ]));
        bc.organizational.baseline_requirements = crate::model::default_baseline_requirements();
        let r = validate_option_comparison(&bc.options, bc.project_type, &bc.organizational);
        assert!(r.has_warning("Baseline missing required category: productivity"));
        assert!(!r.has_warning("Baseline missing required category: opex"));
    }

    #[test]
    fn test_capex_above_threshold_recommends_npv_and_mirr() {
        let mut bc = case(json!([
            { "kind": "cost", "category": "opex", "amount": "10", "recurrence": "monthly" }
        ]));
        bc.options[1].line_items[0].amount = rust_decimal_macros::dec!(50000);
        let r = validate_financial_thresholds(&bc);
        assert_eq!(r.warnings.len(), 2);
        assert_eq!(r.warnings[0].field, "financial.requireNPV");
        assert_eq!(r.warnings[1].field, "financial.requireMIRR");

        bc.financial.require_npv = true;
        bc.financial.require_mirr = true;
        assert!(validate_financial_thresholds(&bc).warnings.is_empty());
    }
}
