use business_case_core::analysis::{analyze_business_case, AnalysisOptions};
use business_case_core::model::{BusinessCase, RiskLevel5, RiskTolerance};
use business_case_core::pipeline::evaluate_business_case;
use business_case_core::schema::parse_business_case;
use business_case_core::validation::{
    analyze_and_validate, validate_business_case, CODE_BASELINE_COUNT,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn sample() -> BusinessCase {
    parse_business_case(include_str!("fixtures/sample_business_case.json")).unwrap()
}

#[test]
fn test_sample_is_valid_with_advisories() {
    let result = validate_business_case(&sample());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    let messages: Vec<&str> = result.warnings.iter().map(|w| w.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Baseline missing required category: productivity",
            "Validation pending.",
        ]
    );
}

// ===========================================================================
// Baseline rules
// ===========================================================================

#[test]
fn test_fails_iff_baseline_count_is_not_one() {
    for count in 0..=2 {
        let mut bc = sample();
        bc.options[0].is_baseline = count >= 1;
        bc.options[1].is_baseline = count >= 2;
        let result = validate_business_case(&bc);
        assert_eq!(result.is_valid, count == 1, "baselines = {count}");
        assert_eq!(result.has_error_code(CODE_BASELINE_COUNT), count != 1);
    }
}

#[test]
fn test_recurring_baseline_cost_warning_scenario() {
    let mut bc = sample();
    bc.options[0].line_items = vec![serde_json::from_value(json!({
        "id": "placeholder", "kind": "cost", "category": "opex",
        "amount": 1, "recurrence": "one-time"
    }))
    .unwrap()];
    let warned = validate_business_case(&bc);
    assert!(warned.has_warning("Baseline should include recurring status-quo costs"));

    bc.options[0].line_items.push(
        serde_json::from_value(json!({
            "kind": "cost", "category": "maintenance", "amount": 200, "recurrence": "annual"
        }))
        .unwrap(),
    );
    let cleared = validate_business_case(&bc);
    assert!(!cleared.has_warning("Baseline should include recurring status-quo costs"));
}

#[test]
fn test_baseline_with_benefits_warns() {
    let mut bc = sample();
    bc.options[0].line_items.push(
        serde_json::from_value(json!({
            "kind": "benefit", "category": "revenue", "amount": 10, "recurrence": "monthly"
        }))
        .unwrap(),
    );
    let result = validate_business_case(&bc);
    assert!(result.is_valid);
    assert!(result.has_warning("Baseline includes benefits"));
}

// ===========================================================================
// Cashflow integrity
// ===========================================================================

#[test]
fn test_non_positive_amount_fails() {
    for amount in [Decimal::ZERO, dec!(-5)] {
        let mut bc = sample();
        bc.options[1].line_items[2].amount = amount;
        let result = validate_business_case(&bc);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "options[1].lineItems[2].amount");
    }
}

#[test]
fn test_end_month_not_after_start_fails_for_recurring_only() {
    let mut bc = sample();
    bc.options[1].line_items[0].end_month = Some(0);
    assert!(validate_business_case(&bc).is_valid, "one-time items ignore endMonth");

    bc.options[1].line_items[1].end_month = Some(1);
    let result = validate_business_case(&bc);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].field, "options[1].lineItems[1].endMonth");
}

// ===========================================================================
// Risks, KPIs, assumptions
// ===========================================================================

#[test]
fn test_option_risk_without_owner_fails() {
    let mut bc = sample();
    bc.options[1].option_specific_risks[0].owner.clear();
    let result = validate_business_case(&bc);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].field, "options[1].optionSpecificRisks[0].owner");
}

#[test]
fn test_project_risk_without_mitigation_fails() {
    let mut bc = sample();
    bc.project_risks[0].entry.mitigation = "   ".into();
    let result = validate_business_case(&bc);
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].field, "projectRisks[0].mitigation");
}

#[test]
fn test_very_high_residual_under_low_tolerance_warns() {
    let mut bc = sample();
    bc.project_risks[0].entry.residual_risk = Some(RiskLevel5::VeryHigh);
    assert!(!validate_business_case(&bc).has_warning("Residual Very High"));

    bc.organizational.risk_tolerance_level = RiskTolerance::Low;
    let result = validate_business_case(&bc);
    assert!(result.is_valid);
    assert!(result.has_warning("Residual Very High"));
}

#[test]
fn test_incomplete_kpi_warns_per_field() {
    let mut bc = sample();
    bc.strategic.success_kpis = vec![serde_json::from_value(json!({
        "id": "k1", "name": "Invoices per hour", "target": "40"
    }))
    .unwrap()];
    let result = validate_business_case(&bc);
    assert!(result.is_valid);
    let fields: Vec<&str> = result
        .warnings
        .iter()
        .filter(|w| w.field.starts_with("successKPIs"))
        .map(|w| w.field.as_str())
        .collect();
    assert_eq!(fields, vec!["successKPIs[0].baseline", "successKPIs[0].owner"]);
}

// ===========================================================================
// Thresholds and investment criteria
// ===========================================================================

#[test]
fn test_capex_over_threshold_recommends_npv() {
    let mut bc = sample();
    bc.options[1].line_items[0].amount = dec!(60000);
    let result = validate_business_case(&bc);
    assert_eq!(result.warnings[0].field, "financial.requireNPV");
    assert_eq!(result.warnings[1].field, "financial.requireMIRR");
}

#[test]
fn test_baseline_capex_ignored_for_thresholds() {
    let mut bc = sample();
    bc.options[0].line_items.push(
        serde_json::from_value(json!({
            "kind": "cost", "category": "capex", "amount": 90000, "recurrence": "one-time"
        }))
        .unwrap(),
    );
    let result = validate_business_case(&bc);
    assert!(!result.warnings.iter().any(|w| w.field.starts_with("financial.")));
}

#[test]
fn test_investment_criteria_need_calc() {
    let mut bc = sample();
    bc.financial.minimum_roi = Some(dec!(500));
    bc.financial.maximum_payback_months = Some(6);
    assert!(!validate_business_case(&bc).has_warning("below the minimum"));

    let analyzed = analyze_business_case(&bc).unwrap();
    let result = validate_business_case(&analyzed);
    assert!(result.is_valid);
    assert!(result.has_warning("below the minimum of 500%"));
    assert!(result.has_warning("Payback of 12 months exceeds the maximum of 6 months."));
}

#[test]
fn test_analyze_and_validate_reports_baseline_count_as_finding() {
    let mut bc = sample();
    bc.options[1].is_baseline = true;
    let result = analyze_and_validate(&bc).unwrap();
    assert!(!result.is_valid);
    assert!(result.has_error_code(CODE_BASELINE_COUNT));
}

#[test]
fn test_analyze_and_validate_applies_investment_criteria() {
    let mut bc = sample();
    bc.financial.minimum_roi = Some(dec!(500));
    let result = analyze_and_validate(&bc).unwrap();
    assert!(result.is_valid);
    assert!(result.has_warning("ROI of 316.5% is below the minimum of 500%."));
}

// ===========================================================================
// Pipeline
// ===========================================================================

#[test]
fn test_pipeline_reports_validation_alongside_model() {
    let mut bc = sample();
    bc.options[1].line_items[3].amount = Decimal::ZERO;
    let out = evaluate_business_case(&bc, &AnalysisOptions::default()).unwrap();
    assert!(!out.result.validation.is_valid);
    assert!(out.result.model.options.iter().all(|o| o.calc.is_some()));
    assert!(out.methodology.contains("MIRR"));
}
