use rust_decimal::Decimal;
use std::collections::BTreeSet;

use super::result::ValidationResult;
use crate::model::{
    BusinessCase, FinancialSettings, LineItemCategory, OrganizationalSettings, ProjectOption,
    ProjectType,
};
use crate::types::Money;

pub const CODE_BASELINE_COUNT: &str = "BASELINE_COUNT";
pub const MSG_BASELINE_RECURRING: &str =
    "Baseline should include recurring status-quo costs (maintenance/opex, etc.).";

/// Capital spend across non-baseline options, by line-item amount.
pub fn non_baseline_capex(options: &[ProjectOption]) -> Money {
    options
        .iter()
        .filter(|o| !o.is_baseline)
        .flat_map(|o| &o.line_items)
        .filter(|li| li.category == LineItemCategory::Capex)
        .map(|li| li.amount)
        .sum()
}

/// Recommend NPV / MIRR once capital spend crosses the organizational thresholds.
pub fn validate_financial_thresholds(bc: &BusinessCase) -> ValidationResult {
    let mut r = ValidationResult::new();
    let capex = non_baseline_capex(&bc.options);
    let org = &bc.organizational;

    if capex >= org.npv_threshold && !bc.financial.require_npv {
        r.warn(
            "financial.requireNPV",
            "NPV is recommended above the organizational threshold.",
            Some("Enable NPV for this analysis."),
        );
    }
    if capex >= org.irr_threshold && !bc.financial.require_mirr {
        r.warn(
            "financial.requireMIRR",
            "MIRR is recommended above the organizational threshold.",
            Some("Enable MIRR for stability on complex cashflows."),
        );
    }
    r
}

/// Exactly one baseline, and a baseline that looks like a real status quo.
pub fn validate_option_comparison(
    options: &[ProjectOption],
    project_type: ProjectType,
    org: &OrganizationalSettings,
) -> ValidationResult {
    let mut r = ValidationResult::new();
    let baselines: Vec<&ProjectOption> = options.iter().filter(|o| o.is_baseline).collect();
    let [base] = baselines.as_slice() else {
        r.error(
            "options",
            "Exactly one baseline option is required",
            Some(CODE_BASELINE_COUNT),
        );
        return r;
    };
    let field = format!("options.{}", base.id);

    if base.line_items.iter().any(|li| li.is_benefit()) {
        r.warn(
            &field,
            "Baseline includes benefits; verify this reflects the true status quo.",
            None,
        );
    }

    let has_recurring_cost = base
        .line_items
        .iter()
        .any(|li| li.is_cost() && li.recurrence.is_recurring());
    if !has_recurring_cost {
        r.warn(
            &field,
            MSG_BASELINE_RECURRING,
            Some("Add monthly/annual costs that exist today."),
        );
    }

    if let Some(rule) = org.baseline_requirement(project_type) {
        let present: BTreeSet<LineItemCategory> = base
            .line_items
            .iter()
            .filter(|li| li.is_cost())
            .map(|li| li.category)
            .collect();
        for category in &rule.required_categories {
            if !present.contains(category) {
                r.warn(
                    &field,
                    format!("Baseline missing required category: {}", category.as_str()),
                    Some(rule.description.as_str()).filter(|d| !d.is_empty()),
                );
            }
        }
    }
    r
}

/// ROI floor and payback ceiling for analyzed, non-baseline options.
/// Options without `_calc` are skipped.
pub fn validate_investment_criteria(
    options: &[ProjectOption],
    financial: &FinancialSettings,
) -> ValidationResult {
    let mut r = ValidationResult::new();
    for option in options.iter().filter(|o| !o.is_baseline) {
        let Some(calc) = option.calc.as_ref() else {
            continue;
        };

        if let (Some(min), Some(roi)) = (financial.minimum_roi, calc.roi_pct) {
            if roi < min {
                r.warn(
                    format!("options.{}.roiPct", option.id),
                    format!(
                        "ROI of {}% is below the minimum of {}%.",
                        roi.round_dp(1),
                        min.normalize()
                    ),
                    Some("Revisit scope or benefits, or document why the option is still preferred."),
                );
            }
        }

        if let Some(max) = financial.maximum_payback_months {
            match calc.payback_months {
                Some(months) if months > max => r.warn(
                    format!("options.{}.paybackMonths", option.id),
                    format!("Payback of {months} months exceeds the maximum of {max} months."),
                    None,
                ),
                None if calc.total_costs > Decimal::ZERO => r.warn(
                    format!("options.{}.paybackMonths", option.id),
                    format!(
                        "Payback is not reached within the horizon; the maximum is {max} months."
                    ),
                    None,
                ),
                _ => {}
            }
        }
    }
    r
}
