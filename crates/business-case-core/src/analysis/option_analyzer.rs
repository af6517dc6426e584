use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::integrity::check_structure;
use crate::cashflow::generate_monthly_cashflow;
use crate::metrics::{
    apply_benefit_tax, benefit_cost_ratio, calculate_discounted_payback, calculate_mirr,
    calculate_npv, calculate_payback_period, calculate_roi, profitability_index,
};
use crate::model::{
    BusinessCase, FinancialSettings, OptionCalc, OrganizationalSettings, ProjectOption, RiskEntry,
};
use crate::risk::{compute_risk_score, RiskMatrix};
use crate::time_value::real_rate_pct;
use crate::types::Pct;
use crate::BusinessCaseResult;

pub const CAVEAT_IRREGULAR_FLOW: &str = "Irregular cashflow detected (multiple sign changes).";
pub const CAVEAT_BENEFITS_WITHOUT_COSTS: &str =
    "Option has benefits but no costs - verify this is correct.";
pub const CAVEAT_COSTS_WITHOUT_BENEFITS: &str =
    "Option has costs but no benefits - this may not be viable.";

/// Knobs that change what `_calc` carries, never how metrics are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Attach the full monthly series as `_calc.monthlyCashFlow`.
    #[serde(default)]
    pub include_monthly_series: bool,
}

/// Analyze every option and score every risk, returning a new model.
///
/// The input is not modified. Every `_calc` and `riskScore` in the output is
/// recomputed from scratch, so repeated calls on the same input are identical.
pub fn analyze_business_case(model: &BusinessCase) -> BusinessCaseResult<BusinessCase> {
    analyze_business_case_with(model, &AnalysisOptions::default())
}

pub fn analyze_business_case_with(
    model: &BusinessCase,
    opts: &AnalysisOptions,
) -> BusinessCaseResult<BusinessCase> {
    check_structure(model)?;

    let financial = &model.financial;
    let org = &model.organizational;
    let discount_pct = effective_discount_rate_pct(financial)?;

    let options = model
        .options
        .iter()
        .map(|o| analyze_option(o, financial, org, discount_pct, opts))
        .collect::<BusinessCaseResult<Vec<_>>>()?;

    let project_risks = model
        .project_risks
        .iter()
        .map(|r| {
            let mut r = r.clone();
            r.entry = scored(&r.entry, &org.risk_matrix);
            r
        })
        .collect();

    let mut analyzed = model.clone();
    analyzed.options = options;
    analyzed.project_risks = project_risks;
    Ok(analyzed)
}

/// Nominal discount rate, or the Fisher real rate when inflation is switched
/// on and a rate is supplied.
pub fn effective_discount_rate_pct(financial: &FinancialSettings) -> BusinessCaseResult<Pct> {
    match (financial.include_inflation, financial.inflation_rate_pct) {
        (true, Some(inflation)) => real_rate_pct(financial.discount_rate_pct, inflation),
        _ => Ok(financial.discount_rate_pct),
    }
}

/// Compute `_calc` for one option and score its option-specific risks.
pub fn analyze_option(
    option: &ProjectOption,
    financial: &FinancialSettings,
    org: &OrganizationalSettings,
    discount_pct: Pct,
    opts: &AnalysisOptions,
) -> BusinessCaseResult<ProjectOption> {
    let cf = generate_monthly_cashflow(&option.line_items, financial.horizon_months, org)?;
    let costs = cf.totals.costs;
    let benefits = cf.totals.benefits;

    let roi_pct = calculate_roi(costs, benefits);
    let payback = calculate_payback_period(&cf.series);

    let (npv, discounted_payback_months) = if financial.require_npv {
        let tax = financial.effective_tax_rate();
        let npv = calculate_npv(&cf.series, discount_pct, tax)?;
        let discounted = match tax {
            Some(t) => calculate_discounted_payback(&apply_benefit_tax(&cf.series, t), discount_pct)?,
            None => calculate_discounted_payback(&cf.series, discount_pct)?,
        };
        (Some(npv), discounted)
    } else {
        (None, None)
    };

    let (mirr_pct, mut warnings) = if financial.require_mirr {
        let res = calculate_mirr(&cf.series, org.finance_rate_pct, org.reinvest_rate_pct)?;
        (res.mirr_pct, res.warnings)
    } else {
        (None, Vec::new())
    };

    if cf.metadata.has_irregular_flow {
        warnings.push(CAVEAT_IRREGULAR_FLOW.to_string());
    }
    if costs.is_zero() && benefits > Decimal::ZERO {
        warnings.push(CAVEAT_BENEFITS_WITHOUT_COSTS.to_string());
    }
    if costs > Decimal::ZERO && benefits.is_zero() {
        warnings.push(CAVEAT_COSTS_WITHOUT_BENEFITS.to_string());
    }

    debug!(
        option = %option.id,
        total_costs = %costs,
        total_benefits = %benefits,
        sign_changes = cf.metadata.sign_changes,
        caveats = warnings.len(),
        "option analyzed"
    );

    let calc = OptionCalc {
        horizon_months: financial.horizon_months,
        currency: financial.currency,
        total_costs: costs,
        total_benefits: benefits,
        net_benefit: cf.totals.net,
        roi_pct,
        payback_months: payback.months,
        discounted_payback_months,
        npv,
        mirr_pct,
        benefit_cost_ratio: benefit_cost_ratio(costs, benefits),
        profitability_index: profitability_index(npv, costs),
        break_even_month: payback.break_even_month,
        effective_discount_rate_pct: discount_pct,
        max_drawdown: cf.metadata.max_drawdown,
        peak_cash_flow: cf.metadata.peak_cash_flow,
        warnings,
        has_irregular_cash_flow: cf.metadata.has_irregular_flow,
        sign_changes: cf.metadata.sign_changes,
        monthly_cash_flow: opts.include_monthly_series.then(|| cf.series.clone()),
    };

    let mut analyzed = option.clone();
    analyzed.option_specific_risks = option
        .option_specific_risks
        .iter()
        .map(|r| scored(r, &org.risk_matrix))
        .collect();
    analyzed.calc = Some(calc);
    Ok(analyzed)
}

fn scored(risk: &RiskEntry, matrix: &RiskMatrix) -> RiskEntry {
    let mut r = risk.clone();
    r.risk_score = Some(compute_risk_score(r.probability, r.impact, matrix));
    r
}
