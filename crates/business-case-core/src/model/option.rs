use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::risk::RiskEntry;
use crate::types::{Currency, Money, Months, Pct};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImplementationComplexity {
    Low,
    #[default]
    Medium,
    High,
}

/// One alternative in the business case, including the "do nothing" baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_baseline: bool,
    #[serde(default)]
    pub implementation_complexity: ImplementationComplexity,
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub option_specific_risks: Vec<RiskEntry>,
    /// Computed block, replaced wholesale on every analysis pass.
    #[serde(rename = "_calc", default, skip_serializing_if = "Option::is_none")]
    pub calc: Option<OptionCalc>,
}

/// Per-option results attached by the analyzer.
///
/// `None` metrics serialize as `null`: ROI without costs, payback never
/// reached, NPV/MIRR not requested or not computable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCalc {
    pub horizon_months: Months,
    pub currency: Currency,
    pub total_costs: Money,
    pub total_benefits: Money,
    pub net_benefit: Money,
    pub roi_pct: Option<Pct>,
    pub payback_months: Option<Months>,
    pub discounted_payback_months: Option<Months>,
    pub npv: Option<Money>,
    pub mirr_pct: Option<Pct>,
    pub benefit_cost_ratio: Option<Money>,
    pub profitability_index: Option<Money>,
    pub break_even_month: Option<Months>,
    /// Discount rate actually used for NPV (real rate when inflation applies).
    pub effective_discount_rate_pct: Pct,
    pub max_drawdown: Money,
    pub peak_cash_flow: Money,
    pub warnings: Vec<String>,
    pub has_irregular_cash_flow: bool,
    pub sign_changes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cash_flow: Option<Vec<Money>>,
}
