//! One-line financial summaries for reports and the `compare` table.
//!
//! Percentages are always on the 0–100 scale; nothing here guesses scale
//! from magnitude.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::ensure_analyzed;
use crate::model::{BusinessCase, LineItemCategory, OptionCalc, ProjectOption};
use crate::types::{Currency, Money, Pct};
use crate::BusinessCaseResult;

const NOT_AVAILABLE: &str = "n/a";

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `12.345` → `"12.3%"`.
pub fn format_pct(pct: Pct) -> String {
    format!("{:.1}%", round(pct, 1))
}

/// Whole units with thousands separators: `-1234.5` CAD → `"-CAD 1,235"`.
pub fn format_money(amount: Money, currency: Currency) -> String {
    let whole = round(amount, 0);
    let digits = whole.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
    format!("{sign}{} {grouped}", currency.code())
}

pub fn format_ratio(ratio: Decimal) -> String {
    format!("{:.2}", round(ratio, 2))
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn category_label(category: LineItemCategory) -> &'static str {
    match category {
        LineItemCategory::Capex => "CapEx",
        LineItemCategory::Opex => "OpEx",
        LineItemCategory::Licensing => "Licensing",
        LineItemCategory::Maintenance => "Maintenance",
        LineItemCategory::Compliance => "Compliance",
        LineItemCategory::Revenue => "Revenue",
        LineItemCategory::CostSavings => "Cost Savings",
        LineItemCategory::RiskAvoidance => "Risk Avoidance",
        LineItemCategory::Productivity => "Productivity",
    }
}

/// Headline metrics only, skipping anything that was not computed.
pub fn summarize_option(calc: &OptionCalc) -> String {
    let ccy = calc.currency;
    let mut bits = Vec::new();
    if let Some(roi) = calc.roi_pct {
        bits.push(format!("ROI {}", format_pct(roi)));
    }
    if let Some(npv) = calc.npv {
        bits.push(format!("NPV {}", format_money(npv, ccy)));
    }
    if let Some(months) = calc.payback_months {
        bits.push(format!("payback {months} mo"));
    }
    if let Some(mirr) = calc.mirr_pct {
        bits.push(format!("MIRR {}", format_pct(mirr)));
    }
    if let Some(bcr) = calc.benefit_cost_ratio {
        bits.push(format!("BCR {}", format_ratio(bcr)));
    }
    bits.join(", ")
}

/// Every computed figure, totals first.
pub fn detail_option(calc: &OptionCalc) -> String {
    let ccy = calc.currency;
    let mut bits = vec![
        format!("costs {}", format_money(calc.total_costs, ccy)),
        format!("benefits {}", format_money(calc.total_benefits, ccy)),
        format!("net {}", format_money(calc.net_benefit, ccy)),
    ];
    if let Some(roi) = calc.roi_pct {
        bits.push(format!("ROI {}", format_pct(roi)));
    }
    if let Some(months) = calc.payback_months {
        bits.push(format!("payback {months} mo"));
    }
    if let Some(month) = calc.break_even_month {
        bits.push(format!("break-even {month}"));
    }
    if let Some(months) = calc.discounted_payback_months {
        bits.push(format!("discounted payback {months} mo"));
    }
    if let Some(npv) = calc.npv {
        bits.push(format!("NPV {}", format_money(npv, ccy)));
    }
    if let Some(mirr) = calc.mirr_pct {
        bits.push(format!("MIRR {}", format_pct(mirr)));
    }
    if let Some(bcr) = calc.benefit_cost_ratio {
        bits.push(format!("BCR {}", format_ratio(bcr)));
    }
    if let Some(pi) = calc.profitability_index {
        bits.push(format!("PI {}", format_ratio(pi)));
    }
    bits.join(", ")
}

/// Largest benefit categories by raw line-item amount, at most `limit`.
pub fn top_benefit_categories(option: &ProjectOption, limit: usize) -> Vec<(LineItemCategory, Money)> {
    let mut sums: BTreeMap<LineItemCategory, Money> = BTreeMap::new();
    for item in option.line_items.iter().filter(|li| li.is_benefit()) {
        *sums.entry(item.category).or_default() += item.amount.abs();
    }
    let mut ranked: Vec<_> = sums.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// One formatted row per option, in model order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSummaryRow {
    pub id: String,
    pub name: String,
    pub baseline: bool,
    pub recommended: bool,
    pub total_costs: String,
    pub total_benefits: String,
    pub net_benefit: String,
    pub roi: String,
    pub payback: String,
    pub npv: String,
    pub mirr: String,
    pub benefit_cost_ratio: String,
    pub top_benefits: String,
    /// [`summarize_option`] or, when detailed, [`detail_option`].
    pub summary: String,
}

const TOP_BENEFIT_CATEGORIES: usize = 3;

/// Summary rows for an analyzed model. Fails if any `_calc` is missing or
/// stale against the current financial settings.
pub fn option_summaries(
    model: &BusinessCase,
    detailed: bool,
) -> BusinessCaseResult<Vec<OptionSummaryRow>> {
    ensure_analyzed(model)?;

    let recommended = model.recommended_option().map(|o| o.id.as_str());
    let mut rows = Vec::with_capacity(model.options.len());
    for o in &model.options {
        let Some(calc) = o.calc.as_ref() else {
            continue;
        };
        let ccy = calc.currency;
        let top_benefits = top_benefit_categories(o, TOP_BENEFIT_CATEGORIES)
            .into_iter()
            .map(|(category, _)| category_label(category))
            .collect::<Vec<_>>();

        rows.push(OptionSummaryRow {
            id: o.id.clone(),
            name: o.name.clone(),
            baseline: o.is_baseline,
            recommended: recommended == Some(o.id.as_str()),
            total_costs: format_money(calc.total_costs, ccy),
            total_benefits: format_money(calc.total_benefits, ccy),
            net_benefit: format_money(calc.net_benefit, ccy),
            roi: or_na(calc.roi_pct.map(format_pct)),
            payback: or_na(calc.payback_months.map(|m| format!("{m} mo"))),
            npv: or_na(calc.npv.map(|v| format_money(v, ccy))),
            mirr: or_na(calc.mirr_pct.map(format_pct)),
            benefit_cost_ratio: or_na(calc.benefit_cost_ratio.map(format_ratio)),
            top_benefits: if top_benefits.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                top_benefits.join(", ")
            },
            summary: if detailed {
                detail_option(calc)
            } else {
                summarize_option(calc)
            },
        });
    }
    Ok(rows)
}
