use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Months};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Cost,
    Benefit,
}

impl LineItemKind {
    /// Costs post negatively to the series, benefits positively.
    pub fn sign(&self) -> Decimal {
        match self {
            LineItemKind::Cost => Decimal::NEGATIVE_ONE,
            LineItemKind::Benefit => Decimal::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemCategory {
    Capex,
    Opex,
    Licensing,
    Maintenance,
    Compliance,
    Revenue,
    CostSavings,
    RiskAvoidance,
    Productivity,
}

impl LineItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItemCategory::Capex => "capex",
            LineItemCategory::Opex => "opex",
            LineItemCategory::Licensing => "licensing",
            LineItemCategory::Maintenance => "maintenance",
            LineItemCategory::Compliance => "compliance",
            LineItemCategory::Revenue => "revenue",
            LineItemCategory::CostSavings => "cost_savings",
            LineItemCategory::RiskAvoidance => "risk_avoidance",
            LineItemCategory::Productivity => "productivity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    OneTime,
    Monthly,
    Quarterly,
    Annual,
}

impl Recurrence {
    /// Months between occurrences; `None` for one-time items.
    pub fn step_months(&self) -> Option<Months> {
        match self {
            Recurrence::OneTime => None,
            Recurrence::Monthly => Some(1),
            Recurrence::Quarterly => Some(3),
            Recurrence::Annual => Some(12),
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::OneTime)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceBehavior {
    #[serde(default = "ends_at_horizon_default")]
    pub ends_at_horizon: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_occurrences: Option<u32>,
}

fn ends_at_horizon_default() -> bool {
    true
}

/// A single cost or benefit, possibly recurring, owned by an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub kind: LineItemKind,
    pub category: LineItemCategory,
    pub amount: Money,
    pub recurrence: Recurrence,
    #[serde(default)]
    pub start_month: Months,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_month: Option<Months>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_behavior: Option<RecurrenceBehavior>,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LineItem {
    pub fn is_cost(&self) -> bool {
        self.kind == LineItemKind::Cost
    }

    pub fn is_benefit(&self) -> bool {
        self.kind == LineItemKind::Benefit
    }
}
