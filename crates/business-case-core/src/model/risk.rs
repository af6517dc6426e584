use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Five-level probability/impact scale shared by every risk entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel5 {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel5 {
    pub const ALL: [RiskLevel5; 5] = [
        RiskLevel5::VeryLow,
        RiskLevel5::Low,
        RiskLevel5::Medium,
        RiskLevel5::High,
        RiskLevel5::VeryHigh,
    ];

    /// Row/column index into a 5×5 risk matrix (Very Low = 0 … Very High = 4).
    pub fn index(&self) -> usize {
        match self {
            RiskLevel5::VeryLow => 0,
            RiskLevel5::Low => 1,
            RiskLevel5::Medium => 2,
            RiskLevel5::High => 3,
            RiskLevel5::VeryHigh => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel5::VeryLow => "Very Low",
            RiskLevel5::Low => "Low",
            RiskLevel5::Medium => "Medium",
            RiskLevel5::High => "High",
            RiskLevel5::VeryHigh => "Very High",
        }
    }
}

impl std::str::FromStr for RiskLevel5 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "verylow" => Ok(RiskLevel5::VeryLow),
            "low" => Ok(RiskLevel5::Low),
            "medium" => Ok(RiskLevel5::Medium),
            "high" => Ok(RiskLevel5::High),
            "veryhigh" => Ok(RiskLevel5::VeryHigh),
            _ => Err(format!("unknown risk level '{s}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Financial,
    Technical,
    Operational,
    Regulatory,
    Market,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    #[default]
    Identified,
    Mitigating,
    Monitoring,
    Closed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStrategy {
    Avoid,
    #[default]
    Mitigate,
    Transfer,
    Accept,
}

/// A risk attached to a single option or, via [`ProjectRisk`], to the project.
///
/// Mitigation and owner deserialize as empty strings when absent so the
/// validation engine can report them instead of the parser rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    #[serde(default)]
    pub id: String,
    pub statement: String,
    pub category: RiskCategory,
    pub probability: RiskLevel5,
    pub impact: RiskLevel5,
    #[serde(default)]
    pub mitigation: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: RiskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_risk: Option<RiskLevel5>,
    /// Derived by the analyzer; any incoming value is overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRisk {
    #[serde(flatten)]
    pub entry: RiskEntry,
    #[serde(default = "affects_all_default")]
    pub affects_all_options: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contingency_amount: Option<Money>,
    #[serde(default)]
    pub response_strategy: ResponseStrategy,
    #[serde(default)]
    pub response_owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_deadline: Option<String>,
}

fn affects_all_default() -> bool {
    true
}
