use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::business_case::ProjectType;
use super::line_item::LineItemCategory;
use crate::risk::matrix::RiskMatrix;
use crate::types::{pct_from_fraction, Currency, Money, Months, Pct};

pub const MIN_HORIZON_MONTHS: Months = 6;
pub const MAX_HORIZON_MONTHS: Months = 120;

/// Projection settings shared by every option in one business case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSettings {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_horizon")]
    pub horizon_months: Months,
    #[serde(default = "default_rate_pct")]
    pub discount_rate_pct: Pct,
    #[serde(rename = "minimumROI", default, skip_serializing_if = "Option::is_none")]
    pub minimum_roi: Option<Pct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_payback_months: Option<Months>,
    #[serde(rename = "requireNPV", default)]
    pub require_npv: bool,
    #[serde(rename = "requireMIRR", default)]
    pub require_mirr: bool,
    #[serde(default)]
    pub include_taxes: bool,
    #[serde(default)]
    pub include_inflation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_pct: Option<Pct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_rate_pct: Option<Pct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_contingency_pct: Option<Pct>,
}

fn default_horizon() -> Months {
    36
}

fn default_rate_pct() -> Pct {
    dec!(8)
}

fn default_threshold() -> Money {
    dec!(50000)
}

impl Default for FinancialSettings {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            horizon_months: default_horizon(),
            discount_rate_pct: default_rate_pct(),
            minimum_roi: None,
            maximum_payback_months: None,
            require_npv: false,
            require_mirr: false,
            include_taxes: false,
            include_inflation: false,
            tax_rate_pct: None,
            inflation_rate_pct: None,
            risk_contingency_pct: None,
        }
    }
}

impl FinancialSettings {
    /// Rescale every rate field from a 0–1 fraction to the 0–100 convention.
    /// Call exactly once, at the boundary, when the caller declares fractions.
    pub fn rates_from_fractions(&mut self) {
        self.discount_rate_pct = pct_from_fraction(self.discount_rate_pct);
        self.minimum_roi = self.minimum_roi.map(pct_from_fraction);
        self.tax_rate_pct = self.tax_rate_pct.map(pct_from_fraction);
        self.inflation_rate_pct = self.inflation_rate_pct.map(pct_from_fraction);
        self.risk_contingency_pct = self.risk_contingency_pct.map(pct_from_fraction);
    }

    /// Flat tax rate applied to benefits, when taxes are switched on.
    pub fn effective_tax_rate(&self) -> Option<Pct> {
        if self.include_taxes {
            self.tax_rate_pct
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// How a recurring item without an explicit `recurrenceBehavior` ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceEnd {
    #[default]
    Horizon,
    Explicit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineRequirement {
    pub required_categories: Vec<LineItemCategory>,
    #[serde(default)]
    pub description: String,
}

/// Organizational policy: thresholds, MIRR rates, risk matrix and baseline rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalSettings {
    #[serde(default)]
    pub requires_regulatory: bool,
    #[serde(default)]
    pub default_currency: Currency,
    #[serde(default = "default_rate_pct")]
    pub default_discount_rate: Pct,
    #[serde(default = "default_threshold")]
    pub npv_threshold: Money,
    #[serde(default = "default_threshold")]
    pub irr_threshold: Money,
    #[serde(default)]
    pub mandatory_approvers: Vec<String>,
    #[serde(default)]
    pub risk_tolerance_level: RiskTolerance,
    #[serde(default)]
    pub risk_matrix: RiskMatrix,
    #[serde(default = "default_rate_pct")]
    pub finance_rate_pct: Pct,
    #[serde(default = "default_rate_pct")]
    pub reinvest_rate_pct: Pct,
    #[serde(default)]
    pub default_recurrence_end: RecurrenceEnd,
    #[serde(default)]
    pub baseline_requirements: BTreeMap<ProjectType, BaselineRequirement>,
}

impl Default for OrganizationalSettings {
    fn default() -> Self {
        Self {
            requires_regulatory: false,
            default_currency: Currency::default(),
            default_discount_rate: default_rate_pct(),
            npv_threshold: default_threshold(),
            irr_threshold: default_threshold(),
            mandatory_approvers: Vec::new(),
            risk_tolerance_level: RiskTolerance::default(),
            risk_matrix: RiskMatrix::default(),
            finance_rate_pct: default_rate_pct(),
            reinvest_rate_pct: default_rate_pct(),
            default_recurrence_end: RecurrenceEnd::default(),
            baseline_requirements: default_baseline_requirements(),
        }
    }
}

impl OrganizationalSettings {
    /// Rescale the rate fields from 0–1 fractions to the 0–100 convention.
    pub fn rates_from_fractions(&mut self) {
        self.default_discount_rate = pct_from_fraction(self.default_discount_rate);
        self.finance_rate_pct = pct_from_fraction(self.finance_rate_pct);
        self.reinvest_rate_pct = pct_from_fraction(self.reinvest_rate_pct);
    }

    pub fn baseline_requirement(&self, project_type: ProjectType) -> Option<&BaselineRequirement> {
        self.baseline_requirements.get(&project_type)
    }
}

/// Status-quo cost categories every baseline should carry, per project type.
pub fn default_baseline_requirements() -> BTreeMap<ProjectType, BaselineRequirement> {
    use LineItemCategory::*;

    let rule = |cats: &[LineItemCategory], description: &str| BaselineRequirement {
        required_categories: cats.to_vec(),
        description: description.to_string(),
    };

    BTreeMap::from([
        (
            ProjectType::NewDevelopment,
            rule(
                &[Maintenance, Opex, RiskAvoidance],
                "New projects must show ongoing operational costs and avoided risks",
            ),
        ),
        (
            ProjectType::Infrastructure,
            rule(
                &[Maintenance, Opex, Compliance],
                "Infrastructure projects must include maintenance and compliance costs",
            ),
        ),
        (
            ProjectType::ProcessImprovement,
            rule(
                &[Opex, Productivity],
                "Process improvements must show current operational inefficiencies",
            ),
        ),
        (
            ProjectType::Compliance,
            rule(
                &[Compliance, RiskAvoidance],
                "Compliance projects must show regulatory costs and avoided penalties",
            ),
        ),
        (
            ProjectType::Maintenance,
            rule(
                &[Maintenance, RiskAvoidance],
                "Maintenance projects must show current maintenance burden and failure risks",
            ),
        ),
    ])
}
