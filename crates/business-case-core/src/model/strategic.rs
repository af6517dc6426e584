use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiPriority {
    Critical,
    #[default]
    Important,
    #[serde(rename = "Nice-to-Have")]
    NiceToHave,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementFrequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

/// Success KPI. Text fields default to empty so incomplete KPIs survive
/// parsing and surface as validation warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub baseline: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub measurement_method: String,
    #[serde(default)]
    pub priority: KpiPriority,
    #[serde(default)]
    pub measurement_frequency: MeasurementFrequency,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub baseline_validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_validation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_validation_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssumptionImpact {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    #[default]
    Pending,
    Validated,
    Invalidated,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumption {
    #[serde(default)]
    pub id: String,
    pub assumption: String,
    #[serde(default)]
    pub impact: AssumptionImpact,
    /// How the assumption will be checked.
    #[serde(default)]
    pub validation: String,
    #[serde(default)]
    pub validation_status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintType {
    Scope,
    Time,
    Budget,
    Resource,
    Regulatory,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    #[serde(rename = "type")]
    pub constraint_type: ConstraintType,
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicContext {
    #[serde(default)]
    pub business_need: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_description: Option<String>,
    #[serde(default)]
    pub strategic_alignment: Vec<String>,
    #[serde(default)]
    pub key_assumptions: Vec<Assumption>,
    #[serde(rename = "successKPIs", default)]
    pub success_kpis: Vec<Kpi>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}
