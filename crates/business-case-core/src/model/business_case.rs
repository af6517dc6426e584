use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::option::ProjectOption;
use super::risk::ProjectRisk;
use super::settings::{FinancialSettings, OrganizationalSettings};
use super::strategic::StrategicContext;

pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    NewDevelopment,
    Infrastructure,
    #[default]
    ProcessImprovement,
    Compliance,
    Maintenance,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::NewDevelopment => "new_development",
            ProjectType::Infrastructure => "infrastructure",
            ProjectType::ProcessImprovement => "process_improvement",
            ProjectType::Compliance => "compliance",
            ProjectType::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Review,
    Approved,
    Rejected,
    OnHold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalLevel {
    #[default]
    Required,
    Advisory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default)]
    pub approval_level: ApprovalLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(default)]
    pub current_status: WorkflowStatus,
    #[serde(default)]
    pub approvals: Vec<Approval>,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Passed,
    Failed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub check_type: String,
    pub status: ComplianceStatus,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The full record exchanged with the form-mapping and document layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCase {
    #[serde(default = "schema_version_default")]
    pub schema_version: String,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub strategic: StrategicContext,
    #[serde(default)]
    pub financial: FinancialSettings,
    #[serde(default)]
    pub organizational: OrganizationalSettings,
    pub options: Vec<ProjectOption>,
    #[serde(default)]
    pub project_risks: Vec<ProjectRisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_rationale: Option<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_financial_review: Option<String>,
    #[serde(default)]
    pub compliance_checks: Vec<ComplianceCheck>,
}

fn schema_version_default() -> String {
    SCHEMA_VERSION.to_string()
}

impl BusinessCase {
    pub fn baselines(&self) -> impl Iterator<Item = &ProjectOption> {
        self.options.iter().filter(|o| o.is_baseline)
    }

    /// The single baseline, if exactly one exists.
    pub fn baseline(&self) -> Option<&ProjectOption> {
        let mut it = self.baselines();
        match (it.next(), it.next()) {
            (Some(b), None) => Some(b),
            _ => None,
        }
    }

    pub fn option(&self, id: &str) -> Option<&ProjectOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Option named by `recommendedOption`, else the first non-baseline
    /// option, else the first option. Options are never ranked by ROI here;
    /// the recommendation is a governance decision.
    pub fn recommended_option(&self) -> Option<&ProjectOption> {
        self.recommended_option
            .as_deref()
            .and_then(|id| self.option(id))
            .or_else(|| self.options.iter().find(|o| !o.is_baseline))
            .or_else(|| self.options.first())
    }
}
