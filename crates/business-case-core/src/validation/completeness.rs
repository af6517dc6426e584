use super::result::ValidationResult;
use crate::model::{
    Assumption, Kpi, ProjectOption, ProjectRisk, RiskEntry, RiskLevel5, RiskTolerance,
    ValidationStatus,
};

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn require_ownership(r: &mut ValidationResult, path: &str, risk: &RiskEntry) {
    if blank(&risk.mitigation) {
        r.error(format!("{path}.mitigation"), "Mitigation is required", None);
    }
    if blank(&risk.owner) {
        r.error(format!("{path}.owner"), "Owner is required", None);
    }
}

/// Every project and option-specific risk needs a mitigation and an owner.
/// Under low tolerance, a residual "Very High" risk is flagged once.
pub fn validate_risk_assessment(
    project_risks: &[ProjectRisk],
    options: &[ProjectOption],
    tolerance: RiskTolerance,
) -> ValidationResult {
    let mut r = ValidationResult::new();

    for (i, risk) in project_risks.iter().enumerate() {
        require_ownership(&mut r, &format!("projectRisks[{i}]"), &risk.entry);
    }
    for (i, option) in options.iter().enumerate() {
        for (j, risk) in option.option_specific_risks.iter().enumerate() {
            require_ownership(&mut r, &format!("options[{i}].optionSpecificRisks[{j}]"), risk);
        }
    }

    if tolerance == RiskTolerance::Low {
        let very_high = project_risks
            .iter()
            .map(|p| &p.entry)
            .chain(options.iter().flat_map(|o| &o.option_specific_risks))
            .any(|e| e.residual_risk == Some(RiskLevel5::VeryHigh));
        if very_high {
            r.warn(
                "projectRisks",
                "Residual Very High risks present under Low tolerance.",
                Some("Add further mitigation or escalate for risk acceptance."),
            );
        }
    }
    r
}

pub fn validate_kpi_completeness(kpis: &[Kpi]) -> ValidationResult {
    let mut r = ValidationResult::new();
    for (i, kpi) in kpis.iter().enumerate() {
        if blank(&kpi.baseline) {
            r.warn(format!("successKPIs[{i}].baseline"), "Baseline missing", None);
        }
        if blank(&kpi.target) {
            r.warn(format!("successKPIs[{i}].target"), "Target missing", None);
        }
        if blank(&kpi.owner) {
            r.warn(format!("successKPIs[{i}].owner"), "Owner missing", None);
        }
    }
    r
}

pub fn validate_assumptions(assumptions: &[Assumption]) -> ValidationResult {
    let mut r = ValidationResult::new();
    for (i, a) in assumptions.iter().enumerate() {
        if blank(&a.validation) {
            r.warn(
                format!("keyAssumptions[{i}].validation"),
                "Add a validation method.",
                None,
            );
        }
        if a.validation_status == ValidationStatus::Pending {
            r.warn(
                format!("keyAssumptions[{i}].validationStatus"),
                "Validation pending.",
                None,
            );
        }
    }
    r
}
