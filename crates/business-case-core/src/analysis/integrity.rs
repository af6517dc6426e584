use tracing::warn;

use crate::error::BusinessCaseError;
use crate::model::BusinessCase;
use crate::BusinessCaseResult;

/// Structural preconditions for analysis: at least two options, exactly one
/// baseline, and no option without line items. A failure here is a bug in
/// whatever produced the model, so it aborts instead of becoming a
/// validation finding.
pub fn check_structure(model: &BusinessCase) -> BusinessCaseResult<()> {
    if model.options.len() < 2 {
        return reject(format!(
            "at least two options are required, found {}",
            model.options.len()
        ));
    }

    let baselines = model.baselines().count();
    if baselines != 1 {
        return reject(format!(
            "exactly one baseline option is required, found {baselines}"
        ));
    }

    if let Some(empty) = model.options.iter().find(|o| o.line_items.is_empty()) {
        return reject(format!("option '{}' has no line items", empty.id));
    }

    Ok(())
}

fn reject(reason: String) -> BusinessCaseResult<()> {
    warn!(%reason, "business case rejected before analysis");
    Err(BusinessCaseError::MalformedModel(reason))
}

/// Check that every option carries a `_calc` block produced against the
/// current financial settings. Consumers of computed results (summaries,
/// exports) call this before reading `_calc`.
pub fn ensure_analyzed(model: &BusinessCase) -> BusinessCaseResult<()> {
    check_structure(model)?;

    let horizon = model.financial.horizon_months;
    let currency = model.financial.currency;
    for option in &model.options {
        let calc = option.calc.as_ref().ok_or_else(|| {
            BusinessCaseError::MalformedModel(format!(
                "option '{}' is missing _calc; run analysis first",
                option.name
            ))
        })?;
        if calc.horizon_months != horizon {
            return Err(BusinessCaseError::MalformedModel(format!(
                "option '{}' _calc.horizonMonths ({}) != financial.horizonMonths ({horizon})",
                option.name, calc.horizon_months
            )));
        }
        if calc.currency != currency {
            return Err(BusinessCaseError::MalformedModel(format!(
                "option '{}' _calc.currency ({}) != financial.currency ({currency})",
                option.name, calc.currency
            )));
        }
    }
    Ok(())
}
