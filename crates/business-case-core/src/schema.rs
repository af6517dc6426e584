//! Boundary layer: turn caller input into a model the engine can trust.
//!
//! Rates are converted to the 0–100 convention here and nowhere else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BusinessCaseError;
use crate::model::{BusinessCase, MAX_HORIZON_MONTHS, MIN_HORIZON_MONTHS, SCHEMA_VERSION};
use crate::types::Pct;
use crate::BusinessCaseResult;

/// Scale the caller used for every rate field in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateScale {
    /// 8 means 8%.
    #[default]
    Percent,
    /// 0.08 means 8%.
    Fraction,
}

pub fn parse_business_case(json: &str) -> BusinessCaseResult<BusinessCase> {
    Ok(serde_json::from_str(json)?)
}

pub fn apply_rate_scale(bc: &mut BusinessCase, scale: RateScale) {
    if scale == RateScale::Fraction {
        bc.financial.rates_from_fractions();
        bc.organizational.rates_from_fractions();
    }
}

/// Clamp the horizon to [6, 120] months and the discount rate to [0, 100].
pub fn normalize(bc: &mut BusinessCase) {
    let fin = &mut bc.financial;

    let horizon = fin.horizon_months.clamp(MIN_HORIZON_MONTHS, MAX_HORIZON_MONTHS);
    if horizon != fin.horizon_months {
        debug!(from = fin.horizon_months, to = horizon, "horizon clamped");
        fin.horizon_months = horizon;
    }

    let rate = fin.discount_rate_pct.clamp(Decimal::ZERO, dec!(100));
    if rate != fin.discount_rate_pct {
        debug!(from = %fin.discount_rate_pct, to = %rate, "discount rate clamped");
        fin.discount_rate_pct = rate;
    }
}

fn check_pct(field: &str, value: Option<Pct>) -> BusinessCaseResult<()> {
    match value {
        Some(v) if v < Decimal::ZERO || v > dec!(100) => Err(BusinessCaseError::invalid(
            field,
            format!("{v} is outside [0, 100]"),
        )),
        _ => Ok(()),
    }
}

/// Reject input that no analysis could make sense of.
///
/// Business-rule problems such as non-positive amounts are left to the
/// validation engine so they come back as data, not as an error.
pub fn check_schema(bc: &BusinessCase) -> BusinessCaseResult<()> {
    if bc.schema_version != SCHEMA_VERSION {
        return Err(BusinessCaseError::invalid(
            "schemaVersion",
            format!("expected \"{SCHEMA_VERSION}\", got \"{}\"", bc.schema_version),
        ));
    }

    let fin = &bc.financial;
    check_pct("financial.discountRatePct", Some(fin.discount_rate_pct))?;
    check_pct("financial.taxRatePct", fin.tax_rate_pct)?;
    check_pct("financial.inflationRatePct", fin.inflation_rate_pct)?;
    check_pct("financial.riskContingencyPct", fin.risk_contingency_pct)?;

    let org = &bc.organizational;
    check_pct("organizational.financeRatePct", Some(org.finance_rate_pct))?;
    check_pct("organizational.reinvestRatePct", Some(org.reinvest_rate_pct))?;
    check_pct("organizational.defaultDiscountRate", Some(org.default_discount_rate))?;
    for (field, value) in [
        ("organizational.npvThreshold", org.npv_threshold),
        ("organizational.irrThreshold", org.irr_threshold),
    ] {
        if value < Decimal::ZERO {
            return Err(BusinessCaseError::invalid(field, "must not be negative"));
        }
    }
    org.risk_matrix.validate()?;

    for (i, option) in bc.options.iter().enumerate() {
        for (j, item) in option.line_items.iter().enumerate() {
            let occurrences = item
                .recurrence_behavior
                .as_ref()
                .and_then(|b| b.total_occurrences);
            if occurrences == Some(0) {
                return Err(BusinessCaseError::invalid(
                    format!("options[{i}].lineItems[{j}].recurrenceBehavior.totalOccurrences"),
                    "must be at least 1",
                ));
            }
        }
    }
    Ok(())
}

/// Scale, clamp and check in one pass.
pub fn prepare(mut bc: BusinessCase, scale: RateScale) -> BusinessCaseResult<BusinessCase> {
    apply_rate_scale(&mut bc, scale);
    normalize(&mut bc);
    check_schema(&bc)?;
    Ok(bc)
}
