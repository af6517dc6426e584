use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cashflow::count_sign_changes;
use crate::error::BusinessCaseError;
use crate::time_value::{annualize, monthly_rate, npv_monthly};
use crate::types::{Money, Pct};
use crate::BusinessCaseResult;

pub const CAVEAT_NON_UNIQUE_IRR: &str =
    "Multiple sign changes detected; IRR can be non-unique. MIRR shown.";
pub const CAVEAT_MIRR_NOT_COMPUTABLE: &str =
    "MIRR not computable (no negative cashflows or empty series).";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrResult {
    /// Annualized MIRR in percent.
    pub mirr_pct: Option<Pct>,
    pub warnings: Vec<String>,
}

/// NPV of a monthly series at an annual discount rate (percent).
///
/// With a tax rate, only positive (benefit) months are taxed; costs are not.
pub fn calculate_npv(
    cashflows: &[Money],
    discount_rate_pct: Pct,
    tax_rate_pct: Option<Pct>,
) -> BusinessCaseResult<Money> {
    let rm = monthly_rate(discount_rate_pct)?;
    match tax_rate_pct {
        Some(tax) => npv_monthly(rm, &apply_benefit_tax(cashflows, tax)),
        None => npv_monthly(rm, cashflows),
    }
}

/// Reduce positive months by a flat tax rate (percent); negative months pass through.
pub fn apply_benefit_tax(cashflows: &[Money], tax_rate_pct: Pct) -> Vec<Money> {
    let keep = Decimal::ONE - tax_rate_pct / dec!(100);
    cashflows
        .iter()
        .map(|v| if *v > Decimal::ZERO { v * keep } else { *v })
        .collect()
}

/// Modified IRR with separate finance and reinvestment rates.
///
/// Negative flows are discounted to month 0 at the finance rate, positive
/// flows compounded to month n at the reinvestment rate. Irregular series
/// still get a MIRR; only a caveat is attached.
pub fn calculate_mirr(
    cashflows: &[Money],
    finance_rate_pct: Pct,
    reinvest_rate_pct: Pct,
) -> BusinessCaseResult<MirrResult> {
    let mut warnings = Vec::new();
    if count_sign_changes(cashflows) > 1 {
        warnings.push(CAVEAT_NON_UNIQUE_IRR.to_string());
    }

    let mirr_pct = mirr_annual_pct(cashflows, finance_rate_pct, reinvest_rate_pct)?;
    if mirr_pct.is_none() {
        warnings.push(CAVEAT_MIRR_NOT_COMPUTABLE.to_string());
    }

    Ok(MirrResult { mirr_pct, warnings })
}

fn mirr_annual_pct(
    cashflows: &[Money],
    finance_rate_pct: Pct,
    reinvest_rate_pct: Pct,
) -> BusinessCaseResult<Option<Pct>> {
    let n = cashflows.len();
    if n == 0 {
        return Ok(None);
    }

    let one_plus_f = Decimal::ONE + monthly_rate(finance_rate_pct)?;
    let one_plus_r = Decimal::ONE + monthly_rate(reinvest_rate_pct)?;

    // growth[k] = (1 + rr)^k for k in 0..n
    let mut growth = Vec::with_capacity(n);
    let mut g = Decimal::ONE;
    for _ in 0..n {
        growth.push(g);
        g *= one_plus_r;
    }

    let too_large = || {
        BusinessCaseError::FinancialImpossibility(format!(
            "MIRR terminal value over {n} months exceeds the representable amount"
        ))
    };

    let mut pv_neg = Decimal::ZERO;
    let mut fv_pos = Decimal::ZERO;
    let mut discount = Decimal::ONE;
    for (t, cf) in cashflows.iter().enumerate() {
        discount *= one_plus_f;
        if *cf < Decimal::ZERO {
            pv_neg += cf / discount;
        } else if *cf > Decimal::ZERO {
            let compounded = cf.checked_mul(growth[n - (t + 1)]).ok_or_else(too_large)?;
            fv_pos = fv_pos.checked_add(compounded).ok_or_else(too_large)?;
        }
    }

    if pv_neg.is_zero() {
        return Ok(None);
    }

    let ratio = (-fv_pos).checked_div(pv_neg).ok_or_else(too_large)?;
    let monthly = if ratio.is_zero() {
        dec!(-1)
    } else {
        let exponent = Decimal::ONE / Decimal::from(n as u64);
        let root = ratio.checked_powd(exponent).ok_or_else(|| {
            BusinessCaseError::FinancialImpossibility(format!(
                "MIRR root of {ratio} over {n} months"
            ))
        })?;
        root - Decimal::ONE
    };

    Ok(Some(annualize(monthly)? * dec!(100)))
}
