use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::BusinessCaseError;
use crate::types::{Money, Pct, Rate};
use crate::BusinessCaseResult;

const MONTHS_PER_YEAR: u64 = 12;

/// Effective monthly rate equivalent to an annual percentage:
/// (1 + r)^(1/12) − 1.
pub fn monthly_rate(annual_pct: Pct) -> BusinessCaseResult<Rate> {
    if annual_pct <= dec!(-100) {
        return Err(BusinessCaseError::invalid(
            "rate",
            "Annual rate must be greater than -100%",
        ));
    }
    if annual_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let base = Decimal::ONE + annual_pct / dec!(100);
    let exponent = Decimal::ONE / Decimal::from(MONTHS_PER_YEAR);
    let factor = base.checked_powd(exponent).ok_or_else(|| {
        BusinessCaseError::FinancialImpossibility(format!(
            "cannot convert {annual_pct}% to a monthly rate"
        ))
    })?;
    Ok(factor - Decimal::ONE)
}

/// Annual rate equivalent to a monthly rate: (1 + m)^12 − 1.
pub fn annualize(monthly: Rate) -> BusinessCaseResult<Rate> {
    let factor = (Decimal::ONE + monthly)
        .checked_powu(MONTHS_PER_YEAR)
        .ok_or_else(|| {
            BusinessCaseError::FinancialImpossibility(format!(
                "monthly rate {monthly} overflows when annualized"
            ))
        })?;
    Ok(factor - Decimal::ONE)
}

/// Net Present Value of monthly cash flows. Month `t` is discounted by
/// (1 + rm)^(t + 1), i.e. flows are treated as end-of-month.
pub fn npv_monthly(monthly: Rate, cash_flows: &[Money]) -> BusinessCaseResult<Money> {
    let one_plus_r = Decimal::ONE + monthly;
    if one_plus_r <= Decimal::ZERO {
        return Err(BusinessCaseError::invalid(
            "rate",
            "Monthly rate must be greater than -100%",
        ));
    }

    let mut result = Decimal::ZERO;
    let mut discount = Decimal::ONE;

    for cf in cash_flows {
        discount *= one_plus_r;
        if discount.is_zero() {
            return Err(BusinessCaseError::DivisionByZero {
                context: "NPV discount factor".into(),
            });
        }
        result += cf / discount;
    }

    Ok(result)
}

/// Real discount rate via the Fisher relation, both sides in percent.
pub fn real_rate_pct(nominal_pct: Pct, inflation_pct: Pct) -> BusinessCaseResult<Pct> {
    let one_plus_infl = Decimal::ONE + inflation_pct / dec!(100);
    if one_plus_infl <= Decimal::ZERO {
        return Err(BusinessCaseError::invalid(
            "inflationRatePct",
            "Inflation rate must be greater than -100%",
        ));
    }
    let one_plus_nominal = Decimal::ONE + nominal_pct / dec!(100);
    Ok((one_plus_nominal / one_plus_infl - Decimal::ONE) * dec!(100))
}
