use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time_value::monthly_rate;
use crate::types::{Money, Months, Pct};
use crate::BusinessCaseResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaybackResult {
    pub months: Option<Months>,
    pub break_even_month: Option<Months>,
    pub discounted_payback: Option<Months>,
}

/// First month index at which the running cumulative sum reaches zero.
///
/// The same index is reported as the break-even month. Discounted payback is
/// left empty here; see [`calculate_discounted_payback`].
pub fn calculate_payback_period(cashflows: &[Money]) -> PaybackResult {
    let month = first_non_negative_cumulative(cashflows.iter().copied());
    PaybackResult {
        months: month,
        break_even_month: month,
        discounted_payback: None,
    }
}

/// Payback on the discounted series, using the NPV convention: month `t` is
/// discounted by (1 + rm)^(t + 1) with rm the effective monthly rate.
pub fn calculate_discounted_payback(
    cashflows: &[Money],
    discount_rate_pct: Pct,
) -> BusinessCaseResult<Option<Months>> {
    let one_plus_r = Decimal::ONE + monthly_rate(discount_rate_pct)?;
    let mut discount = Decimal::ONE;
    let discounted = cashflows.iter().map(|cf| {
        discount *= one_plus_r;
        cf / discount
    });
    Ok(first_non_negative_cumulative(discounted))
}

fn first_non_negative_cumulative(flows: impl Iterator<Item = Money>) -> Option<Months> {
    let mut cumulative = Decimal::ZERO;
    for (i, cf) in flows.enumerate() {
        cumulative += cf;
        if cumulative >= Decimal::ZERO {
            return Some(i as Months);
        }
    }
    None
}
