use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Pct};

/// Simple ROI = (benefits − costs) / costs × 100. `None` when costs ≤ 0 or
/// the ratio is not representable.
pub fn calculate_roi(costs: Money, benefits: Money) -> Option<Pct> {
    if costs <= Decimal::ZERO {
        return None;
    }
    benefits
        .checked_sub(costs)?
        .checked_div(costs)?
        .checked_mul(dec!(100))
}

/// Benefits per unit of cost. `None` when there are no costs.
pub fn benefit_cost_ratio(costs: Money, benefits: Money) -> Option<Decimal> {
    if costs <= Decimal::ZERO {
        return None;
    }
    benefits.checked_div(costs)
}

/// (NPV + costs) / costs. Only defined when NPV was computed and costs > 0.
pub fn profitability_index(npv: Option<Money>, costs: Money) -> Option<Decimal> {
    let npv = npv?;
    if costs <= Decimal::ZERO {
        return None;
    }
    npv.checked_add(costs)?.checked_div(costs)
}
