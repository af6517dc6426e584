use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::recurrence::occurrence_months;
use crate::error::BusinessCaseError;
use crate::model::{LineItem, OrganizationalSettings};
use crate::types::{Money, Months};
use crate::BusinessCaseResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowTotals {
    /// Sum of the negative months, as a positive amount.
    pub costs: Money,
    /// Sum of the positive months.
    pub benefits: Money,
    pub net: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowMetadata {
    pub sign_changes: u32,
    pub has_irregular_flow: bool,
    /// Deepest cumulative deficit, as a positive amount.
    pub max_drawdown: Money,
    /// Largest single-month net inflow (zero if none).
    pub peak_cash_flow: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    /// Net signed value per month over [0, horizon).
    pub series: Vec<Money>,
    pub totals: CashflowTotals,
    pub metadata: CashflowMetadata,
}

/// Expand line items into a signed monthly series over the horizon.
///
/// Costs post negatively and benefits positively. Postings at or beyond the
/// horizon are dropped without error. Totals are taken from the netted
/// months: a negative month adds to costs, a positive month to benefits.
pub fn generate_monthly_cashflow(
    line_items: &[LineItem],
    horizon_months: Months,
    org: &OrganizationalSettings,
) -> BusinessCaseResult<MonthlyCashflow> {
    let mut series = vec![Decimal::ZERO; horizon_months as usize];

    for item in line_items {
        let months = occurrence_months(item, horizon_months, org.default_recurrence_end);
        if months.is_empty() {
            trace!(
                item = %item.id,
                start_month = item.start_month,
                horizon_months,
                "line item posts nothing inside the horizon"
            );
            continue;
        }

        let posting = item.amount * item.kind.sign();
        for m in months {
            let slot = &mut series[m as usize];
            *slot = slot
                .checked_add(posting)
                .ok_or_else(|| overflow(&format!("month {m} of line item '{}'", item.id)))?;
        }
    }

    let mut costs = Decimal::ZERO;
    let mut benefits = Decimal::ZERO;
    let mut cumulative = Decimal::ZERO;
    let mut trough = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    for v in &series {
        if *v < Decimal::ZERO {
            costs = costs.checked_sub(*v).ok_or_else(|| overflow("total costs"))?;
        } else {
            benefits = benefits.checked_add(*v).ok_or_else(|| overflow("total benefits"))?;
        }
        peak = peak.max(*v);
        cumulative = cumulative
            .checked_add(*v)
            .ok_or_else(|| overflow("cumulative cashflow"))?;
        trough = trough.min(cumulative);
    }

    let sign_changes = count_sign_changes(&series);

    Ok(MonthlyCashflow {
        totals: CashflowTotals {
            costs,
            benefits,
            net: benefits - costs,
        },
        metadata: CashflowMetadata {
            sign_changes,
            has_irregular_flow: sign_changes > 1,
            max_drawdown: trough.abs(),
            peak_cash_flow: peak,
        },
        series,
    })
}

fn overflow(what: &str) -> BusinessCaseError {
    BusinessCaseError::FinancialImpossibility(format!("{what} exceeds the representable amount"))
}

/// Number of sign flips in the series, ignoring zero months.
pub fn count_sign_changes(series: &[Money]) -> u32 {
    let mut previous: Option<bool> = None;
    let mut changes = 0;
    for v in series.iter().filter(|v| !v.is_zero()) {
        let negative = v.is_sign_negative();
        if let Some(prev) = previous {
            if prev != negative {
                changes += 1;
            }
        }
        previous = Some(negative);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Confidence, LineItemCategory, LineItemKind, Recurrence, RecurrenceBehavior};
    use rust_decimal_macros::dec;

    fn line(kind: LineItemKind, amount: Money, recurrence: Recurrence, start: Months) -> LineItem {
        LineItem {
            id: format!("{kind:?}-{start}"),
            label: String::new(),
            kind,
            category: match kind {
                LineItemKind::Cost => LineItemCategory::Opex,
                LineItemKind::Benefit => LineItemCategory::Revenue,
            },
            amount,
            recurrence,
            start_month: start,
            end_month: None,
            recurrence_behavior: Some(RecurrenceBehavior {
                ends_at_horizon: true,
                total_occurrences: None,
            }),
            confidence: Confidence::Medium,
            notes: None,
        }
    }

    #[test]
    fn test_series_length_matches_horizon() {
        let org = OrganizationalSettings::default();
        for h in [6u32, 12, 37, 120] {
            let cf = generate_monthly_cashflow(&[], h, &org).unwrap();
            assert_eq!(cf.series.len(), h as usize);
        }
    }

    #[test]
    fn test_one_time_cost_posts_at_start() {
        let org = OrganizationalSettings::default();
        let items = [line(LineItemKind::Cost, dec!(500), Recurrence::OneTime, 2)];
        let cf = generate_monthly_cashflow(&items, 6, &org).unwrap();
        assert_eq!(cf.series, vec![dec!(0), dec!(0), dec!(-500), dec!(0), dec!(0), dec!(0)]);
        assert_eq!(cf.totals.costs, dec!(500));
        assert_eq!(cf.metadata.max_drawdown, dec!(500));
        assert_eq!(cf.metadata.peak_cash_flow, dec!(0));
    }

    #[test]
    fn test_totals_net_within_a_month() {
        let org = OrganizationalSettings::default();
        let items = [
            line(LineItemKind::Cost, dec!(100), Recurrence::Monthly, 0),
            line(LineItemKind::Benefit, dec!(40), Recurrence::Monthly, 0),
        ];
        let cf = generate_monthly_cashflow(&items, 6, &org).unwrap();
        assert_eq!(cf.series[0], dec!(-60));
        assert_eq!(cf.totals.costs, dec!(360));
        assert_eq!(cf.totals.benefits, dec!(0));
        assert_eq!(cf.totals.net, dec!(-360));
        assert_eq!(cf.totals.net, cf.series.iter().sum::<Decimal>());
    }

    #[test]
    fn test_sign_changes_skip_zero_months() {
        let s = [dec!(-1), dec!(0), dec!(2), dec!(0), dec!(-3), dec!(4)];
        assert_eq!(count_sign_changes(&s), 3);
        assert_eq!(count_sign_changes(&[dec!(0), dec!(0)]), 0);
        assert_eq!(count_sign_changes(&[dec!(-5), dec!(-1), dec!(3)]), 1);
    }

    #[test]
    fn test_irregular_flag() {
        let org = OrganizationalSettings::default();
        let mut late_cost = line(LineItemKind::Cost, dec!(1000), Recurrence::OneTime, 4);
        late_cost.id = "decommission".into();
        let items = [
            line(LineItemKind::Cost, dec!(1000), Recurrence::OneTime, 0),
            line(LineItemKind::Benefit, dec!(300), Recurrence::OneTime, 2),
            late_cost,
        ];
        let cf = generate_monthly_cashflow(&items, 6, &org).unwrap();
        assert_eq!(cf.metadata.sign_changes, 2);
        assert!(cf.metadata.has_irregular_flow);
        assert_eq!(cf.metadata.peak_cash_flow, dec!(300));
        assert_eq!(cf.metadata.max_drawdown, dec!(1700));
    }

    #[test]
    fn test_overflowing_amounts_are_an_error() {
        let org = OrganizationalSettings::default();
        let items = [line(LineItemKind::Cost, Decimal::from_i128_with_scale(10i128.pow(28), 0), Recurrence::Monthly, 0)];
        let err = generate_monthly_cashflow(&items, 120, &org).unwrap_err();
        assert!(matches!(err, BusinessCaseError::FinancialImpossibility(_)));
    }
}
