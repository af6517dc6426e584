use business_case_core::cashflow::{count_sign_changes, generate_monthly_cashflow};
use business_case_core::model::{LineItem, OrganizationalSettings, RecurrenceEnd};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn item(value: serde_json::Value) -> LineItem {
    serde_json::from_value(value).unwrap()
}

fn org() -> OrganizationalSettings {
    OrganizationalSettings::default()
}

// ===========================================================================
// Series shape
// ===========================================================================

#[test]
fn test_series_length_equals_horizon() {
    let items = vec![item(json!({
        "kind": "cost", "category": "opex", "amount": 10, "recurrence": "monthly"
    }))];
    for horizon in [6, 12, 36, 120] {
        let cf = generate_monthly_cashflow(&items, horizon, &org()).unwrap();
        assert_eq!(cf.series.len(), horizon as usize);
    }
}

#[test]
fn test_one_time_posts_only_at_start_month() {
    let items = vec![item(json!({
        "kind": "benefit", "category": "revenue", "amount": 500,
        "recurrence": "one-time", "startMonth": 3
    }))];
    let cf = generate_monthly_cashflow(&items, 12, &org()).unwrap();
    for (m, v) in cf.series.iter().enumerate() {
        let expected = if m == 3 { dec!(500) } else { Decimal::ZERO };
        assert_eq!(*v, expected, "month {m}");
    }
}

#[test]
fn test_item_starting_at_horizon_posts_nothing() {
    let items = vec![
        item(json!({
            "kind": "cost", "category": "capex", "amount": 900,
            "recurrence": "one-time", "startMonth": 12
        })),
        item(json!({
            "kind": "cost", "category": "opex", "amount": 50,
            "recurrence": "monthly", "startMonth": 20
        })),
    ];
    let cf = generate_monthly_cashflow(&items, 12, &org()).unwrap();
    assert!(cf.series.iter().all(|v| v.is_zero()));
    assert_eq!(cf.totals.costs, Decimal::ZERO);
}

#[test]
fn test_monthly_ends_at_horizon_fills_remaining_months() {
    let items = vec![item(json!({
        "kind": "benefit", "category": "productivity", "amount": 100,
        "recurrence": "monthly", "startMonth": 4,
        "recurrenceBehavior": { "endsAtHorizon": true }
    }))];
    let cf = generate_monthly_cashflow(&items, 10, &org()).unwrap();
    let expected: Vec<Decimal> = (0..10)
        .map(|m| if m >= 4 { dec!(100) } else { Decimal::ZERO })
        .collect();
    assert_eq!(cf.series, expected);
    assert_eq!(cf.totals.benefits, dec!(600));
}

#[test]
fn test_quarterly_with_total_occurrences() {
    let items = vec![item(json!({
        "kind": "cost", "category": "maintenance", "amount": 300,
        "recurrence": "quarterly", "startMonth": 1,
        "recurrenceBehavior": { "endsAtHorizon": false, "totalOccurrences": 3 }
    }))];
    let cf = generate_monthly_cashflow(&items, 24, &org()).unwrap();
    let posted: Vec<usize> = cf
        .series
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_zero())
        .map(|(m, _)| m)
        .collect();
    assert_eq!(posted, vec![1, 4, 7]);
    assert_eq!(cf.totals.costs, dec!(900));
}

#[test]
fn test_end_month_honoured_under_explicit_default() {
    let li = item(json!({
        "kind": "cost", "category": "licensing", "amount": 10,
        "recurrence": "monthly", "startMonth": 0, "endMonth": 5
    }));
    let mut explicit = org();
    explicit.default_recurrence_end = RecurrenceEnd::Explicit;

    let bounded = generate_monthly_cashflow(std::slice::from_ref(&li), 12, &explicit).unwrap();
    assert_eq!(bounded.totals.costs, dec!(50));

    // Horizon default ignores endMonth when no behaviour is given
    let open = generate_monthly_cashflow(std::slice::from_ref(&li), 12, &org()).unwrap();
    assert_eq!(open.totals.costs, dec!(120));
}

#[test]
fn test_annual_steps_twelve_months() {
    let items = vec![item(json!({
        "kind": "cost", "category": "compliance", "amount": 1000,
        "recurrence": "annual", "startMonth": 2
    }))];
    let cf = generate_monthly_cashflow(&items, 36, &org()).unwrap();
    assert_eq!(cf.series[2], dec!(-1000));
    assert_eq!(cf.series[14], dec!(-1000));
    assert_eq!(cf.series[26], dec!(-1000));
    assert_eq!(cf.totals.costs, dec!(3000));
}

// ===========================================================================
// Totals and metadata
// ===========================================================================

#[test]
fn test_totals_come_from_netted_months() {
    let items = vec![
        item(json!({ "kind": "cost", "category": "opex", "amount": 100, "recurrence": "one-time" })),
        item(json!({ "kind": "benefit", "category": "revenue", "amount": 100, "recurrence": "one-time" })),
        item(json!({ "kind": "cost", "category": "capex", "amount": 500, "recurrence": "one-time", "startMonth": 1 })),
        item(json!({ "kind": "benefit", "category": "revenue", "amount": 200, "recurrence": "one-time", "startMonth": 1 })),
        item(json!({ "kind": "benefit", "category": "revenue", "amount": 450, "recurrence": "one-time", "startMonth": 2 })),
    ];
    let cf = generate_monthly_cashflow(&items, 6, &org()).unwrap();
    assert_eq!(cf.series[0], Decimal::ZERO);
    assert_eq!(cf.series[1], dec!(-300));
    assert_eq!(cf.totals.costs, dec!(300));
    assert_eq!(cf.totals.benefits, dec!(450));
    assert_eq!(cf.totals.net, dec!(150));
}

#[test]
fn test_offsetting_items_leave_no_totals() {
    let items = vec![
        item(json!({ "kind": "cost", "category": "opex", "amount": 100, "recurrence": "monthly" })),
        item(json!({ "kind": "benefit", "category": "cost_savings", "amount": 100, "recurrence": "monthly" })),
    ];
    let cf = generate_monthly_cashflow(&items, 12, &org()).unwrap();
    assert_eq!(cf.totals.costs, Decimal::ZERO);
    assert_eq!(cf.totals.benefits, Decimal::ZERO);
    assert_eq!(cf.metadata.sign_changes, 0);
}

#[test]
fn test_amounts_beyond_decimal_range_fail_cleanly() {
    let items = vec![item(json!({
        "kind": "benefit", "category": "revenue", "amount": "10000000000000000000000000000",
        "recurrence": "monthly"
    }))];
    let err = generate_monthly_cashflow(&items, 120, &org()).unwrap_err();
    assert!(err.to_string().contains("exceeds the representable amount"), "{err}");
}

#[test]
fn test_irregular_flow_and_drawdown() {
    let items = vec![
        item(json!({ "kind": "cost", "category": "capex", "amount": 1000, "recurrence": "one-time" })),
        item(json!({ "kind": "benefit", "category": "revenue", "amount": 400, "recurrence": "one-time", "startMonth": 1 })),
        item(json!({ "kind": "cost", "category": "capex", "amount": 200, "recurrence": "one-time", "startMonth": 2 })),
        item(json!({ "kind": "benefit", "category": "revenue", "amount": 900, "recurrence": "one-time", "startMonth": 3 })),
    ];
    let cf = generate_monthly_cashflow(&items, 6, &org()).unwrap();
    assert_eq!(cf.metadata.sign_changes, 3);
    assert!(cf.metadata.has_irregular_flow);
    assert_eq!(cf.metadata.max_drawdown, dec!(1000));
    assert_eq!(cf.metadata.peak_cash_flow, dec!(900));
}

#[test]
fn test_zero_months_do_not_count_as_sign_changes() {
    let series = vec![dec!(-5), Decimal::ZERO, Decimal::ZERO, dec!(-1), dec!(3)];
    assert_eq!(count_sign_changes(&series), 1);
}

#[test]
fn test_generation_is_deterministic() {
    let items = vec![
        item(json!({ "kind": "cost", "category": "capex", "amount": "1234.56", "recurrence": "one-time" })),
        item(json!({ "kind": "benefit", "category": "cost_savings", "amount": "77.7", "recurrence": "monthly", "startMonth": 2 })),
    ];
    let a = generate_monthly_cashflow(&items, 48, &org()).unwrap();
    let b = generate_monthly_cashflow(&items, 48, &org()).unwrap();
    assert_eq!(a, b);
}
