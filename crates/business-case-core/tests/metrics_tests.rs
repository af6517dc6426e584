use business_case_core::metrics::{
    benefit_cost_ratio, calculate_discounted_payback, calculate_mirr, calculate_npv,
    calculate_payback_period, calculate_roi, profitability_index,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// ROI and ratios
// ===========================================================================

#[test]
fn test_roi_undefined_for_zero_costs() {
    for benefits in [dec!(0), dec!(1), dec!(1000000)] {
        assert_eq!(calculate_roi(Decimal::ZERO, benefits), None);
    }
}

#[test]
fn test_roi_known_answer() {
    let roi = calculate_roi(dec!(1200), dec!(1100)).unwrap();
    assert!((roi - dec!(-8.3333)).abs() < dec!(0.001), "got {roi}");
    assert_eq!(calculate_roi(dec!(100), dec!(250)), Some(dec!(150)));
}

#[test]
fn test_bcr_and_pi() {
    assert_eq!(benefit_cost_ratio(dec!(200), dec!(500)), Some(dec!(2.5)));
    assert_eq!(benefit_cost_ratio(dec!(0), dec!(500)), None);
    assert_eq!(profitability_index(Some(dec!(100)), dec!(200)), Some(dec!(1.5)));
    assert_eq!(profitability_index(None, dec!(200)), None);
    assert_eq!(profitability_index(Some(dec!(100)), dec!(0)), None);
}

// ===========================================================================
// Payback
// ===========================================================================

#[test]
fn test_payback_all_negative_is_undefined() {
    let series = vec![dec!(-10); 24];
    let payback = calculate_payback_period(&series);
    assert_eq!(payback.months, None);
    assert_eq!(payback.break_even_month, None);
}

#[test]
fn test_payback_first_non_negative_cumulative() {
    let series = [dec!(-300), dec!(100), dec!(100), dec!(100), dec!(100)];
    let payback = calculate_payback_period(&series);
    assert_eq!(payback.months, Some(3));
    assert_eq!(payback.break_even_month, Some(3));
}

#[test]
fn test_discounted_payback_not_earlier_than_simple() {
    let mut series = vec![dec!(-1000)];
    series.extend(std::iter::repeat(dec!(100)).take(23));
    let simple = calculate_payback_period(&series).months.unwrap();
    let discounted = calculate_discounted_payback(&series, dec!(10)).unwrap().unwrap();
    assert_eq!(simple, 10);
    assert!(discounted > simple, "discounted {discounted} vs simple {simple}");
}

#[test]
fn test_discounted_payback_zero_rate_matches_simple() {
    let series = [dec!(-300), dec!(100), dec!(100), dec!(100)];
    assert_eq!(calculate_discounted_payback(&series, dec!(0)).unwrap(), Some(3));
}

// ===========================================================================
// NPV and MIRR
// ===========================================================================

#[test]
fn test_npv_annual_rate_equivalence() {
    // 1000 at month 11 discounted one full year at 10% per annum
    let mut series = vec![Decimal::ZERO; 12];
    series[11] = dec!(1100);
    let npv = calculate_npv(&series, dec!(10), None).unwrap();
    assert!((npv - dec!(1000)).abs() < dec!(0.05), "got {npv}");
}

#[test]
fn test_npv_rejects_rate_at_minus_hundred() {
    assert!(calculate_npv(&[dec!(1)], dec!(-100), None).is_err());
}

#[test]
fn test_mirr_undefined_without_negative_flows() {
    let result = calculate_mirr(&[dec!(10), dec!(20)], dec!(8), dec!(8)).unwrap();
    assert_eq!(result.mirr_pct, None);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_mirr_higher_reinvestment_rate_raises_mirr() {
    let mut series = vec![dec!(500); 24];
    series[0] = dec!(-8000);
    let low = calculate_mirr(&series, dec!(8), dec!(4)).unwrap().mirr_pct.unwrap();
    let high = calculate_mirr(&series, dec!(8), dec!(12)).unwrap().mirr_pct.unwrap();
    assert!(high > low, "{high} should exceed {low}");
}
