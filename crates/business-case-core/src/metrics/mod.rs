//! Investment metrics over a monthly cashflow series.
//!
//! Rates in and percentages out are on the 0–100 scale.

pub mod discounting;
pub mod payback;
pub mod returns;

pub use discounting::{apply_benefit_tax, calculate_mirr, calculate_npv, MirrResult};
pub use payback::{calculate_discounted_payback, calculate_payback_period, PaybackResult};
pub use returns::{benefit_cost_ratio, calculate_roi, profitability_index};
