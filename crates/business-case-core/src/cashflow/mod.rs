pub mod generator;
pub mod recurrence;

pub use generator::{
    count_sign_changes, generate_monthly_cashflow, CashflowMetadata, CashflowTotals,
    MonthlyCashflow,
};
