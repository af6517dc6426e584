use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages on a 0–100 scale (8.5 = 8.5%). Never fractions.
pub type Pct = Decimal;

/// Rates expressed as decimals per period (0.0064 = 0.64% per month).
/// Only used inside discounting math; everything user-facing is `Pct`.
pub type Rate = Decimal;

/// Month index or month count on the projection timeline.
pub type Months = u32;

/// Convert a 0–1 fraction to the 0–100 percentage convention.
///
/// Scale is always declared by the caller; it is never guessed from magnitude.
pub fn pct_from_fraction(fraction: Decimal) -> Pct {
    fraction * dec!(100)
}

/// Convert a 0–100 percentage to a 0–1 fraction.
pub fn pct_to_fraction(pct: Pct) -> Decimal {
    pct / dec!(100)
}

/// Currency code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    CAD,
    USD,
    EUR,
    GBP,
    ZAR,
    BWP,
    CDF,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CAD => "CAD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::ZAR => "ZAR",
            Currency::BWP => "BWP",
            Currency::CDF => "CDF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
