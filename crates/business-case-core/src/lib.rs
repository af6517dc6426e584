pub mod error;
pub mod time_value;
pub mod types;

pub mod analysis;
pub mod cashflow;
pub mod metrics;
pub mod model;
pub mod risk;
pub mod schema;

#[cfg(feature = "validation")]
pub mod validation;

#[cfg(feature = "validation")]
pub mod pipeline;

#[cfg(feature = "summary")]
pub mod summary;

pub use error::BusinessCaseError;
pub use types::*;

/// Standard result type for all business-case operations
pub type BusinessCaseResult<T> = Result<T, BusinessCaseError>;
