use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusinessCaseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    /// A model that violates the structural invariants the analyzer relies on
    /// (baseline count, option count, empty line items, stale `_calc`).
    #[error("Malformed business case: {0}")]
    MalformedModel(String),

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BusinessCaseError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BusinessCaseError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BusinessCaseError {
    fn from(e: serde_json::Error) -> Self {
        BusinessCaseError::SerializationError(e.to_string())
    }
}
