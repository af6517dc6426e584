use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Blocking, field-scoped finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Advisory finding; never affects `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>, code: Option<&str>) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
            code: code.map(str::to_string),
        });
    }

    pub fn warn(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        recommendation: Option<&str>,
    ) {
        self.warnings.push(ValidationWarning {
            field: field.into(),
            message: message.into(),
            recommendation: recommendation.map(str::to_string),
        });
    }

    /// Append another check's findings, preserving order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|w| w.message.contains(needle))
    }

    pub fn has_error_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code.as_deref() == Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_keeps_result_valid() {
        let mut r = ValidationResult::new();
        r.warn("x", "advisory", None);
        assert!(r.is_valid);
    }

    #[test]
    fn test_merge_ands_validity() {
        let mut total = ValidationResult::new();
        let mut failing = ValidationResult::new();
        failing.error("options", "bad", Some("BASELINE_COUNT"));
        total.merge(ValidationResult::new());
        total.merge(failing);
        assert!(!total.is_valid);
        assert!(total.has_error_code("BASELINE_COUNT"));
    }

    #[test]
    fn test_wire_shape() {
        let mut r = ValidationResult::new();
        r.error("options", "Exactly one baseline option is required", Some("BASELINE_COUNT"));
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["isValid"], false);
        assert_eq!(v["errors"][0]["severity"], "error");
        assert_eq!(v["errors"][0]["code"], "BASELINE_COUNT");
    }
}
