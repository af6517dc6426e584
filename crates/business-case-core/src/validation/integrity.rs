use rust_decimal::Decimal;

use super::result::ValidationResult;
use crate::model::ProjectOption;

/// Field-scoped line-item errors: non-positive amounts and recurring items
/// whose explicit end does not follow their start.
pub fn validate_cashflow_integrity(options: &[ProjectOption]) -> ValidationResult {
    let mut r = ValidationResult::new();
    for (i, option) in options.iter().enumerate() {
        for (j, item) in option.line_items.iter().enumerate() {
            if item.amount <= Decimal::ZERO {
                r.error(
                    format!("options[{i}].lineItems[{j}].amount"),
                    "Amount must be > 0",
                    None,
                );
            }
            if let Some(end) = item.end_month {
                if item.recurrence.is_recurring() && end <= item.start_month {
                    r.error(
                        format!("options[{i}].lineItems[{j}].endMonth"),
                        "endMonth must be > startMonth for recurring items",
                        None,
                    );
                }
            }
        }
    }
    r
}
