use crate::model::{LineItem, RecurrenceBehavior, RecurrenceEnd};
use crate::types::Months;

/// Behaviour that governs a recurring item: its own, or one synthesized from
/// the organizational default when the item carries none.
pub fn effective_behavior(item: &LineItem, default_end: RecurrenceEnd) -> RecurrenceBehavior {
    item.recurrence_behavior
        .clone()
        .unwrap_or(RecurrenceBehavior {
            ends_at_horizon: default_end == RecurrenceEnd::Horizon,
            total_occurrences: None,
        })
}

/// Exclusive end month for a recurring item. Priority:
/// `endsAtHorizon` → horizon, then `endMonth` (clamped), then
/// `totalOccurrences` (clamped), then horizon.
pub fn end_exclusive(
    item: &LineItem,
    behavior: &RecurrenceBehavior,
    step: Months,
    horizon: Months,
) -> Months {
    if behavior.ends_at_horizon {
        return horizon;
    }
    if let Some(end) = item.end_month {
        return end.min(horizon);
    }
    match behavior.total_occurrences {
        Some(n) if n > 0 => item
            .start_month
            .saturating_add(step.saturating_mul(n))
            .min(horizon),
        _ => horizon,
    }
}

/// Month indices in [0, horizon) at which the item posts its amount.
///
/// Items starting at or beyond the horizon post nothing.
pub fn occurrence_months(item: &LineItem, horizon: Months, default_end: RecurrenceEnd) -> Vec<Months> {
    let start = item.start_month;
    if start >= horizon {
        return Vec::new();
    }

    let Some(step) = item.recurrence.step_months() else {
        return vec![start];
    };

    let behavior = effective_behavior(item, default_end);
    let end = end_exclusive(item, &behavior, step, horizon);
    (start..end).step_by(step as usize).collect()
}
