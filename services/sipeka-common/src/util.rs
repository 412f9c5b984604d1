//! Utility functions for Sipeka services.

use crate::types::RawValue;

/// Coerce a raw yearly value to a number for analysis.
///
/// The store keeps numbers and numbers-as-text in the same column, and
/// operators occasionally enter plain text. Anything that does not parse
/// as a finite number coerces to `0.0` silently. This is a documented
/// lossy policy: callers that need to distinguish "no growth" from
/// "no usable data" must inspect the value history themselves.
///
/// The empty string coerces to `0.0` as well, matching how the input
/// forms submit untouched fields.
pub fn coerce_numeric_or_zero(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) if n.is_finite() => *n,
        RawValue::Number(_) => 0.0,
        RawValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => 0.0,
        },
    }
}
