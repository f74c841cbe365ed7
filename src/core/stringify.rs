//! Canonical string rendering for query values.

use crate::types::QueryValue;

/// Render a query value as the string that gets percent-encoded.
///
/// Total over every [`QueryValue`]:
/// - strings pass through unchanged
/// - error values render their stack, or their message when no stack exists
/// - JSON objects and arrays render as compact JSON
/// - everything else uses default coercion (`undefined`, `null`, `true`, `NaN`, ...)
///
/// # Examples
///
/// ```
/// use routeurl::{any_to_str, QueryValue};
///
/// assert_eq!(any_to_str(&QueryValue::from("two")), "two");
/// assert_eq!(any_to_str(&QueryValue::from(1)), "1");
/// assert_eq!(any_to_str(&QueryValue::Undefined), "undefined");
/// assert_eq!(any_to_str(&QueryValue::Number(f64::NAN)), "NaN");
/// ```
pub fn any_to_str(value: &QueryValue) -> String {
    match value {
        QueryValue::Str(s) => s.clone(),
        QueryValue::Error(err) => err.stack.clone().unwrap_or_else(|| err.message.clone()),
        QueryValue::Json(json) => match json {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => format_number(f),
                None => n.to_string(),
            },
            other => other.to_string(),
        },
        QueryValue::Number(n) => format_number(*n),
        QueryValue::Bool(b) => b.to_string(),
        QueryValue::Null => "null".to_string(),
        QueryValue::Undefined => "undefined".to_string(),
    }
}

/// Format a number the way ECMAScript's `String(n)` does for common values.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// magnitudes of at least `1e21` or below `1e-6` use exponent notation
/// (`1e+21`, `1.5e-7`), and non-finite values print as `NaN`, `Infinity` or
/// `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // `{:e}` prints the shortest round-trip digits; ECMAScript signs positive exponents
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}
