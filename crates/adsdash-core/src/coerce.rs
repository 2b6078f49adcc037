//! Lenient numeric coercion for provider payload values.
//!
//! The ads provider does not guarantee types: the same metric may arrive as a
//! JSON number, a numeric string, an empty string, or `null` depending on the
//! connector. Every numeric field read from a raw row passes through
//! [`coerce_number`].

use serde_json::Value;

/// Converts an arbitrary JSON value into a finite `f64`, returning `0.0` for
/// anything that cannot be read as a number.
///
/// - numbers pass through (non-finite values become `0.0`)
/// - strings are trimmed and parsed; blank or non-numeric strings yield `0.0`
/// - booleans map to `1.0` / `0.0`
/// - `null`, arrays and objects yield `0.0`
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn parse_numeric_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // `f64::from_str` accepts "inf"/"NaN" spellings; those are rejected by the
    // finiteness filter in the caller.
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_pass_through() {
        assert!((coerce_number(Some(&json!(12.5))) - 12.5).abs() < f64::EPSILON);
        assert!((coerce_number(Some(&json!(7))) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert!((coerce_number(Some(&json!("100"))) - 100.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some(&json!(" 3.25 "))) - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_becomes_zero() {
        assert!(coerce_number(Some(&json!("abc"))).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!(""))).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!("1,234"))).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!("NaN"))).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!("inf"))).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&Value::Null)).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!([1, 2]))).abs() < f64::EPSILON);
        assert!(coerce_number(None).abs() < f64::EPSILON);
    }

    #[test]
    fn booleans_map_to_unit() {
        assert!((coerce_number(Some(&json!(true))) - 1.0).abs() < f64::EPSILON);
        assert!(coerce_number(Some(&json!(false))).abs() < f64::EPSILON);
    }
}
