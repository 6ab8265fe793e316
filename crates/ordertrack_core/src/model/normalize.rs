//! Coercion rules that turn loosely-typed input into record fields.
//!
//! # Responsibility
//! - Confine dynamic JSON values to this single conversion point.
//! - Provide per-field coercions that never fail.
//!
//! # Invariants
//! - Falsy values (`null`, `false`, `0`, `""`) become the field default.
//! - Non-numeric counts become `0`; negative counts are kept as given.

use serde_json::{Map, Value};

/// Untrusted input mapping, field name to arbitrary JSON value.
pub type RawRecord = Map<String, Value>;

/// Converts any JSON document into a raw record.
///
/// Non-object documents carry no fields and yield an empty record.
pub fn raw_record_from_value(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        _ => RawRecord::new(),
    }
}

/// Coerces a free-form text field. Missing or falsy values yield `""`.
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
    }
}

/// Coerces a quantity field to an integer.
///
/// Floats truncate toward zero. Anything that is not a number, a numeric
/// string, or a boolean yields `0`.
pub fn coerce_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(truncate_float))
            .unwrap_or(0),
        Some(Value::String(text)) => parse_count(text),
        Some(Value::Bool(flag)) => i64::from(*flag),
        _ => 0,
    }
}

/// Coerces a flag by truthiness.
pub fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

pub(crate) fn parse_count(text: &str) -> i64 {
    let trimmed = text.trim();
    if let Ok(count) = trimmed.parse::<i64>() {
        return count;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => truncate_float(number),
        _ => 0,
    }
}

fn truncate_float(number: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    number.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::{coerce_count, coerce_flag, coerce_text, raw_record_from_value};
    use serde_json::{json, Value};

    fn count(value: Value) -> i64 {
        coerce_count(Some(&value))
    }

    #[test]
    fn text_defaults_falsy_values_to_empty() {
        assert_eq!(coerce_text(None), "");
        assert_eq!(coerce_text(Some(&Value::Null)), "");
        assert_eq!(coerce_text(Some(&json!(false))), "");
        assert_eq!(coerce_text(Some(&json!(0))), "");
        assert_eq!(coerce_text(Some(&json!(""))), "");
    }

    #[test]
    fn text_renders_non_string_values() {
        assert_eq!(coerce_text(Some(&json!("yard 3"))), "yard 3");
        assert_eq!(coerce_text(Some(&json!(42))), "42");
        assert_eq!(coerce_text(Some(&json!(2.5))), "2.5");
        assert_eq!(coerce_text(Some(&json!(true))), "true");
        assert_eq!(coerce_text(Some(&json!(["a", 1]))), r#"["a",1]"#);
    }

    #[test]
    fn count_parses_numbers_and_numeric_text() {
        assert_eq!(count(json!(12)), 12);
        assert_eq!(count(json!("12")), 12);
        assert_eq!(count(json!(" 7 ")), 7);
        assert_eq!(count(json!(3.9)), 3);
        assert_eq!(count(json!("4.5")), 4);
        assert_eq!(count(json!("1e2")), 100);
        assert_eq!(count(json!(true)), 1);
    }

    #[test]
    fn count_falls_back_to_zero_for_non_numeric_input() {
        assert_eq!(coerce_count(None), 0);
        assert_eq!(count(Value::Null), 0);
        assert_eq!(count(json!("xyz")), 0);
        assert_eq!(count(json!("")), 0);
        assert_eq!(count(json!("NaN")), 0);
        assert_eq!(count(json!("inf")), 0);
        assert_eq!(count(json!([5])), 0);
        assert_eq!(count(json!({ "n": 5 })), 0);
    }

    #[test]
    fn count_keeps_negative_values() {
        assert_eq!(count(json!(-3)), -3);
        assert_eq!(count(json!("-8")), -8);
    }

    #[test]
    fn flag_follows_truthiness() {
        assert!(!coerce_flag(None));
        assert!(!coerce_flag(Some(&json!(0))));
        assert!(!coerce_flag(Some(&json!(""))));
        assert!(!coerce_flag(Some(&json!(false))));
        assert!(coerce_flag(Some(&json!(1))));
        assert!(coerce_flag(Some(&json!("false"))));
        assert!(coerce_flag(Some(&json!([]))));
    }

    #[test]
    fn non_object_documents_become_empty_records() {
        assert!(raw_record_from_value(json!([1, 2])).is_empty());
        assert!(raw_record_from_value(json!("mark")).is_empty());
        assert_eq!(raw_record_from_value(json!({ "mark": "A" })).len(), 1);
    }
}
