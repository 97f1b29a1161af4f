//! Loose value coercions for the untrusted stock payload.
//!
//! The stock file is hand-edited JSON: the same field shows up as a number,
//! a numeric string, a boolean, or not at all. These helpers give every
//! field access a defined result instead of an error.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// `null`, `false`, `0`, `NaN` and `""` count as absent; everything else,
/// including empty arrays and objects, counts as present.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First key whose value is truthy and readable as text.
pub(crate) fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter(|value| is_truthy(value))
        .find_map(to_text)
}

/// First key that is present and not `null`.
pub(crate) fn first_non_null<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

/// Strings verbatim, numbers as their decimal text. Other shapes have no
/// sensible text form.
pub(crate) fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric reading of a value. `None` when the value is not a finite number.
///
/// Strings are trimmed, and blank strings read as zero. Booleans read as
/// one and zero.
pub(crate) fn to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|f| f.is_finite())
}

/// Exact decimal reading of a value, following the same rules as
/// [`to_number`]. Numbers and numeric strings are parsed from their text so
/// `12.9` stays `12.9`.
pub(crate) fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) if !s.trim().is_empty() => parse_decimal(s.trim()),
        other => to_number(other).and_then(|f| Decimal::try_from(f).ok()),
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
