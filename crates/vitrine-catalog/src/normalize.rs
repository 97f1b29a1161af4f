//! Normalization from the raw stock payload to [`vitrine_core::Product`].
//!
//! Every entry yields a product. Missing or wrong-typed fields fall back to
//! defaults instead of failing; a payload that is not an array yields an
//! empty catalog.

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use vitrine_core::{Product, PLACEHOLDER_NAME};

use crate::coerce::{first_non_null, first_text, is_truthy, to_decimal, to_number, to_text};

/// Normalizes a whole payload, keeping entry order.
#[must_use]
pub fn normalize_payload(payload: &Value) -> Vec<Product> {
    let Some(entries) = payload.as_array() else {
        tracing::warn!(kind = value_kind(payload), "catalog payload is not an array");
        return Vec::new();
    };
    entries.iter().map(normalize_entry).collect()
}

/// Normalizes one payload entry. Entries that are not objects produce a
/// product made only of defaults.
#[must_use]
pub fn normalize_entry(entry: &Value) -> Product {
    let empty = Map::new();
    let fields = entry.as_object().unwrap_or(&empty);

    Product {
        name: first_text(fields, &["name", "titre"])
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        price: price_of(fields),
        stock: stock_of(fields),
        images: images_of(fields),
        category: first_text(fields, &["category", "categorie"]),
        is_new: ["isNew", "nouveau", "nouveaute"]
            .iter()
            .filter_map(|key| fields.get(*key))
            .any(is_truthy),
        description: first_text(fields, &["description", "desc"]).unwrap_or_default(),
    }
}

/// `price`, else `prix`, else zero. Only `null` or a missing key moves on to
/// the next candidate. Unreadable and negative amounts become zero.
fn price_of(fields: &Map<String, Value>) -> Decimal {
    first_non_null(fields, &["price", "prix"])
        .and_then(to_decimal)
        .filter(|amount| !amount.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// A JSON number is kept as is, `false` means none left, any other truthy
/// value is read as a number (zero if unreadable). Anything else leaves
/// stock untracked.
fn stock_of(fields: &Map<String, Value>) -> Option<f64> {
    match fields.get("stock") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(false)) => Some(0.0),
        Some(value) if is_truthy(value) => Some(to_number(value).unwrap_or(0.0)),
        _ => None,
    }
}

/// The `images` array when there is one (non-empty strings only), else the
/// single `image` field, else nothing.
fn images_of(fields: &Map<String, Value>) -> Vec<String> {
    if let Some(Value::Array(items)) = fields.get("images") {
        return items
            .iter()
            .filter_map(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
            .collect();
    }
    fields
        .get("image")
        .filter(|value| is_truthy(value))
        .and_then(to_text)
        .into_iter()
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
