//! Serde helpers for Datadog's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON integers or strings for id fields.
//! - Name JSON types for diagnostics.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Inputs are read through `serde_json::Value`. Untagged enums are avoided because
//!   `arbitrary_precision` numbers do not survive serde's buffered content.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::id::normalize_id_value;

/// True when `n` was written as an integer literal: an optional `-` and digits.
///
/// `is_f64()` is not enough under `arbitrary_precision`: a literal such as
/// `1e400` that overflows `f64` reports `false` there.
pub fn is_integer_literal(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    let text = n.to_string();
    let digits = text.strip_prefix('-').unwrap_or(&text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Human-readable name of a JSON value's type.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if is_integer_literal(n) => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deserialize an optional identifier given as a string or an integer.
pub fn opt_id_from_string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => normalize_id_value(&value).map(Some).map_err(D::Error::custom),
    }
}

/// Deserialize an optional `i64` given as a number or a numeric string.
pub fn opt_i64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{n} is not a 64-bit integer"))),
        Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "expected an integer, found {}",
            json_type_name(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct IdWrapper {
        #[serde(default, deserialize_with = "opt_id_from_string_or_integer")]
        id: Option<String>,
    }

    #[derive(Deserialize)]
    struct IntWrapper {
        #[serde(default, deserialize_with = "opt_i64_from_string_or_number")]
        value: Option<i64>,
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(3)), "integer");
        assert_eq!(json_type_name(&json!(3.5)), "float");
        let huge: Value = serde_json::from_str("1.5e400").unwrap();
        assert_eq!(json_type_name(&huge), "float");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn test_opt_id_accepts_string_and_integer() {
        let parsed: IdWrapper = serde_json::from_str(r#"{ "id": "dbJLomG9Tz" }"#).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("dbJLomG9Tz"));

        let parsed: IdWrapper = serde_json::from_str(r#"{ "id": 91879 }"#).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("91879"));
    }

    #[test]
    fn test_opt_id_accepts_null_and_missing() {
        let parsed: IdWrapper = serde_json::from_str(r#"{ "id": null }"#).unwrap();
        assert_eq!(parsed.id, None);

        let parsed: IdWrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.id, None);
    }

    #[test]
    fn test_opt_id_rejects_float_and_bool() {
        let err = serde_json::from_str::<IdWrapper>(r#"{ "id": 1.5 }"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported id type"));

        assert!(serde_json::from_str::<IdWrapper>(r#"{ "id": true }"#).is_err());
    }

    #[test]
    fn test_opt_i64_accepts_number_and_string() {
        let parsed: IntWrapper = serde_json::from_str(r#"{ "value": 60 }"#).unwrap();
        assert_eq!(parsed.value, Some(60));

        let parsed: IntWrapper = serde_json::from_str(r#"{ "value": "120" }"#).unwrap();
        assert_eq!(parsed.value, Some(120));

        let parsed: IntWrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_opt_i64_rejects_bool() {
        assert!(serde_json::from_str::<IntWrapper>(r#"{ "value": false }"#).is_err());
    }
}
