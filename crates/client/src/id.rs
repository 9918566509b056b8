//! Resource identifier normalization.
//!
//! Datadog ids arrive as strings (logs pipelines) or integers (monitors,
//! dashboards). Every client method that takes an id funnels it through
//! [`normalize_id`], so callers may pass whichever form they hold and get one
//! failure mode for everything else.

use serde_json::Value;

use crate::error::DecodeError;
use crate::serde_helpers::{is_integer_literal, json_type_name};

/// Normalize an identifier to its canonical string form.
///
/// Strings are returned unchanged and integers are written in base 10.
/// Booleans, floats, null, arrays and objects fail with
/// [`DecodeError::UnsupportedIdType`].
///
/// ```rust,ignore
/// assert_eq!(normalize_id("abc-xyz-123")?, "abc-xyz-123");
/// assert_eq!(normalize_id(123)?, "123");
/// ```
pub fn normalize_id(value: impl Into<Value>) -> Result<String, DecodeError> {
    normalize_id_value(&value.into())
}

/// Borrowing form of [`normalize_id`] for values already decoded from JSON.
pub fn normalize_id_value(value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if is_integer_literal(n) => Ok(n.to_string()),
        other => Err(DecodeError::UnsupportedIdType {
            type_name: json_type_name(other),
        }),
    }
}
