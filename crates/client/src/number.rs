//! Exact JSON numbers and the `"auto"` threshold sentinel.
//!
//! Responsibilities:
//! - Keep numeric attributes in their decimal text form so large counters and
//!   thresholds survive a decode/encode cycle digit for digit.
//! - Decode fields that accept either a literal number or `"auto"`.
//!
//! Invariants:
//! - Backed by `serde_json::Number` with `arbitrary_precision`; no value passes
//!   through `f64` unless the caller asks for `as_f64`.
//! - `"auto"` is the only accepted string. Any other string is
//!   `InvalidNumericFormat`, never a silent zero.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::serde_helpers::json_type_name;

/// Wire keyword meaning "no explicit value, let Datadog decide".
pub const AUTOMATIC: &str = "auto";

/// A JSON number kept as exact decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(serde_json::Number);

impl Number {
    /// Build from an `f64`. Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_json(&self) -> &serde_json::Number {
        &self.0
    }
}

impl Default for Number {
    fn default() -> Self {
        Self(serde_json::Number::from(0u8))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Number {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::Number::from_str(s)
            .map(Self)
            .map_err(|_| DecodeError::InvalidNumericFormat(s.to_string()))
    }
}

impl From<serde_json::Number> for Number {
    fn from(value: serde_json::Number) -> Self {
        Self(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

/// A numeric attribute that is either an explicit value or `"auto"`.
///
/// Absence is modelled outside, as `Option<FlexibleNumber>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlexibleNumber {
    Value(Number),
    Automatic,
}

impl FlexibleNumber {
    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    /// The explicit value, or `None` for `"auto"`.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Value(number) => Some(number),
            Self::Automatic => None,
        }
    }
}

impl From<Number> for FlexibleNumber {
    fn from(value: Number) -> Self {
        Self::Value(value)
    }
}

/// Decode a loosely-typed numeric scalar.
///
/// - absent or `null` → `Ok(None)`
/// - a JSON number → `Ok(Some(FlexibleNumber::Value(..)))`, text preserved
/// - `"auto"` → `Ok(Some(FlexibleNumber::Automatic))`
/// - any other string → [`DecodeError::InvalidNumericFormat`]
/// - booleans, arrays, objects → [`DecodeError::UnsupportedNumericType`]
pub fn decode_flexible_number(scalar: Option<&Value>) -> Result<Option<FlexibleNumber>, DecodeError> {
    match scalar {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(FlexibleNumber::Value(Number(n.clone())))),
        Some(Value::String(s)) if s == AUTOMATIC => Ok(Some(FlexibleNumber::Automatic)),
        Some(Value::String(s)) => Err(DecodeError::InvalidNumericFormat(s.clone())),
        Some(other) => Err(DecodeError::UnsupportedNumericType(json_type_name(other))),
    }
}

impl Serialize for FlexibleNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(number) => number.serialize(serializer),
            Self::Automatic => serializer.serialize_str(AUTOMATIC),
        }
    }
}

impl<'de> Deserialize<'de> for FlexibleNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_flexible_number(Some(&value))
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("expected a number or \"auto\", found null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decoded_value(input: Value) -> Number {
        match decode_flexible_number(Some(&input)).unwrap() {
            Some(FlexibleNumber::Value(n)) => n,
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_is_none_not_automatic() {
        assert!(decode_flexible_number(None).unwrap().is_none());
        assert!(decode_flexible_number(Some(&Value::Null)).unwrap().is_none());
    }

    #[test]
    fn test_floats() {
        let zero = decoded_value(json!(0.0));
        assert_eq!(zero.as_f64(), Some(0.0));

        let n = decoded_value(json!(12.3));
        assert_eq!(n.as_f64(), Some(12.3));
        assert_eq!(n.to_string(), "12.3");
    }

    #[test]
    fn test_integer_widened() {
        let n = decoded_value(json!(123));
        assert_eq!(n.as_f64(), Some(123.0));
        assert_eq!(n.as_i64(), Some(123));
    }

    #[test]
    fn test_large_integer_is_exact() {
        let n = decoded_value(json!(1234567890123456789i64));
        assert_eq!(n.as_i64(), Some(1234567890123456789));
        assert_eq!(n.to_string(), "1234567890123456789");
    }

    #[test]
    fn test_number_wider_than_u64_keeps_digits() {
        let value: Value = serde_json::from_str("123456789012345678901234567890").unwrap();
        let n = decoded_value(value);
        assert_eq!(n.to_string(), "123456789012345678901234567890");
        assert_eq!(
            serde_json::to_string(&n).unwrap(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_auto_sentinel() {
        let decoded = decode_flexible_number(Some(&json!("auto"))).unwrap().unwrap();
        assert!(decoded.is_automatic());
        assert_eq!(decoded.as_number(), None);
    }

    #[test]
    fn test_other_strings_rejected() {
        let err = decode_flexible_number(Some(&json!("wrong!"))).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumericFormat(ref s) if s == "wrong!"));

        // Numeric-looking strings are not silently parsed.
        let err = decode_flexible_number(Some(&json!("12"))).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumericFormat(_)));

        let err = decode_flexible_number(Some(&json!("AUTO"))).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumericFormat(_)));
    }

    #[test]
    fn test_unsupported_types_rejected() {
        let err = decode_flexible_number(Some(&json!(false))).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedNumericType("boolean")));

        let err = decode_flexible_number(Some(&json!([1]))).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedNumericType("array")));

        let err = decode_flexible_number(Some(&json!({"v": 1}))).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedNumericType("object")));
    }

    #[test]
    fn test_flexible_number_serde() {
        let auto: FlexibleNumber = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, FlexibleNumber::Automatic);
        assert_eq!(serde_json::to_string(&auto).unwrap(), "\"auto\"");

        let value: FlexibleNumber = serde_json::from_str("-4.5").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "-4.5");

        assert!(serde_json::from_str::<FlexibleNumber>("true").is_err());
        assert!(serde_json::from_str::<FlexibleNumber>("null").is_err());
    }

    #[test]
    fn test_number_from_str() {
        let n: Number = "42.50".parse().unwrap();
        assert_eq!(n.to_string(), "42.50");
        assert!("forty-two".parse::<Number>().is_err());
    }

    #[test]
    fn test_number_default_is_zero() {
        assert_eq!(Number::default().to_string(), "0");
    }
}
