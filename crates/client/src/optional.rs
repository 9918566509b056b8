//! Accessors for optional API attributes.
//!
//! Datadog omits attributes freely, so model fields are `Option<T>`. These
//! helpers read a field as `(value, present)` so callers can branch on
//! presence without matching, while still telling `Some(false)` apart from
//! `None`.

use crate::number::Number;

/// Read an optional cell, returning `(value, true)` when present and
/// `(T::default(), false)` when absent.
pub fn get_optional<T: Clone + Default>(cell: &Option<T>) -> (T, bool) {
    match cell {
        Some(value) => (value.clone(), true),
        None => (T::default(), false),
    }
}

pub fn get_bool(cell: &Option<bool>) -> (bool, bool) {
    get_optional(cell)
}

pub fn get_string(cell: &Option<String>) -> (String, bool) {
    get_optional(cell)
}

pub fn get_int(cell: &Option<i64>) -> (i64, bool) {
    get_optional(cell)
}

/// Absent numbers read as `0`.
pub fn get_number(cell: &Option<Number>) -> (Number, bool) {
    get_optional(cell)
}
