//! Monitor models for the Datadog monitor API.
//!
//! Thresholds are exact [`Number`]s so values such as `0.8` or large byte
//! counts are sent back exactly as they were read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::number::Number;
use crate::serde_helpers::opt_i64_from_string_or_number;

/// A monitor definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MonitorOptions>,
}

/// Notification and evaluation options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_no_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_audit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Minutes without data before a no-data alert fires.
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub no_data_timeframe: Option<i64>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub renotify_interval: Option<i64>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_host_delay: Option<i64>,
    /// Muted scopes mapped to the POSIX time the mute ends (`None` = forever).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silenced: Option<BTreeMap<String, Option<i64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_recovery: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_recovery: Option<Number>,
}
