//! Dashboard models for the Datadog timeboard API (`/v1/dash`).
//!
//! Boards are addressed by their integer `id`; newer boards also carry a
//! string `new_id`, which the API accepts in the same path position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::number::{FlexibleNumber, Number};
use crate::serde_helpers::{opt_i64_from_string_or_number, opt_id_from_string_or_integer};

/// A timeboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "opt_id_from_string_or_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default)]
    pub graphs: Vec<Graph>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_variables: Vec<TemplateVariable>,
}

/// A `$name` placeholder substituted into every graph query on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tag key the variable ranges over, e.g. `host`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<GraphDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Visualization kind, e.g. `timeseries` or `query_value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viz: Option<String>,
    #[serde(default)]
    pub requests: Vec<GraphRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Yaxis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRequest {
    #[serde(rename = "q", default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditional_formats: Vec<ConditionalFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<RequestStyle>,
    /// Per-expression display settings, keyed by the expression text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, RequestMetadata>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_query: Option<ApmOrLogQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apm_query: Option<ApmOrLogQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_query: Option<ProcessQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Log or APM event query backing a graph request.
///
/// `search` and `groupBy` are kept as given, so an empty `{}` or `[]` is
/// written back rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApmOrLogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<QueryCompute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<QuerySearch>,
    #[serde(
        rename = "groupBy",
        alias = "group_by",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub group_by: Option<Vec<QueryGroupBy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCompute {
    /// `count`, `cardinality`, `avg`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    /// Rollup interval in milliseconds.
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryGroupBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<QueryGroupBySort>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryGroupBySort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    /// `asc` or `desc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

/// Live-process metric query backing a graph request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "opt_i64_from_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
}

/// Colours a query value when it satisfies `comparator value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// Y-axis bounds. Each bound is absent, a number, or `"auto"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yaxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<FlexibleNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<FlexibleNumber>,
    /// `linear`, `log`, `sqrt` or `pow<N>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

/// Envelope of `GET /v1/dash/{id}` and `POST /v1/dash`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    pub dash: Dashboard,
}

/// Envelope of `GET /v1/dash`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardListResponse {
    #[serde(default)]
    pub dashes: Vec<Dashboard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaxis_auto_and_numbers() {
        let yaxis: Yaxis =
            serde_json::from_value(json!({ "min": "auto", "max": 100, "scale": "log" })).unwrap();
        assert_eq!(yaxis.min, Some(FlexibleNumber::Automatic));
        assert_eq!(
            yaxis.max.as_ref().and_then(FlexibleNumber::as_number).map(ToString::to_string),
            Some("100".to_string())
        );

        let encoded = serde_json::to_value(&yaxis).unwrap();
        assert_eq!(encoded, json!({ "min": "auto", "max": 100, "scale": "log" }));
    }

    #[test]
    fn test_yaxis_null_and_absent() {
        let yaxis: Yaxis = serde_json::from_value(json!({ "min": null })).unwrap();
        assert_eq!(yaxis.min, None);
        assert_eq!(yaxis.max, None);
        assert_eq!(serde_json::to_value(&yaxis).unwrap(), json!({}));
    }

    #[test]
    fn test_yaxis_rejects_other_strings() {
        let err = serde_json::from_value::<Yaxis>(json!({ "max": "wrong!" })).unwrap_err();
        assert!(err.to_string().contains("invalid numeric format"));
    }

    #[test]
    fn test_dashboard_envelope() {
        let response: DashboardResponse = serde_json::from_value(json!({
            "dash": {
                "id": 2473,
                "new_id": "qc9-tuk-9kv",
                "title": "My Timeboard",
                "read_only": false,
                "graphs": [{
                    "title": "Mem",
                    "definition": {
                        "viz": "timeseries",
                        "requests": [{ "q": "avg:system.mem.free{*}", "stacked": false }]
                    }
                }]
            }
        }))
        .unwrap();

        let dash = response.dash;
        assert_eq!(dash.id, Some(2473));
        assert_eq!(dash.new_id.as_deref(), Some("qc9-tuk-9kv"));
        let request = &dash.graphs[0].definition.as_ref().unwrap().requests[0];
        assert_eq!(request.query.as_deref(), Some("avg:system.mem.free{*}"));
        assert_eq!(request.stacked, Some(false));
        assert!(dash.template_variables.is_empty());
    }

    #[test]
    fn test_empty_search_and_group_by_written_back() {
        let input = json!({
            "index": "main",
            "compute": { "aggregation": "count", "facet": "host", "interval": 300000 },
            "search": {},
            "groupBy": []
        });
        let query: ApmOrLogQuery = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(query.group_by, Some(Vec::new()));
        assert_eq!(query.compute.as_ref().and_then(|c| c.interval), Some(300000));
        assert_eq!(serde_json::to_value(&query).unwrap(), input);
    }

    #[test]
    fn test_group_by_snake_case_accepted() {
        let query: ApmOrLogQuery =
            serde_json::from_value(json!({ "group_by": [{ "facet": "service", "limit": "5" }] }))
                .unwrap();
        let groups = query.group_by.unwrap();
        assert_eq!(groups[0].facet.as_deref(), Some("service"));
        assert_eq!(groups[0].limit, Some(5));
    }
}
