//! Data models for Datadog API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod dashboards;
pub mod logs_pipelines;
pub mod monitors;

pub use common::ApiErrors;
pub use dashboards::{
    ApmOrLogQuery, ConditionalFormat, Dashboard, DashboardListResponse, DashboardResponse, Graph,
    GraphDefinition, GraphRequest, ProcessQuery, QueryCompute, QueryGroupBy, QueryGroupBySort,
    QuerySearch, RequestMetadata, RequestStyle, TemplateVariable, Yaxis,
};
pub use logs_pipelines::{
    ArithmeticProcessor, AttributeRemapper, Category, CategoryProcessor, Filter, GrokParser,
    GrokRule, NestedPipeline, Pipeline, PipelineOrder, Processor, ProcessorDefinition,
    SourceRemapper, UrlParser, UserAgentParser,
};
pub use monitors::{Monitor, MonitorOptions, ThresholdCount};
