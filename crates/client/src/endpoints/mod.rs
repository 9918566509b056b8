//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the base URL and the
//! key pair explicitly; [`crate::DatadogClient`] methods are thin wrappers.

mod dashboards;
mod logs_pipelines;
mod monitors;
mod raw;
mod request;
pub mod url_encoding;

pub use dashboards::{
    create_dashboard, delete_dashboard, get_dashboard, list_dashboards, update_dashboard,
};
pub use logs_pipelines::{
    create_logs_pipeline, delete_logs_pipeline, get_logs_pipeline, get_logs_pipeline_order,
    list_logs_pipelines, update_logs_pipeline, update_logs_pipeline_order,
};
pub use monitors::{create_monitor, delete_monitor, get_monitor, list_monitors, update_monitor};
pub use raw::send_raw;
pub use request::send_request_with_retry;
