//! Datadog REST API client.
//!
//! Typed access to logs pipelines, monitors and timeboards, built on a small
//! core that makes loosely-typed Datadog JSON safe to consume:
//!
//! - [`optional`]: `(value, present)` accessors over `Option` fields
//! - [`number`]: exact decimal [`Number`] and [`FlexibleNumber`] (`"auto"`)
//! - [`id`]: [`normalize_id`] for string-or-integer identifiers
//! - [`codec`]: the recursive, `type`-tagged logs processor tree
//!
//! The core is synchronous and does no I/O. [`DatadogClient`] supplies the
//! transport.

mod auth;
pub mod client;
pub mod codec;
pub mod endpoints;
pub mod error;
pub mod id;
pub mod models;
pub mod number;
pub mod optional;
pub mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::ApiKeys;
pub use client::DatadogClient;
pub use client::builder::DatadogClientBuilder;
pub use codec::{decode_pipeline, decode_pipelines, decode_processors, encode_pipeline};
pub use error::{ClientError, DecodeError, Result};
pub use id::{normalize_id, normalize_id_value};
pub use models::{
    Dashboard, Filter, Monitor, MonitorOptions, Pipeline, PipelineOrder, Processor,
    ProcessorDefinition, ThresholdCount, Yaxis,
};
pub use number::{AUTOMATIC, FlexibleNumber, Number, decode_flexible_number};
pub use optional::{get_bool, get_int, get_number, get_optional, get_string};
