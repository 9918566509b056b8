//! Configuration management for the Datadog API client.
//!
//! This crate provides types and loaders for the connection settings and
//! API/application keys, read from builder calls, environment variables and
//! an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
