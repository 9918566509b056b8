//! Centralized constants for the Datadog client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Datadog API base URL (US1 site).
pub const DEFAULT_BASE_URL: &str = "https://api.datadoghq.com/api";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound on the 429 retry budget, from any source.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Authentication Headers
// =============================================================================

/// Header carrying the organization API key.
pub const API_KEY_HEADER: &str = "DD-API-KEY";

/// Header carrying the user application key.
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";
