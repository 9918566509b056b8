//! Testing utilities for Datadog client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! ```ignore
//! use datadog_client::testing::{load_fixture, load_fixture_bytes};
//!
//! let pipeline = load_fixture("logs/pipeline_response.json");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture as a `serde_json::Value`.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    serde_json::from_slice(&load_fixture_bytes(fixture_path)).expect("Invalid JSON in fixture")
}

/// Load a fixture's raw bytes, for feeding decoders that take `&[u8]`.
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture_bytes(path: &str) -> Vec<u8> {
    let full_path = fixture_path(path);
    std::fs::read(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
