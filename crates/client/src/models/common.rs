//! Types shared across Datadog API models.

use serde::Deserialize;

/// Error body returned by the Datadog API on non-success status codes.
///
/// ```json
/// { "errors": ["Monitor not found"] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiErrors {
    /// Join the messages for display, or `None` when the list is empty.
    pub fn message(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.join("; "))
        }
    }
}
