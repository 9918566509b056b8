//! Path construction for resource endpoints.
//!
//! Identifiers are normalized with [`normalize_id`] and then percent-encoded
//! so a string id can never add path segments or a query string.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;

use crate::error::Result;
use crate::id::normalize_id;

/// Characters encoded inside a single path segment (RFC 3986 section 3.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'\\');

/// Percent-encode one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Join a collection path and an identifier: `/v1/monitor` + `12` → `/v1/monitor/12`.
///
/// Fails with `UnsupportedIdType` when `id` is not a string or an integer.
pub fn resource_path(collection: &str, id: impl Into<Value>) -> Result<String> {
    let id = normalize_id(id)?;
    Ok(format!("{}/{}", collection, encode_path_segment(&id)))
}
