//! Bulk request and response types.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for a bulk operation.
///
/// `body` is newline-delimited JSON as expected by the `_bulk` endpoint;
/// it is carried verbatim.
#[derive(Debug, Clone, Default)]
pub struct BulkRequest {
    /// Index receiving the operations.
    pub index: String,
    /// Bulk operations body (NDJSON).
    pub body: String,
}

/// Decoded bulk response.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,
    /// True when at least one item in the batch failed.
    #[serde(default)]
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}
