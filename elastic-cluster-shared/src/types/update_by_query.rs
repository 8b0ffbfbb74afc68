//! Update-by-query request and response types.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for updating every document matching a query.
///
/// `body` carries both the `script` and the `query` clause; sibling keys
/// are preserved when the company filter is injected.
#[derive(Debug, Clone, Default)]
pub struct UpdateByQueryRequest {
    /// Company owning the data this update touches.
    pub company_id: String,
    /// Index name.
    pub index: String,
    /// Script and query document.
    pub body: Map<String, Value>,
}

/// Decoded update-by-query response.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateByQueryResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub batches: u64,
    #[serde(default)]
    pub version_conflicts: u64,
    #[serde(default)]
    pub failures: Vec<Map<String, Value>>,
}
