//! Delete-by-query request and response types.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for deleting every document matching a query.
#[derive(Debug, Clone, Default)]
pub struct DeleteByQueryRequest {
    /// Company owning the data this deletion touches.
    pub company_id: String,
    /// Index name.
    pub index: String,
    /// Query document selecting the documents to delete.
    pub body: Map<String, Value>,
}

/// Decoded delete-by-query response.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteByQueryResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub deleted: u64,
    #[serde(default)]
    pub batches: u64,
    #[serde(default)]
    pub version_conflicts: u64,
    #[serde(default)]
    pub failures: Vec<Map<String, Value>>,
}
