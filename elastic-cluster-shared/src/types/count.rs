//! Count request and response types.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for a document count.
#[derive(Debug, Clone, Default)]
pub struct CountRequest {
    /// Company owning the data this count touches.
    pub company_id: String,
    /// Index name or pattern.
    pub index: String,
    /// Optional query document. `None` counts every visible document.
    pub body: Option<Map<String, Value>>,
}

/// Decoded count response.
#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default, rename = "_shards")]
    pub shards: Map<String, Value>,
}
