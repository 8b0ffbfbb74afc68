//! Search request and response types.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Parameters for a search request.
///
/// `body` is the full search document (query, sort, aggs and so on). When
/// the target index is shared, the client injects a `company_id` filter
/// into a copy of it before dispatch; the caller's map is never modified.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Company owning the data this search touches.
    pub company_id: String,
    /// Index name or pattern.
    pub index: String,
    /// Search document. `None` is treated as an empty document.
    pub body: Option<Map<String, Value>>,
    /// Number of results to return.
    pub size: Option<u64>,
    /// Offset for pagination.
    pub from: Option<u64>,
    /// Track total hits accurately.
    pub track_total_hits: bool,
}

/// Decoded search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default, rename = "_shards")]
    pub shards: Map<String, Value>,
    #[serde(default)]
    pub hits: SearchHits,
    #[serde(default)]
    pub pit_id: Option<String>,
}

/// Hit collection within a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub total: TotalHits,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<Map<String, Value>>,
}

/// Total hit count with its counting relation ("eq" or "gte").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalHits {
    #[serde(default)]
    pub value: u64,
    #[serde(default)]
    pub relation: String,
}
