//! Single-document request and response types.

use serde::Deserialize;
use serde_json::Value;

/// Parameters for creating or replacing a document with a specific ID.
#[derive(Debug, Clone, Default)]
pub struct CreateDocumentRequest {
    /// Index name.
    pub index: String,
    /// Document identifier.
    pub document_id: String,
    /// Document body, carried verbatim.
    pub body: Value,
}

/// Decoded response for a document write.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentResponse {
    #[serde(default, rename = "_index")]
    pub index: String,
    #[serde(default, rename = "_id")]
    pub id: String,
    /// Outcome reported by the cluster ("created" or "updated").
    #[serde(default)]
    pub result: String,
    #[serde(default, rename = "_version")]
    pub version: u64,
}
