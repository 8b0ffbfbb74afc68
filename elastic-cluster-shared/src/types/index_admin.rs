//! Index administration request types.

use serde_json::Value;

/// Parameters for creating an index.
#[derive(Debug, Clone, Default)]
pub struct CreateIndexRequest {
    /// Index name.
    pub index: String,
    /// Mappings and settings document, carried verbatim.
    pub body: Option<Value>,
}
