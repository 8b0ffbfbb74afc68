//! Transport trait definition.
//!
//! This module defines the abstract interface between the typed operations
//! and a cluster's HTTP layer. The concrete implementation lives in
//! [`crate::transport`]; tests substitute recording mocks.

use async_trait::async_trait;
use reqwest::Method;

use crate::errors::TransportError;

/// One HTTP request addressed to a cluster.
///
/// The path is relative; the transport joins it against its configured
/// base URL, taking scheme, host and userinfo from the base and keeping
/// the request's path and query untouched.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Request path (e.g. "/orders_all/_search").
    pub path: String,
    /// Query-string parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// Content type for the body, when one is sent.
    pub content_type: Option<&'static str>,
    /// Request body bytes.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Create a body-less request for the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            content_type: None,
            body: None,
        }
    }
}

/// One HTTP response as seen by the typed operations.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true when the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstracts a single cluster's HTTP entry point.
///
/// Implementations own connection pooling, TLS and authentication; they
/// add nothing beyond URL resolution and a debug record per exchange.
/// Dropping the returned future cancels the request at its next await
/// point, so caller-side deadlines compose naturally.
#[async_trait]
pub trait ElasticTransport: Send + Sync {
    /// Execute one HTTP exchange against the cluster.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
