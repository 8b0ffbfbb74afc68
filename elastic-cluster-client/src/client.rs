//! Typed Elasticsearch operations over one cluster's transport.
//!
//! Every operation whose body is a structured query goes through the same
//! funnel before dispatch: classify the target index, copy the caller's
//! document, inject the company filter when the index is shared, then
//! serialise and execute. Operations carrying opaque bodies (bulk, PIT,
//! index admin, single-document writes) dispatch verbatim.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use elastic_cluster_shared::{
    BulkRequest, BulkResponse, CountRequest, CountResponse, CreateDocumentRequest,
    CreateDocumentResponse, CreateIndexRequest, DeleteByQueryRequest, DeleteByQueryResponse,
    OpenPitRequest, Pit, SearchRequest, SearchResponse, UpdateByQueryRequest,
    UpdateByQueryResponse,
};

use crate::errors::OperationError;
use crate::interfaces::{ElasticTransport, TransportRequest, TransportResponse};
use crate::query::{detect_index_target, inject_company_filter};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_NDJSON: &str = "application/x-ndjson";

/// Keep-alive applied when an open-PIT request does not name one.
const DEFAULT_PIT_KEEP_ALIVE: &str = "1m";

/// Typed client for a single Elasticsearch cluster.
///
/// Cheap to share: all state is one transport handle. Instances are
/// usually obtained from [`Resolver::resolve`](crate::Resolver::resolve),
/// which picks the cluster for a given company and index type.
pub struct ElasticClient {
    transport: Arc<dyn ElasticTransport>,
}

impl std::fmt::Debug for ElasticClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticClient").finish_non_exhaustive()
    }
}

impl ElasticClient {
    /// Create a client over the given transport.
    pub fn new(transport: Arc<dyn ElasticTransport>) -> Self {
        Self { transport }
    }

    /// Shared handle to the underlying transport, for raw requests the
    /// typed surface does not cover.
    pub fn transport(&self) -> Arc<dyn ElasticTransport> {
        Arc::clone(&self.transport)
    }

    /// Execute a search.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let body = guarded_body(&request.index, &request.company_id, request.body.as_ref())?;

        let mut query = Vec::new();
        if let Some(size) = request.size {
            query.push(("size".to_string(), size.to_string()));
        }
        if let Some(from) = request.from {
            query.push(("from".to_string(), from.to_string()));
        }
        if request.track_total_hits {
            query.push(("track_total_hits".to_string(), "true".to_string()));
        }

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_search", request.index),
                query,
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        decode_json("search", &response)
    }

    /// Count documents matching a query. A missing query counts every
    /// document the company is allowed to see.
    pub async fn count(&self, request: &CountRequest) -> Result<CountResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let body = guarded_body(&request.index, &request.company_id, request.body.as_ref())?;

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_count", request.index),
                query: Vec::new(),
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        decode_json("count", &response)
    }

    /// Delete every document matching a query.
    pub async fn delete_by_query(
        &self,
        request: &DeleteByQueryRequest,
    ) -> Result<DeleteByQueryResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let body = guarded_body(&request.index, &request.company_id, Some(&request.body))?;

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_delete_by_query", request.index),
                query: Vec::new(),
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        decode_json("delete_by_query", &response)
    }

    /// Update every document matching a query.
    pub async fn update_by_query(
        &self,
        request: &UpdateByQueryRequest,
    ) -> Result<UpdateByQueryResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let body = guarded_body(&request.index, &request.company_id, Some(&request.body))?;

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_update_by_query", request.index),
                query: Vec::new(),
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        decode_json("update_by_query", &response)
    }

    /// Execute bulk operations. The NDJSON body is carried verbatim and
    /// the call waits for the changes to become searchable.
    pub async fn bulk(&self, request: &BulkRequest) -> Result<BulkResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_bulk", request.index),
                query: vec![("refresh".to_string(), "wait_for".to_string())],
                content_type: Some(CONTENT_TYPE_NDJSON),
                body: Some(request.body.clone().into_bytes()),
            })
            .await?;

        decode_json("bulk", &response)
    }

    /// Open a point-in-time reader on an index.
    pub async fn open_pit(&self, request: &OpenPitRequest) -> Result<Pit, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let keep_alive = request
            .keep_alive
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_PIT_KEEP_ALIVE);

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::POST,
                path: format!("/{}/_pit", request.index),
                query: vec![("keep_alive".to_string(), keep_alive.to_string())],
                content_type: None,
                body: None,
            })
            .await?;

        decode_json("open_pit", &response)
    }

    /// Close a point-in-time reader.
    pub async fn close_pit(&self, pit_id: &str) -> Result<(), OperationError> {
        if pit_id.is_empty() {
            return Err(OperationError::PitIdRequired);
        }

        let body = serde_json::to_vec(&serde_json::json!({ "id": pit_id }))
            .map_err(OperationError::Encode)?;

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::DELETE,
                path: "/_pit".to_string(),
                query: Vec::new(),
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        ensure_success("close_pit", &response)
    }

    /// Create an index with the given mappings and settings.
    pub async fn create_index(&self, request: &CreateIndexRequest) -> Result<(), OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let body = match &request.body {
            Some(mappings) => Some(serde_json::to_vec(mappings).map_err(OperationError::Encode)?),
            None => None,
        };
        let content_type = body.as_ref().map(|_| CONTENT_TYPE_JSON);

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::PUT,
                path: format!("/{}", request.index),
                query: Vec::new(),
                content_type,
                body,
            })
            .await?;

        ensure_success("create_index", &response)
    }

    /// Delete an index.
    pub async fn delete_index(&self, index: &str) -> Result<(), OperationError> {
        if index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let response = self
            .transport
            .execute(TransportRequest::new(
                Method::DELETE,
                format!("/{}", index),
            ))
            .await?;

        ensure_success("delete_index", &response)
    }

    /// Check whether an index exists.
    ///
    /// Keeps the boolean shape of a HEAD probe: only a 200 means the index
    /// is there, and a transport failure reads as absent rather than as an
    /// error. Callers that must distinguish an unreachable cluster from a
    /// missing index should probe the cluster separately.
    pub async fn index_exists(&self, index: &str) -> Result<bool, OperationError> {
        if index.is_empty() {
            return Err(OperationError::IndexRequired);
        }

        let result = self
            .transport
            .execute(TransportRequest::new(Method::HEAD, format!("/{}", index)))
            .await;

        match result {
            Ok(response) => Ok(response.status == 200),
            Err(err) => {
                error!(index = %index, error = %err, "index existence probe failed");
                Ok(false)
            }
        }
    }

    /// Create or replace a document under a specific ID. The body is
    /// carried verbatim.
    pub async fn create_document(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<CreateDocumentResponse, OperationError> {
        if request.index.is_empty() {
            return Err(OperationError::IndexRequired);
        }
        if request.document_id.is_empty() {
            return Err(OperationError::DocumentIdRequired);
        }

        let body = serde_json::to_vec(&request.body).map_err(OperationError::Encode)?;

        let response = self
            .transport
            .execute(TransportRequest {
                method: Method::PUT,
                path: format!("/{}/_doc/{}", request.index, request.document_id),
                query: Vec::new(),
                content_type: Some(CONTENT_TYPE_JSON),
                body: Some(body),
            })
            .await?;

        decode_json("create_document", &response)
    }
}

/// Build the outbound body for a query-bearing operation.
///
/// Works on a structural copy of the caller's document so the original can
/// keep being used (for retries or logging) while the copy gets the
/// company filter when the index is shared.
fn guarded_body(
    index: &str,
    company_id: &str,
    body: Option<&Map<String, Value>>,
) -> Result<Vec<u8>, OperationError> {
    let target = detect_index_target(index);

    let mut working = body.cloned().unwrap_or_default();
    inject_company_filter(&mut working, company_id, target)?;

    serde_json::to_vec(&Value::Object(working)).map_err(OperationError::Encode)
}

/// Map a transport response to a decoded value or a status error.
fn decode_json<T: DeserializeOwned>(
    op: &'static str,
    response: &TransportResponse,
) -> Result<T, OperationError> {
    ensure_success(op, response)?;

    serde_json::from_slice(&response.body).map_err(|source| OperationError::ResponseDecode {
        status: response.status,
        source,
    })
}

/// Surface any non-2xx status as a typed error, without decoding the body.
fn ensure_success(op: &'static str, response: &TransportResponse) -> Result<(), OperationError> {
    if response.is_success() {
        return Ok(());
    }

    error!(
        op,
        status = response.status,
        body = %String::from_utf8_lossy(&response.body),
        "elasticsearch returned error status"
    );

    Err(OperationError::Status {
        op,
        status: response.status,
    })
}
