//! Integration tests for the typed operations.
//!
//! These drive the real `ElasticClient` over a recording transport to pin
//! the exact outbound requests: paths, query-string parameters, content
//! types, and above all the company filter injected into every query that
//! targets a shared index.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use elastic_cluster_client::{
    ElasticClient, ElasticTransport, MutationError, OperationError, TransportError,
    TransportRequest, TransportResponse,
};
use elastic_cluster_shared::{
    BulkRequest, CountRequest, CreateDocumentRequest, DeleteByQueryRequest, OpenPitRequest,
    SearchRequest, UpdateByQueryRequest,
};

const PER_COMPANY_INDEX: &str = "products_01234567-89ab-cdef-0123-456789abcdef";

/// Transport double that records every request and answers with a fixed
/// response.
struct RecordingTransport {
    status: u16,
    body: &'static str,
    fail: bool,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    fn with_response(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn ok() -> Arc<Self> {
        Self::with_response(200, "{}")
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            status: 0,
            body: "",
            fail: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was dispatched")
            .clone()
    }

    fn last_body_json(&self) -> Value {
        let request = self.last_request();
        serde_json::from_slice(&request.body.expect("request carried no body")).unwrap()
    }
}

#[async_trait]
impl ElasticTransport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(TransportError::MissingBaseUrl);
        }
        Ok(TransportResponse {
            status: self.status,
            body: self.body.as_bytes().to_vec(),
        })
    }
}

fn client(transport: &Arc<RecordingTransport>) -> ElasticClient {
    ElasticClient::new(Arc::clone(transport) as Arc<dyn ElasticTransport>)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {:?}", other),
    }
}

#[tokio::test]
async fn test_per_company_search_passes_query_through() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c1".to_string(),
        index: PER_COMPANY_INDEX.to_string(),
        body: Some(object(json!({"query": {"match_all": {}}}))),
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    assert_eq!(
        transport.last_body_json(),
        json!({"query": {"match_all": {}}})
    );
}

#[tokio::test]
async fn test_minted_uuid_suffix_counts_as_per_company() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c0".to_string(),
        index: format!("products_{}", uuid::Uuid::new_v4()),
        body: Some(object(json!({"query": {"term": {"sku": "x"}}}))),
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    assert_eq!(
        transport.last_body_json(),
        json!({"query": {"term": {"sku": "x"}}})
    );
}

#[tokio::test]
async fn test_shared_search_with_empty_body_gets_filter_only_query() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c2".to_string(),
        index: "products_shared".to_string(),
        body: None,
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    assert_eq!(
        transport.last_body_json(),
        json!({
            "query": {
                "bool": {
                    "filter": [{"term": {"company_id.keyword": "c2"}}]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_shared_search_wraps_match_all() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c3".to_string(),
        index: "products_shared".to_string(),
        body: Some(object(json!({"query": {"match_all": {}}}))),
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    assert_eq!(
        transport.last_body_json(),
        json!({
            "query": {
                "bool": {
                    "must": [{"match_all": {}}],
                    "filter": [{"term": {"company_id.keyword": "c3"}}]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_shared_search_appends_to_existing_filter_array() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c4".to_string(),
        index: "products_shared".to_string(),
        body: Some(object(json!({
            "query": {
                "bool": {
                    "must": [{"term": {"status": "active"}}],
                    "filter": [{"range": {"price": {"gte": 10}}}]
                }
            }
        }))),
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    let body = transport.last_body_json();
    let filters = body["query"]["bool"]["filter"].as_array().unwrap();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0], json!({"range": {"price": {"gte": 10}}}));
    assert_eq!(filters[1], json!({"term": {"company_id.keyword": "c4"}}));
}

#[tokio::test]
async fn test_shared_delete_by_query_promotes_filter_object() {
    let transport = RecordingTransport::ok();
    let request = DeleteByQueryRequest {
        company_id: "c5".to_string(),
        index: "products_shared".to_string(),
        body: object(json!({
            "query": {
                "bool": {
                    "filter": {"term": {"is_active": true}}
                }
            }
        })),
    };

    client(&transport).delete_by_query(&request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.path, "/products_shared/_delete_by_query");

    let body = transport.last_body_json();
    let filters = body["query"]["bool"]["filter"].as_array().unwrap();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0], json!({"term": {"is_active": true}}));
    assert_eq!(filters[1], json!({"term": {"company_id.keyword": "c5"}}));
}

#[tokio::test]
async fn test_shared_update_by_query_keeps_script_sibling() {
    let transport = RecordingTransport::ok();
    let request = UpdateByQueryRequest {
        company_id: "c6".to_string(),
        index: "products_shared".to_string(),
        body: object(json!({
            "script": {"source": "ctx._source.archived = true"},
            "query": {"match_all": {}}
        })),
    };

    client(&transport).update_by_query(&request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.path, "/products_shared/_update_by_query");

    let body = transport.last_body_json();
    assert_eq!(
        body["script"],
        json!({"source": "ctx._source.archived = true"})
    );
    assert_eq!(
        body["query"]["bool"]["filter"],
        json!([{"term": {"company_id.keyword": "c6"}}])
    );
}

#[tokio::test]
async fn test_search_sets_pagination_parameters() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: "c7".to_string(),
        index: "products_shared".to_string(),
        body: None,
        size: Some(10),
        from: Some(20),
        track_total_hits: true,
    };

    client(&transport).search(&request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, reqwest::Method::POST);
    assert_eq!(sent.path, "/products_shared/_search");
    assert_eq!(sent.content_type, Some("application/json"));
    assert_eq!(
        sent.query,
        vec![
            ("size".to_string(), "10".to_string()),
            ("from".to_string(), "20".to_string()),
            ("track_total_hits".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_count_without_query_sends_empty_document() {
    let transport = RecordingTransport::ok();
    let request = CountRequest {
        company_id: "ignored".to_string(),
        index: PER_COMPANY_INDEX.to_string(),
        body: None,
    };

    client(&transport).count(&request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(
        sent.path,
        format!("/{}/_count", PER_COMPANY_INDEX)
    );
    assert_eq!(transport.last_body_json(), json!({}));
}

#[tokio::test]
async fn test_callers_document_is_never_mutated() {
    let transport = RecordingTransport::ok();
    let original = object(json!({"query": {"match_all": {}}}));
    let request = SearchRequest {
        company_id: "c8".to_string(),
        index: "products_shared".to_string(),
        body: Some(original.clone()),
        ..Default::default()
    };

    client(&transport).search(&request).await.unwrap();

    assert_eq!(request.body.unwrap(), original);
}

#[tokio::test]
async fn test_shared_query_without_company_id_fails_before_dispatch() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest {
        company_id: String::new(),
        index: "products_shared".to_string(),
        body: Some(object(json!({"query": {"match_all": {}}}))),
        ..Default::default()
    };

    let err = client(&transport).search(&request).await.unwrap_err();

    assert!(matches!(
        err,
        OperationError::Mutation(MutationError::CompanyIdRequired)
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_empty_index_is_rejected() {
    let transport = RecordingTransport::ok();
    let request = SearchRequest::default();

    let err = client(&transport).search(&request).await.unwrap_err();

    assert!(matches!(err, OperationError::IndexRequired));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_error_status_is_surfaced_without_decoding() {
    let transport = RecordingTransport::with_response(500, "definitely not json");
    let request = SearchRequest {
        company_id: "c9".to_string(),
        index: "products_shared".to_string(),
        body: None,
        ..Default::default()
    };

    let err = client(&transport).search(&request).await.unwrap_err();

    assert!(matches!(
        err,
        OperationError::Status {
            op: "search",
            status: 500
        }
    ));
}

#[tokio::test]
async fn test_undecodable_success_body_is_a_decode_error() {
    let transport = RecordingTransport::with_response(200, "[]");
    let request = SearchRequest {
        company_id: "c10".to_string(),
        index: "products_shared".to_string(),
        body: None,
        ..Default::default()
    };

    let err = client(&transport).search(&request).await.unwrap_err();

    assert!(matches!(
        err,
        OperationError::ResponseDecode { status: 200, .. }
    ));
}

#[tokio::test]
async fn test_bulk_carries_ndjson_verbatim() {
    let transport = RecordingTransport::ok();
    let body = "{\"index\":{\"_id\":\"1\"}}\n{\"name\":\"a\"}\n";
    let request = BulkRequest {
        index: "products_shared".to_string(),
        body: body.to_string(),
    };

    client(&transport).bulk(&request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.path, "/products_shared/_bulk");
    assert_eq!(sent.content_type, Some("application/x-ndjson"));
    assert_eq!(
        sent.query,
        vec![("refresh".to_string(), "wait_for".to_string())]
    );
    assert_eq!(sent.body.unwrap(), body.as_bytes());
}

#[tokio::test]
async fn test_open_pit_defaults_keep_alive() {
    let transport = RecordingTransport::with_response(200, r#"{"id":"pit-123"}"#);
    let request = OpenPitRequest {
        index: "orders_all".to_string(),
        keep_alive: None,
    };

    let pit = client(&transport).open_pit(&request).await.unwrap();

    assert_eq!(pit.id, "pit-123");
    let sent = transport.last_request();
    assert_eq!(sent.path, "/orders_all/_pit");
    assert_eq!(
        sent.query,
        vec![("keep_alive".to_string(), "1m".to_string())]
    );
}

#[tokio::test]
async fn test_close_pit_sends_id_and_requires_one() {
    let transport = RecordingTransport::ok();
    let es = client(&transport);

    let err = es.close_pit("").await.unwrap_err();
    assert!(matches!(err, OperationError::PitIdRequired));

    es.close_pit("pit-123").await.unwrap();
    let sent = transport.last_request();
    assert_eq!(sent.method, reqwest::Method::DELETE);
    assert_eq!(sent.path, "/_pit");
    assert_eq!(transport.last_body_json(), json!({"id": "pit-123"}));
}

#[tokio::test]
async fn test_index_exists_keeps_boolean_shape() {
    let found = RecordingTransport::ok();
    assert!(client(&found).index_exists("orders_all").await.unwrap());
    assert_eq!(found.last_request().method, reqwest::Method::HEAD);

    let missing = RecordingTransport::with_response(404, "");
    assert!(!client(&missing).index_exists("orders_all").await.unwrap());

    let broken = RecordingTransport::failing();
    assert!(!client(&broken).index_exists("orders_all").await.unwrap());
}

#[tokio::test]
async fn test_create_document_requires_id() {
    let transport = RecordingTransport::with_response(201, r#"{"_id":"doc-1","result":"created"}"#);
    let es = client(&transport);

    let mut request = CreateDocumentRequest {
        index: "orders_all".to_string(),
        document_id: String::new(),
        body: json!({"total": 12}),
    };
    let err = es.create_document(&request).await.unwrap_err();
    assert!(matches!(err, OperationError::DocumentIdRequired));

    request.document_id = "doc-1".to_string();
    let response = es.create_document(&request).await.unwrap();
    assert_eq!(response.id, "doc-1");
    assert_eq!(response.result, "created");
    assert_eq!(
        transport.last_request().path,
        "/orders_all/_doc/doc-1"
    );
}
