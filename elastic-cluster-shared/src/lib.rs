//! # Elastic Cluster Shared
//!
//! This crate defines shared data structures used across the elastic-cluster
//! ecosystem. It includes the routing record exchanged with the elastic-sync
//! service, the index target classification, and the request/response types
//! for every Elasticsearch operation the client exposes.

pub mod types;

pub use types::bulk::{BulkRequest, BulkResponse};
pub use types::cluster_info::{ClusterInfo, INDEX_TYPE_ORDER, INDEX_TYPE_PRODUCT_TREE};
pub use types::count::{CountRequest, CountResponse};
pub use types::delete_by_query::{DeleteByQueryRequest, DeleteByQueryResponse};
pub use types::document::{CreateDocumentRequest, CreateDocumentResponse};
pub use types::index_admin::CreateIndexRequest;
pub use types::index_target::IndexTarget;
pub use types::point_in_time::{OpenPitRequest, Pit};
pub use types::search::{SearchHits, SearchRequest, SearchResponse, TotalHits};
pub use types::update_by_query::{UpdateByQueryRequest, UpdateByQueryResponse};
