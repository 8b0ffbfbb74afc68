//! Core data structures shared between the client crate and its consumers.
//!
//! Each module holds one family of wire types. Request types are plain
//! structs owned by the caller; response types derive `Deserialize` and
//! tolerate missing fields, matching what mixed-version clusters return.

pub mod bulk;
pub mod cluster_info;
pub mod count;
pub mod delete_by_query;
pub mod document;
pub mod index_admin;
pub mod index_target;
pub mod point_in_time;
pub mod search;
pub mod update_by_query;

pub use bulk::{BulkRequest, BulkResponse};
pub use cluster_info::ClusterInfo;
pub use count::{CountRequest, CountResponse};
pub use delete_by_query::{DeleteByQueryRequest, DeleteByQueryResponse};
pub use document::{CreateDocumentRequest, CreateDocumentResponse};
pub use index_admin::CreateIndexRequest;
pub use index_target::IndexTarget;
pub use point_in_time::{OpenPitRequest, Pit};
pub use search::{SearchRequest, SearchResponse};
pub use update_by_query::{UpdateByQueryRequest, UpdateByQueryResponse};
