//! Routing resolution errors.

use thiserror::Error;

use crate::errors::CacheError;

/// Failures raised while resolving a `(company_id, index_type)` pair to a
/// cluster client and index name.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A required argument was empty.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// The elastic-sync service could not be reached.
    #[error("elastic sync request failed: {0}")]
    SyncTransport(String),

    /// The elastic-sync service answered with an unexpected status.
    #[error("elastic sync returned status {status}: {body}")]
    SyncStatus { status: u16, body: String },

    /// The elastic-sync service answered 200 with an undecodable body.
    #[error("failed to decode elastic sync response: {0}")]
    SyncDecode(String),

    /// The resolved cluster name is not present in the registry.
    #[error("cluster {0:?} not found in registry")]
    UnknownCluster(String),

    /// A cache invalidation failed.
    #[error("settings cache error: {0}")]
    Cache(#[from] CacheError),
}
