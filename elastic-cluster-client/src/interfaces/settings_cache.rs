//! Settings cache trait definition.

use std::time::Duration;

use async_trait::async_trait;
use elastic_cluster_shared::ClusterInfo;

use crate::errors::CacheError;

/// Abstracts the cache holding resolved routing records.
///
/// The production implementation is Redis-backed; tests use in-memory
/// mocks. Keys follow the `es_settings_{company_id}_{index_type}` format
/// produced by [`crate::resolver::settings_key`].
#[async_trait]
pub trait SettingsCache: Send + Sync {
    /// Fetch a routing record. `Ok(None)` covers both a missing key and a
    /// stored value that no longer decodes.
    async fn get(&self, key: &str) -> Result<Option<ClusterInfo>, CacheError>;

    /// Store a routing record with the given time to live.
    async fn put(&self, key: &str, info: &ClusterInfo, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a single routing record.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Remove every key matching a glob pattern. Implementations must
    /// enumerate keys incrementally rather than blocking the keyspace.
    async fn delete_matching(&self, pattern: &str) -> Result<(), CacheError>;
}
