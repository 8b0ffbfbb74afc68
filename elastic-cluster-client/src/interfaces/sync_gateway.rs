//! Sync gateway trait definition.

use async_trait::async_trait;
use elastic_cluster_shared::ClusterInfo;

use crate::errors::ResolveError;

/// Abstracts the elastic-sync service that knows where each company's
/// data lives.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Ask the sync service for the routing record of one
    /// `(company_id, index_type)` pair.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(info))` - The company's index has been migrated
    /// * `Ok(None)` - No routing entry yet; the caller should fall back to
    ///   the default cluster
    /// * `Err(ResolveError)` - The service failed or answered garbage
    async fn fetch(
        &self,
        company_id: &str,
        index_type: &str,
    ) -> Result<Option<ClusterInfo>, ResolveError>;
}
