//! Routing resolution.
//!
//! The resolver decides, for every `(company_id, index_type)` pair, which
//! cluster and physical index serve the request. Resolution is a
//! three-step funnel: the Redis cache, then the elastic-sync service, then
//! a deterministic fallback for companies that have not been migrated yet.
//! The fallback is never cached, because the company may be migrated at
//! any moment and a cached route would freeze the old destination.

mod redis_cache;
mod sync_client;

pub use redis_cache::RedisSettingsCache;
pub use sync_client::HttpSyncGateway;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use elastic_cluster_shared::ClusterInfo;
use tracing::debug;

use crate::client::ElasticClient;
use crate::errors::{CacheError, ResolveError};
use crate::interfaces::{SettingsCache, SyncGateway};
use crate::registry::Registry;

/// Deadline for the detached cache write after a successful sync fetch.
const CACHE_WRITE_DEADLINE: Duration = Duration::from_secs(2);

/// Default time to live for cached routing records.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache key for one `(company_id, index_type)` routing record.
pub fn settings_key(company_id: &str, index_type: &str) -> String {
    format!("es_settings_{}_{}", company_id, index_type)
}

/// Tunables for the resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Time to live for cached routing records. Defaults to 24 hours.
    pub cache_ttl: Duration,
    /// Index-name prefix per index type, used on the fallback path. A
    /// missing entry falls back to `{index_type}_`.
    pub index_prefixes: HashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            index_prefixes: HashMap::new(),
        }
    }
}

impl ResolverConfig {
    /// Override the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Register a fallback index prefix for an index type.
    pub fn with_index_prefix(
        mut self,
        index_type: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.index_prefixes.insert(index_type.into(), prefix.into());
        self
    }
}

/// Routing oracle mapping `(company_id, index_type)` to an operation-ready
/// client and an index name.
///
/// Constructed once after the registry and safe for concurrent use; all of
/// its state is read-only after construction. The registry must outlive
/// the resolver, which holds it through a shared handle.
pub struct Resolver {
    registry: Arc<Registry>,
    cache: Arc<dyn SettingsCache>,
    sync: Arc<dyn SyncGateway>,
    cache_ttl: Duration,
    index_prefixes: HashMap<String, String>,
    clients: HashMap<String, ElasticClient>,
}

impl Resolver {
    /// Create a resolver over an existing registry.
    ///
    /// One [`ElasticClient`] is pre-created per registry entry; lookups at
    /// resolution time are plain map reads.
    pub fn new(
        registry: Arc<Registry>,
        cache: Arc<dyn SettingsCache>,
        sync: Arc<dyn SyncGateway>,
        config: ResolverConfig,
    ) -> Self {
        let clients = registry
            .entries()
            .map(|entry| {
                (
                    entry.name().to_string(),
                    ElasticClient::new(entry.transport()),
                )
            })
            .collect();

        Self {
            registry,
            cache,
            sync,
            cache_ttl: config.cache_ttl,
            index_prefixes: config.index_prefixes,
            clients,
        }
    }

    /// Resolve a company's index type to a client and an index name.
    ///
    /// The returned client borrows from the resolver's pre-created map and
    /// must not outlive it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use elastic_cluster_client::{
    ///     ClusterConfig, Config, HttpSyncGateway, RedisSettingsCache, Registry, Resolver,
    ///     ResolverConfig,
    /// };
    /// use elastic_cluster_shared::SearchRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::new("tier-gold").with_cluster(ClusterConfig {
    ///     name: "tier-gold".to_string(),
    ///     version: 8,
    ///     addresses: vec!["http://es-gold-1:9200".to_string()],
    ///     username: "elastic".to_string(),
    ///     password: "changeme".to_string(),
    /// });
    /// let registry = Arc::new(Registry::from_config(&config)?);
    ///
    /// let cache = Arc::new(RedisSettingsCache::connect("redis://cache:6379").await?);
    /// let sync = Arc::new(HttpSyncGateway::new("http://elastic-sync:8080"));
    /// let resolver = Resolver::new(registry, cache, sync, ResolverConfig::default());
    ///
    /// let (client, index_name) = resolver.resolve("company-123", "product_tree").await?;
    /// let response = client
    ///     .search(&SearchRequest {
    ///         company_id: "company-123".to_string(),
    ///         index: index_name,
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("{} hits", response.hits.total.value);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve(
        &self,
        company_id: &str,
        index_type: &str,
    ) -> Result<(&ElasticClient, String), ResolveError> {
        let info = self.resolve_raw(company_id, index_type).await?;

        let client = self
            .clients
            .get(&info.cluster_name)
            .ok_or_else(|| ResolveError::UnknownCluster(info.cluster_name.clone()))?;

        Ok((client, info.index_name))
    }

    /// Resolve a company's index type to its raw routing record.
    ///
    /// For companies without a routing entry the record is synthesised:
    /// the default cluster's name, a zero cluster ID, and an index name of
    /// the form `{prefix}{company_id}`.
    pub async fn resolve_raw(
        &self,
        company_id: &str,
        index_type: &str,
    ) -> Result<ClusterInfo, ResolveError> {
        if company_id.is_empty() {
            return Err(ResolveError::MissingArgument("company_id"));
        }
        if index_type.is_empty() {
            return Err(ResolveError::MissingArgument("index_type"));
        }

        let key = settings_key(company_id, index_type);

        // Cache first. Anything short of a decodable routed record is a
        // miss, never a failure.
        match self.cache.get(&key).await {
            Ok(Some(info)) if info.has_routing() => {
                debug!(key = %key, cluster = %info.cluster_name, "routing settings cache hit");
                return Ok(info);
            }
            Ok(_) => {}
            Err(err) => {
                debug!(key = %key, error = %err, "routing settings cache lookup failed");
            }
        }

        match self.sync.fetch(company_id, index_type).await? {
            Some(info) => {
                self.schedule_cache_write(key, info.clone());
                Ok(info)
            }
            None => {
                debug!(
                    company_id = %company_id,
                    index_type = %index_type,
                    "company not migrated, routing to default cluster"
                );
                Ok(self.fallback_info(company_id, index_type))
            }
        }
    }

    /// Drop the cached routing record for one `(company_id, index_type)`.
    pub async fn invalidate(
        &self,
        company_id: &str,
        index_type: &str,
    ) -> Result<(), CacheError> {
        self.cache
            .delete(&settings_key(company_id, index_type))
            .await
    }

    /// Drop every cached routing record belonging to a company.
    pub async fn invalidate_all(&self, company_id: &str) -> Result<(), CacheError> {
        self.cache
            .delete_matching(&format!("es_settings_{}_*", company_id))
            .await
    }

    /// Synthesise a routing record for a company that has no entry yet.
    fn fallback_info(&self, company_id: &str, index_type: &str) -> ClusterInfo {
        let prefix = self
            .index_prefixes
            .get(index_type)
            .cloned()
            .unwrap_or_else(|| format!("{}_", index_type));

        ClusterInfo {
            cluster_id: 0,
            version: 0,
            cluster_name: self.registry.default_name().to_string(),
            index_name: format!("{}{}", prefix, company_id),
        }
    }

    /// Write a freshly fetched record to the cache on a detached task.
    ///
    /// The write deliberately does not share the caller's deadline: the
    /// caller's request typically completes right after resolution, and a
    /// write tied to it would be cancelled more often than it lands. The
    /// task gets its own short deadline instead, and whatever happens to
    /// it never reaches the caller.
    fn schedule_cache_write(&self, key: String, info: ClusterInfo) {
        let cache = Arc::clone(&self.cache);
        let ttl = self.cache_ttl;

        tokio::spawn(async move {
            match tokio::time::timeout(CACHE_WRITE_DEADLINE, cache.put(&key, &info, ttl)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    debug!(key = %key, error = %err, "routing settings cache write failed");
                }
                Err(_) => {
                    debug!(key = %key, "routing settings cache write timed out");
                }
            }
        });
    }
}
