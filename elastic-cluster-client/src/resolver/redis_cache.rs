//! Redis-backed settings cache.

use std::time::Duration;

use async_trait::async_trait;
use elastic_cluster_shared::ClusterInfo;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use crate::errors::CacheError;
use crate::interfaces::SettingsCache;

/// Settings cache stored in Redis.
///
/// Values are UTF-8 JSON encodings of [`ClusterInfo`]. The connection
/// manager multiplexes one connection and reconnects on its own; cloning
/// it per command is the intended usage and keeps `&self` methods here.
pub struct RedisSettingsCache {
    conn: ConnectionManager,
}

impl RedisSettingsCache {
    /// Wrap an existing connection manager.
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Connect to Redis at the given URL (e.g. "redis://cache:6379").
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl SettingsCache for RedisSettingsCache {
    async fn get(&self, key: &str) -> Result<Option<ClusterInfo>, CacheError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(info) => Ok(Some(info)),
            Err(err) => {
                // A stale or foreign payload under our key; treat as absent.
                debug!(key = %key, error = %err, "discarding undecodable settings entry");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, info: &ClusterInfo, ttl: Duration) -> Result<(), CacheError> {
        let payload = serde_json::to_string(info)?;
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, payload, ttl.as_secs()).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<(), CacheError> {
        // Cursor-based SCAN keeps this safe against large keyspaces; a
        // blocking KEYS enumeration would stall the shared Redis.
        let mut scan_conn = self.conn.clone();
        let mut keys: Vec<String> = Vec::new();
        {
            let mut iter = scan_conn.scan_match::<_, String>(pattern).await?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
        }

        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn.clone();
        let _: () = conn.del(keys).await?;
        Ok(())
    }
}
